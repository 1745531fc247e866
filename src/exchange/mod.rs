//! Core of the exchange desk: domain types, input validation, the per-actor
//! confirmation stager and the workflow engine that ties them together.
//! Nothing in here knows about Discord or Postgres; both sit behind the traits
//! in [`ports`].

pub mod convert;
pub mod engine;
pub mod error;
pub mod intent;
pub mod memory;
pub mod ports;
pub mod stager;
pub mod types;
pub mod validate;

pub use convert::{Conversion, convert};
pub use engine::WorkflowEngine;
pub use error::{NotifyError, StoreError, ValidationError, WorkflowError};
pub use stager::{ConfirmationStager, DraftBook, SlotMap};
pub use types::*;
