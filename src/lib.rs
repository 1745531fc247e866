// Library entry so integration tests and external tools can reference internal modules.
// The binary (`main.rs`) wires these together against Discord and Postgres.
pub mod commands;
pub mod config;
pub mod constants;
pub mod database;
pub mod exchange;
pub mod handler;
pub mod interactions;
pub mod model;
pub mod services;
pub mod ui;

pub use model::AppState;
