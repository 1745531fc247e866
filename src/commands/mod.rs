//! Text and slash commands. Each handler takes the shared state and the caller
//! and returns the `Reply` to show; `handler::dispatch` picks the handler.

pub mod help;
pub mod locations;
pub mod rate;
pub mod request;
pub mod slash;
pub mod users;

use crate::AppState;
use crate::exchange::{Caller, PendingAction, WorkflowError};
use crate::ui::{Reply, buttons, text};

/// A freshly staged action shows its preview with the caller's confirm/cancel pair.
pub(crate) fn staged_reply(
    state: &AppState,
    caller: &Caller,
    staged: Result<PendingAction, WorkflowError>,
) -> Reply {
    match staged {
        Ok(action) => Reply::text(text::staged_preview(&action))
            .with_rows([buttons::confirm_row(caller.id)]),
        Err(e) => Reply::failure(&e, state.admin_id),
    }
}
