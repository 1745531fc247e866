//! Confirm / cancel buttons under a staged action.

use crate::AppState;
use crate::exchange::{Caller, Decision, Resolution};
use crate::ui::{Reply, text};

/// Resolves the presser's own staged action. The reply carries no buttons, so
/// editing the original message removes the confirm/cancel pair.
pub async fn resolve(state: &AppState, caller: &Caller, decision: Decision) -> Reply {
    match state.engine.resolve(caller.id, decision).await {
        Ok(Resolution::Applied(applied)) => Reply::text(text::applied(&applied)),
        Ok(Resolution::Cancelled(_)) => Reply::text(text::cancelled()),
        Err(e) => Reply::failure(&e, state.admin_id),
    }
}
