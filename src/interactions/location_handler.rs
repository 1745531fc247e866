//! Location buttons: picking where a request is served, and the admin toggles.

use crate::AppState;
use crate::commands::locations::location_board;
use crate::commands::staged_reply;
use crate::exchange::Caller;
use crate::ui::Reply;

pub async fn select(state: &AppState, caller: &Caller, location_id: i32) -> Reply {
    staged_reply(state, caller, state.engine.choose_location(caller, location_id).await)
}

/// Applies right away and redraws the list with fresh buttons.
pub async fn toggle(state: &AppState, caller: &Caller, location_id: i32, active: bool) -> Reply {
    match state
        .engine
        .toggle_location(caller.id, location_id, active)
        .await
    {
        Ok(locations) => location_board(&locations),
        Err(e) => Reply::failure(&e, state.admin_id),
    }
}
