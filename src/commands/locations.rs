use super::staged_reply;
use crate::AppState;
use crate::exchange::{Caller, Location};
use crate::ui::{Reply, buttons, text};

pub async fn add(state: &AppState, caller: &Caller, args: &[&str]) -> Reply {
    staged_reply(state, caller, state.engine.stage_add_location(caller.id, args).await)
}

pub async fn list(state: &AppState, caller: &Caller) -> Reply {
    match state.engine.list_locations(caller.id).await {
        Ok(locations) => location_board(&locations),
        Err(e) => Reply::failure(&e, state.admin_id),
    }
}

/// Location list with one enable/disable button per location.
pub fn location_board(locations: &[Location]) -> Reply {
    Reply::text(text::location_list(locations)).with_rows(buttons::location_toggle_rows(locations))
}
