use crate::AppState;
use crate::exchange::Caller;
use crate::ui::{Reply, buttons, text};

/// A raw `amount,currency,rate,HH.MM` line: drafted, then a location is asked for.
pub async fn submit(state: &AppState, caller: &Caller, line: &str) -> Reply {
    match state.engine.draft_request(caller.id, line).await {
        Ok((request, locations)) => Reply::text(text::location_prompt(&request, &locations))
            .with_rows(buttons::location_choice_rows(caller.id, &locations)),
        Err(e) => Reply::request_failure(&e, state.admin_id),
    }
}
