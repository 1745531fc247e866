use super::staged_reply;
use crate::AppState;
use crate::exchange::Caller;
use crate::ui::{Reply, text};
use chrono::Local;

/// `kurs_evra`: administrators stage a new rate, users see today's rate.
pub async fn run(state: &AppState, caller: &Caller, args: &[&str]) -> Reply {
    let access = match state.engine.access_of(caller.id).await {
        Ok(access) => access,
        Err(e) => return Reply::failure(&e, state.admin_id),
    };
    if access.is_admin() {
        return staged_reply(state, caller, state.engine.stage_rate_change(caller.id, args).await);
    }
    match state
        .engine
        .rate_view(caller.id, Local::now().date_naive())
        .await
    {
        Ok(rate) => Reply::text(text::rate_card(&rate)),
        Err(e) => Reply::failure(&e, state.admin_id),
    }
}
