use super::staged_reply;
use crate::AppState;
use crate::exchange::Caller;
use crate::ui::{Reply, text};

pub async fn add(state: &AppState, caller: &Caller, args: &[&str]) -> Reply {
    staged_reply(state, caller, state.engine.stage_add_user(caller.id, args).await)
}

pub async fn delete(state: &AppState, caller: &Caller, args: &[&str]) -> Reply {
    staged_reply(state, caller, state.engine.stage_delete_user(caller.id, args).await)
}

pub async fn list(state: &AppState, caller: &Caller) -> Reply {
    match state.engine.list_users(caller.id).await {
        Ok(actors) => Reply::text(text::user_list(&actors)),
        Err(e) => Reply::failure(&e, state.admin_id),
    }
}
