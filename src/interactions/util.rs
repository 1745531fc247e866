//! Acknowledge-then-edit helpers for component presses.
use crate::ui::Reply;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;

/// Acknowledges the press so Discord shows no "interaction failed" while the
/// workflow runs. A duplicate or late acknowledgement is only logged.
pub async fn defer_component(ctx: &Context, c: &ComponentInteraction) {
    if let Err(e) = c.defer(&ctx.http).await {
        tracing::debug!(target="ui.defer", cid=%c.data.custom_id, user_id=c.user.id.get(), error=?e, "defer failed (already acknowledged?)");
    }
}

/// Replaces the pressed message with `reply`; its buttons go with it unless
/// `reply` brings new ones.
pub async fn edit_with_reply(ctx: &Context, c: &ComponentInteraction, tag: &str, reply: &Reply) {
    if let Err(e) = c.edit_response(&ctx.http, reply.to_edit()).await {
        tracing::error!(target="ui.edit", cid=%c.data.custom_id, tag=%tag, error=?e, "edit_response failed");
    }
}
