//! This module acts as a central router for all component interactions.
//!
//! `handler.rs` delegates every component press here. Ids of the desk family are
//! parsed into a `ButtonPress` and run through the same dispatcher as commands;
//! anything else is ignored.

pub mod confirm_handler;
pub mod ids;
pub mod location_handler;
pub mod util;

use crate::AppState;
use crate::exchange::intent::{ButtonPress, Intent};
use crate::exchange::{ActorId, Caller, WorkflowError};
use crate::handler::dispatch;
use crate::ui::Reply;
use ids::ParsedButton;
use serenity::builder::CreateInteractionResponse;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use tracing::{debug, error};

/// Owned buttons answer only the actor whose slot they resolve.
pub fn authorize_press(parsed: ParsedButton, presser: ActorId) -> Result<ButtonPress, WorkflowError> {
    match parsed.owner {
        Some(owner) if owner != presser => Err(WorkflowError::ForeignButton),
        _ => Ok(parsed.press),
    }
}

pub async fn handle(ctx: &Context, component: &ComponentInteraction, app_state: &AppState) {
    let custom_id = component.data.custom_id.as_str();
    let family = custom_id.split('_').next().unwrap_or_default();
    if family != ids::FAMILY {
        debug!(target="router", cid=%custom_id, "foreign component ignored");
        return;
    }
    let Some(parsed) = ids::parse_button(custom_id) else {
        debug!(target="router", cid=%custom_id, "unparseable component id");
        return;
    };
    let caller = Caller::new(component.user.id.get(), component.user.name.clone());
    let press = match authorize_press(parsed, caller.id) {
        Ok(press) => press,
        Err(e) => {
            debug!(target="router", cid=%custom_id, user_id=caller.id, "press on another user's buttons");
            // Answered privately; the owner's message stays as it is.
            let reply = Reply::failure(&e, app_state.admin_id);
            let response =
                CreateInteractionResponse::Message(reply.to_interaction_message().ephemeral(true));
            if let Err(e) = component.create_response(&ctx.http, response).await {
                error!(target="ui.respond", cid=%custom_id, error=?e, "create_response failed");
            }
            return;
        }
    };
    util::defer_component(ctx, component).await;
    if let Some(reply) = dispatch(app_state, &caller, Intent::Button(press)).await {
        util::edit_with_reply(ctx, component, family, &reply).await;
    }
}
