use crate::exchange::intent::{ButtonPress, Command, Intent};
use crate::exchange::Caller;
use crate::ui::Reply;
use crate::{AppState, commands, interactions};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use tracing::{debug, error, info, warn};

/// Routes one intent to the command or interaction that serves it.
///
/// `None` means the bot stays silent: free text from strangers, or `help` from
/// anyone who is not an administrator.
pub async fn dispatch(state: &AppState, caller: &Caller, intent: Intent) -> Option<Reply> {
    match intent {
        Intent::Command { command, args } => {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            match command {
                Command::Start => Some(commands::help::start(state, caller).await),
                Command::Help => commands::help::help(state, caller).await,
                Command::Rate => Some(commands::rate::run(state, caller, &args).await),
                Command::Request => Some(commands::request::submit(state, caller, &args.join(" ")).await),
                Command::AddUser => Some(commands::users::add(state, caller, &args).await),
                Command::DeleteUser => Some(commands::users::delete(state, caller, &args).await),
                Command::ListUsers => Some(commands::users::list(state, caller).await),
                Command::AddLocation => Some(commands::locations::add(state, caller, &args).await),
                Command::ListLocations => Some(commands::locations::list(state, caller).await),
                Command::Unknown(name) => {
                    debug!(target="router", user_id=caller.id, command=%name, "unknown command");
                    Some(commands::help::unknown(state, caller).await)
                }
            }
        }
        Intent::ExchangeLine(line) => Some(commands::request::submit(state, caller, &line).await),
        Intent::FreeText(_) => commands::help::free_text(state, caller).await,
        Intent::Button(press) => Some(match press {
            ButtonPress::Decision(decision) => {
                interactions::confirm_handler::resolve(state, caller, decision).await
            }
            ButtonPress::SelectLocation(id) => {
                interactions::location_handler::select(state, caller, id).await
            }
            ButtonPress::ToggleLocation { id, active } => {
                interactions::location_handler::toggle(state, caller, id, active).await
            }
        }),
    }
}

pub struct Handler {
    pub allowed_guild_id: GuildId,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            warn!(target = "router", "missing_app_state");
            return;
        };
        match &interaction {
            Interaction::Command(command) => {
                commands::slash::run(&ctx, command, &app_state).await
            }
            Interaction::Component(component) => {
                interactions::handle(&ctx, component, &app_state).await
            }
            _ => {}
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        // Guild messages from elsewhere are ignored; direct messages are always served.
        if let Some(guild_id) = msg.guild_id
            && guild_id != self.allowed_guild_id
        {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            warn!(target = "router", "missing_app_state");
            return;
        };
        let Some(intent) = Intent::from_text(&msg.content, &app_state.prefix) else {
            return;
        };
        // In the shared guild channel only prefixed commands are answered.
        if msg.guild_id.is_some() && !matches!(intent, Intent::Command { .. }) {
            return;
        }
        let caller = Caller::new(msg.author.id.get(), msg.author.name.clone());
        let Some(reply) = dispatch(&app_state, &caller, intent).await else {
            return;
        };
        if let Err(e) = msg
            .channel_id
            .send_message(&ctx.http, reply.to_message().reference_message(&msg))
            .await
        {
            error!(target="ui.send", user_id=caller.id, error=?e, "send_message failed");
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(target = "router", user = %ready.user.name, "connected and ready");
        match self
            .allowed_guild_id
            .set_commands(&ctx.http, commands::slash::register_all())
            .await
        {
            Ok(registered) => {
                info!(target = "router", count = registered.len(), "registered guild commands")
            }
            Err(e) => error!(target = "router", error = ?e, "creating guild commands failed"),
        }
    }
}
