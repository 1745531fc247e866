//! Slash command registration and the translation of a slash invocation into
//! the same `Intent` a prefixed text command produces.

use crate::AppState;
use crate::exchange::intent::{Command, Intent};
use crate::exchange::{Caller, WorkflowError};
use crate::handler::dispatch;
use crate::ui::Reply;
use serenity::builder::{CreateCommand, CreateCommandOption, CreateInteractionResponse};
use serenity::model::application::{CommandDataOption, CommandInteraction, CommandOptionType};
use serenity::prelude::Context;
use std::str::FromStr;
use tracing::error;

struct SlashOption {
    name: &'static str,
    description: &'static str,
    required: bool,
}

struct SlashCommand {
    name: &'static str,
    description: &'static str,
    /// In the order the text command expects its arguments.
    options: &'static [SlashOption],
}

const fn opt(name: &'static str, description: &'static str, required: bool) -> SlashOption {
    SlashOption { name, description, required }
}

const SLASH_COMMANDS: &[SlashCommand] = &[
    SlashCommand {
        name: "start",
        description: "Show the welcome message and your commands",
        options: &[],
    },
    SlashCommand {
        name: "help",
        description: "List administrator commands",
        options: &[],
    },
    SlashCommand {
        name: "kurs_evra",
        description: "Show today's euro rate, or set it (administrators)",
        options: &[
            opt("buy", "New buy rate (administrators)", false),
            opt("sell", "New sell rate (administrators)", false),
        ],
    },
    SlashCommand {
        name: "request",
        description: "Submit an exchange request",
        options: &[opt("line", "AMOUNT,CURRENCY,RATE,HH.MM e.g. 1000,EUR,117.2,18.00", true)],
    },
    SlashCommand {
        name: "add",
        description: "Add a user (administrators)",
        options: &[
            opt("user_id", "Discord user id", true),
            opt("role", "USER or ADMIN", true),
            opt("username", "Display name", true),
        ],
    },
    SlashCommand {
        name: "delete",
        description: "Delete a user (administrators)",
        options: &[opt("user_id", "Discord user id", true)],
    },
    SlashCommand {
        name: "list_users",
        description: "List all users (administrators)",
        options: &[],
    },
    SlashCommand {
        name: "add_location",
        description: "Add a location (administrators)",
        options: &[opt("name", "Location name", true)],
    },
    SlashCommand {
        name: "list_locations",
        description: "List and toggle locations (administrators)",
        options: &[],
    },
];

pub fn slash_command_names() -> Vec<&'static str> {
    SLASH_COMMANDS.iter().map(|c| c.name).collect()
}

pub fn register_all() -> Vec<CreateCommand> {
    SLASH_COMMANDS
        .iter()
        .map(|c| {
            c.options.iter().fold(
                CreateCommand::new(c.name).description(c.description),
                |cmd, o| {
                    cmd.add_option(
                        CreateCommandOption::new(CommandOptionType::String, o.name, o.description)
                            .required(o.required),
                    )
                },
            )
        })
        .collect()
}

/// Builds the intent for a slash invocation from `(option name, value)` pairs.
/// Values are read in declaration order and split on whitespace, the way a
/// text command's arguments are.
pub fn intent_from_slash<'a>(name: &str, values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Intent {
    let command = Command::from_str(name).unwrap_or(Command::Unknown(name.to_string()));
    let values: Vec<(&str, &str)> = values.into_iter().collect();
    let declared = SLASH_COMMANDS
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.options)
        .unwrap_or(&[]);
    let args = declared
        .iter()
        .filter_map(|o| values.iter().find(|(n, _)| *n == o.name).map(|(_, v)| *v))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect();
    Intent::command(command, args)
}

fn option_pairs(options: &[CommandDataOption]) -> impl Iterator<Item = (&str, &str)> {
    options
        .iter()
        .filter_map(|o| o.value.as_str().map(|v| (o.name.as_str(), v)))
}

pub async fn run(ctx: &Context, command: &CommandInteraction, state: &AppState) {
    let caller = Caller::new(command.user.id.get(), command.user.name.clone());
    let intent = intent_from_slash(&command.data.name, option_pairs(&command.data.options));
    // A slash command always needs an answer, even where a text command stays silent.
    let reply = dispatch(state, &caller, intent)
        .await
        .unwrap_or_else(|| Reply::failure(&WorkflowError::PermissionDenied, state.admin_id));
    let response = CreateInteractionResponse::Message(reply.to_interaction_message().ephemeral(true));
    if let Err(e) = command.create_response(&ctx.http, response).await {
        error!(target="ui.respond", command=%command.data.name, user_id=caller.id, error=?e, "create_response failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_declared_order() {
        let intent = intent_from_slash(
            "add",
            [("username", "marko"), ("user_id", "42"), ("role", "user")],
        );
        assert_eq!(
            intent,
            Intent::command(Command::AddUser, vec!["42".into(), "user".into(), "marko".into()])
        );
    }

    #[test]
    fn multi_word_values_split_like_text_args() {
        let intent = intent_from_slash("add_location", [("name", "Novi Sad")]);
        assert_eq!(
            intent,
            Intent::command(Command::AddLocation, vec!["Novi".into(), "Sad".into()])
        );
        assert_eq!(
            intent_from_slash("kurs_evra", []),
            Intent::command(Command::Rate, vec![])
        );
    }

    #[test]
    fn every_slash_command_is_known() {
        for name in slash_command_names() {
            assert!(
                !matches!(Command::from_str(name), Ok(Command::Unknown(_))),
                "{name} does not map to a command"
            );
        }
    }
}
