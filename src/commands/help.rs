//! Greeting, help and the fallback replies for unknown commands or stray text.
//!
//! Every command the desk understands is listed once in `COMMANDS`, tagged with
//! the roles that may see it. Lists are rendered per role so users never see
//! administrator commands.

use crate::AppState;
use crate::exchange::validate::REQUEST_EXAMPLE;
use crate::exchange::{Caller, Role, WorkflowError};
use crate::ui::Reply;
use crate::ui::style::EMOJI_WARN;
use std::fmt::Write;

struct CommandInfo {
    name: &'static str,
    usage: &'static str,
    details: &'static str,
    /// Roles the command is listed for.
    roles: &'static [Role],
}

const ADMIN: &[Role] = &[Role::Admin];
const USER: &[Role] = &[Role::User];
const ANY: &[Role] = &[Role::Admin, Role::User];

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "start",
        usage: "start",
        details: "Shows the welcome message and your commands.",
        roles: ANY,
    },
    CommandInfo {
        name: "kurs_evra",
        usage: "kurs_evra BUY_RATE SELL_RATE",
        details: "Sets the euro buy and sell rate. You will be asked to confirm.",
        roles: ADMIN,
    },
    CommandInfo {
        name: "kurs_evra",
        usage: "kurs_evra",
        details: "Shows today's euro rate.",
        roles: USER,
    },
    CommandInfo {
        name: "request",
        usage: "request AMOUNT,CURRENCY,RATE,DUE_TIME",
        details: "Submits an exchange request. Sending the bare line works too. You then pick a location and confirm.",
        roles: USER,
    },
    CommandInfo {
        name: "add",
        usage: "add USER_ID ROLE USERNAME",
        details: "Adds a user with role USER or ADMIN.",
        roles: ADMIN,
    },
    CommandInfo {
        name: "delete",
        usage: "delete USER_ID",
        details: "Deletes a user.",
        roles: ADMIN,
    },
    CommandInfo {
        name: "list_users",
        usage: "list_users",
        details: "Lists all users.",
        roles: ADMIN,
    },
    CommandInfo {
        name: "add_location",
        usage: "add_location NAME",
        details: "Adds a location where requests can be served.",
        roles: ADMIN,
    },
    CommandInfo {
        name: "list_locations",
        usage: "list_locations",
        details: "Lists locations with buttons to enable or disable each one.",
        roles: ADMIN,
    },
    CommandInfo {
        name: "help",
        usage: "help",
        details: "Shows this list.",
        roles: ADMIN,
    },
];

/// Every distinct command name the help table knows about.
pub fn all_command_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for c in COMMANDS {
        if !names.contains(&c.name) {
            names.push(c.name);
        }
    }
    names
}

/// The commands `role` may use, one block per command.
pub fn command_list(role: Role, prefix: &str) -> String {
    let mut out = String::new();
    for c in COMMANDS.iter().filter(|c| c.roles.contains(&role)) {
        let _ = write!(out, "{prefix}{}\n➡️ {}\n\n", c.usage, c.details);
    }
    if role == Role::User {
        let _ = write!(out, "Example request:\n{REQUEST_EXAMPLE}");
    }
    out.trim_end().to_string()
}

async fn active_role(state: &AppState, caller: &Caller) -> Result<Option<Role>, WorkflowError> {
    Ok(state.engine.access_of(caller.id).await?.active_role())
}

pub async fn start(state: &AppState, caller: &Caller) -> Reply {
    match active_role(state, caller).await {
        Ok(Some(role)) => Reply::text(format!(
            "👋 Welcome, {}!\n\nAvailable commands:\n\n{}",
            caller.display_name,
            command_list(role, &state.prefix)
        )),
        Ok(None) => Reply::failure(&WorkflowError::PermissionDenied, state.admin_id),
        Err(e) => Reply::failure(&e, state.admin_id),
    }
}

/// Administrators only; everyone else gets no answer.
pub async fn help(state: &AppState, caller: &Caller) -> Option<Reply> {
    match active_role(state, caller).await {
        Ok(Some(Role::Admin)) => Some(Reply::text(format!(
            "📖 Administrator commands:\n\n{}",
            command_list(Role::Admin, &state.prefix)
        ))),
        Ok(_) => None,
        Err(e) => Some(Reply::failure(&e, state.admin_id)),
    }
}

pub async fn unknown(state: &AppState, caller: &Caller) -> Reply {
    match active_role(state, caller).await {
        Ok(Some(role)) => Reply::text(format!(
            "{EMOJI_WARN} Invalid command.\n\nAvailable commands:\n\n{}",
            command_list(role, &state.prefix)
        )),
        Ok(None) => Reply::failure(&WorkflowError::PermissionDenied, state.admin_id),
        Err(e) => Reply::failure(&e, state.admin_id),
    }
}

/// Text that is neither a command nor a request line. Silent for strangers.
pub async fn free_text(state: &AppState, caller: &Caller) -> Option<Reply> {
    match active_role(state, caller).await {
        Ok(Some(role)) => Some(Reply::text(format!(
            "{EMOJI_WARN} Commands must start with {}\n\nAvailable commands:\n\n{}",
            state.prefix,
            command_list(role, &state.prefix)
        ))),
        Ok(None) => None,
        Err(e) => Some(Reply::failure(&e, state.admin_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_list_hides_admin_commands() {
        let list = command_list(Role::User, "!");
        assert!(list.contains("!kurs_evra\n"));
        assert!(list.contains("!request"));
        assert!(!list.contains("!add "));
        assert!(!list.contains("!list_users"));
        assert!(list.ends_with(REQUEST_EXAMPLE));
    }

    #[test]
    fn admin_list_has_management_commands() {
        let list = command_list(Role::Admin, "/");
        for usage in ["/kurs_evra BUY_RATE SELL_RATE", "/add USER_ID", "/delete USER_ID", "/list_locations"] {
            assert!(list.contains(usage), "missing {usage}");
        }
        assert!(!list.contains("/request"));
    }
}
