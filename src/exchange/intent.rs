//! Inbound intents: what the chat layer hands to the command dispatcher.

use super::types::Decision;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    /// `kurs_evra`: shows the rate to users, sets it for administrators.
    Rate,
    /// `request AMOUNT,CURRENCY,RATE,DUE_TIME`, same as sending the bare line.
    Request,
    AddUser,
    DeleteUser,
    ListUsers,
    AddLocation,
    ListLocations,
    Unknown(String),
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Command::Start),
            "help" | "h" => Ok(Command::Help),
            "kurs_evra" | "rate" => Ok(Command::Rate),
            "request" => Ok(Command::Request),
            "add" => Ok(Command::AddUser),
            "delete" => Ok(Command::DeleteUser),
            "list_users" => Ok(Command::ListUsers),
            "add_location" => Ok(Command::AddLocation),
            "list_locations" => Ok(Command::ListLocations),
            other => Ok(Command::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPress {
    Decision(Decision),
    SelectLocation(i32),
    ToggleLocation { id: i32, active: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Command { command: Command, args: Vec<String> },
    /// `amount,currency,rate,due_time`
    ExchangeLine(String),
    FreeText(String),
    Button(ButtonPress),
}

impl Intent {
    /// Classifies a plain chat message. Returns `None` for blank messages.
    pub fn from_text(text: &str, prefix: &str) -> Option<Intent> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let Some(body) = text.strip_prefix(prefix) {
            let mut words = body.split_whitespace();
            let name = words.next()?;
            let command = Command::from_str(&name.to_ascii_lowercase()).unwrap_or(Command::Unknown(name.to_string()));
            return Some(Intent::Command {
                command,
                args: words.map(str::to_string).collect(),
            });
        }
        if text.contains(',') {
            return Some(Intent::ExchangeLine(text.to_string()));
        }
        Some(Intent::FreeText(text.to_string()))
    }

    pub fn command(command: Command, args: Vec<String>) -> Intent {
        Intent::Command { command, args }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_words_become_commands() {
        assert_eq!(
            Intent::from_text("!kurs_evra 117.2 118", "!"),
            Some(Intent::command(
                Command::Rate,
                vec!["117.2".into(), "118".into()]
            ))
        );
        assert_eq!(
            Intent::from_text("!add_location Novi Sad", "!"),
            Some(Intent::command(
                Command::AddLocation,
                vec!["Novi".into(), "Sad".into()]
            ))
        );
    }

    #[test]
    fn comma_lines_are_exchange_requests() {
        assert_eq!(
            Intent::from_text(" 1000,EUR,117.2,18.00 ", "!"),
            Some(Intent::ExchangeLine("1000,EUR,117.2,18.00".into()))
        );
        assert_eq!(
            Intent::from_text("hello", "!"),
            Some(Intent::FreeText("hello".into()))
        );
        assert_eq!(Intent::from_text("   ", "!"), None);
        assert_eq!(Intent::from_text("!", "!"), None);
    }
}
