//! A chat-agnostic reply and its conversions into serenity builders.

use crate::exchange::{ValidationError, WorkflowError};
use crate::exchange::validate::REQUEST_EXAMPLE;
use crate::ui::style::{EMOJI_ERR, admin_contact};
use serenity::builder::{
    CreateActionRow, CreateInteractionResponseMessage, CreateMessage, EditInteractionResponse,
};

#[derive(Debug, Clone, Default)]
pub struct Reply {
    pub content: String,
    pub components: Vec<CreateActionRow>,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            components: Vec::new(),
        }
    }

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = CreateActionRow>) -> Self {
        self.components.extend(rows);
        self
    }

    /// Reply for a failed intent, with the admin contact hint where it helps.
    pub fn failure(err: &WorkflowError, admin_id: u64) -> Self {
        let mut content = format!("{EMOJI_ERR} {err}");
        if err.wants_admin_contact() {
            content.push_str(&admin_contact(admin_id));
        }
        Self::text(content)
    }

    /// Failure of a raw exchange line: validation errors repeat the expected format.
    pub fn request_failure(err: &WorkflowError, admin_id: u64) -> Self {
        let mut reply = Self::failure(err, admin_id);
        if matches!(err, WorkflowError::Validation(v) if *v != ValidationError::RateNotSet) {
            reply
                .content
                .push_str(&format!("\n\nCorrect format:\n{REQUEST_EXAMPLE}"));
        }
        reply
    }

    pub fn to_message(&self) -> CreateMessage {
        CreateMessage::new()
            .content(&self.content)
            .components(self.components.clone())
    }

    pub fn to_interaction_message(&self) -> CreateInteractionResponseMessage {
        CreateInteractionResponseMessage::new()
            .content(&self.content)
            .components(self.components.clone())
    }

    /// Edits a message in place; an empty component list removes its buttons.
    pub fn to_edit(&self) -> EditInteractionResponse {
        EditInteractionResponse::new()
            .content(&self.content)
            .components(self.components.clone())
    }
}
