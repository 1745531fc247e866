//! Delivers forwarded client requests to the administrator as a direct message.

use crate::exchange::NotifyError;
use crate::exchange::ports::Notifier;
use async_trait::async_trait;
use serenity::builder::CreateMessage;
use serenity::http::Http;
use serenity::model::id::UserId;
use std::sync::Arc;
use tracing::{error, instrument};

pub struct DiscordNotifier {
    http: Arc<Http>,
    admin: UserId,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>, admin_id: u64) -> Self {
        Self {
            http,
            admin: UserId::new(admin_id),
        }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    #[instrument(level = "debug", target = "notify", skip(self, text), fields(admin = self.admin.get()))]
    async fn notify_administrator(&self, text: &str) -> Result<(), NotifyError> {
        self.admin
            .direct_message(&self.http, CreateMessage::new().content(text))
            .await
            .map(|_| ())
            .map_err(|e| {
                error!(target: "notify", error = ?e, "admin direct message failed");
                NotifyError(e.to_string())
            })
    }
}
