//! State shared by every event handler, stored once in serenity's `TypeMap`.

use crate::exchange::{ActorId, WorkflowEngine};
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

pub struct AppState {
    /// Owns the stores, the notifier and both per-actor slot maps.
    pub engine: WorkflowEngine,
    /// Receives forwarded client requests; mentioned in "contact" hints.
    pub admin_id: ActorId,
    /// Text command prefix, e.g. `!` in `!kurs_evra`.
    pub prefix: String,
}

impl AppState {
    pub fn new(engine: WorkflowEngine, admin_id: ActorId, prefix: impl Into<String>) -> Self {
        Self {
            engine,
            admin_id,
            prefix: prefix.into(),
        }
    }

    /// `None` only before `main` has inserted the state.
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
