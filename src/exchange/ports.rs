//! Interfaces the workflow engine needs from its collaborators. The Postgres
//! implementations live in `crate::database`, the administrator notifier in
//! `crate::services::notify`, and in-process versions in `super::memory`.

use super::error::{NotifyError, StoreError};
use super::types::{Actor, ActorId, Location, Rate};
use async_trait::async_trait;

#[async_trait]
pub trait RateStore: Send + Sync {
    /// The current rate, or `None` if it was never set.
    async fn current_rate(&self) -> Result<Option<Rate>, StoreError>;
    async fn commit_rate(&self, rate: &Rate) -> Result<(), StoreError>;
}

#[async_trait]
pub trait DirectoryStore: Send + Sync {
    async fn find_actor(&self, id: ActorId) -> Result<Option<Actor>, StoreError>;
    /// Inserts an active actor. Returns `false` and changes nothing if the id exists.
    async fn insert_actor(&self, actor: &Actor) -> Result<bool, StoreError>;
    /// Returns `false` if no actor had that id.
    async fn delete_actor(&self, id: ActorId) -> Result<bool, StoreError>;
    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError>;

    /// Inserts an active location. Returns `false` if the name already exists.
    async fn insert_location(&self, name: &str) -> Result<bool, StoreError>;
    async fn find_location(&self, id: i32) -> Result<Option<Location>, StoreError>;
    /// Returns `false` if no location had that id.
    async fn set_location_active(&self, id: i32, active: bool) -> Result<bool, StoreError>;
    /// Active locations first, then by name.
    async fn list_locations(&self) -> Result<Vec<Location>, StoreError>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Best-effort delivery to the fixed administrator identity.
    async fn notify_administrator(&self, text: &str) -> Result<(), NotifyError>;
}
