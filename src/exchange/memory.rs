//! In-process store and notifier implementations. Used by the test-suite and
//! handy for running the workflow without a database.

use super::error::{NotifyError, StoreError};
use super::ports::{DirectoryStore, Notifier, RateStore};
use super::types::{Actor, ActorId, Location, Rate, Role};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    rate: RwLock<Option<Rate>>,
    actors: RwLock<BTreeMap<ActorId, Actor>>,
    locations: RwLock<Vec<Location>>,
    unavailable: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the given actors, all active.
    pub async fn with_actors<'a>(actors: impl IntoIterator<Item = (ActorId, Role, &'a str)>) -> Self {
        let store = Self::new();
        {
            let mut map = store.actors.write().await;
            for (id, role, username) in actors {
                map.insert(
                    id,
                    Actor {
                        id,
                        role,
                        active: true,
                        username: username.to_string(),
                    },
                );
            }
        }
        store
    }

    /// Makes every following call fail with `StoreError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of mutating calls that reached the store.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn set_actor_active(&self, id: ActorId, active: bool) {
        if let Some(actor) = self.actors.write().await.get_mut(&id) {
            actor.active = active;
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("memory store switched off".into()))
        } else {
            Ok(())
        }
    }

    fn write(&self) -> Result<(), StoreError> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl RateStore for MemoryStore {
    async fn current_rate(&self) -> Result<Option<Rate>, StoreError> {
        self.check()?;
        Ok(self.rate.read().await.clone())
    }

    async fn commit_rate(&self, rate: &Rate) -> Result<(), StoreError> {
        self.write()?;
        *self.rate.write().await = Some(rate.clone());
        Ok(())
    }
}

#[async_trait]
impl DirectoryStore for MemoryStore {
    async fn find_actor(&self, id: ActorId) -> Result<Option<Actor>, StoreError> {
        self.check()?;
        Ok(self.actors.read().await.get(&id).cloned())
    }

    async fn insert_actor(&self, actor: &Actor) -> Result<bool, StoreError> {
        self.write()?;
        let mut actors = self.actors.write().await;
        if actors.contains_key(&actor.id) {
            return Ok(false);
        }
        actors.insert(actor.id, actor.clone());
        Ok(true)
    }

    async fn delete_actor(&self, id: ActorId) -> Result<bool, StoreError> {
        self.write()?;
        Ok(self.actors.write().await.remove(&id).is_some())
    }

    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError> {
        self.check()?;
        Ok(self.actors.read().await.values().cloned().collect())
    }

    async fn insert_location(&self, name: &str) -> Result<bool, StoreError> {
        self.write()?;
        let mut locations = self.locations.write().await;
        if locations.iter().any(|l| l.name == name) {
            return Ok(false);
        }
        let id = locations.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        locations.push(Location {
            id,
            name: name.to_string(),
            active: true,
        });
        Ok(true)
    }

    async fn find_location(&self, id: i32) -> Result<Option<Location>, StoreError> {
        self.check()?;
        Ok(self
            .locations
            .read()
            .await
            .iter()
            .find(|l| l.id == id)
            .cloned())
    }

    async fn set_location_active(&self, id: i32, active: bool) -> Result<bool, StoreError> {
        self.write()?;
        match self.locations.write().await.iter_mut().find(|l| l.id == id) {
            Some(location) => {
                location.active = active;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_locations(&self) -> Result<Vec<Location>, StoreError> {
        self.check()?;
        let mut locations = self.locations.read().await.clone();
        locations.sort_by(|a, b| b.active.cmp(&a.active).then_with(|| a.name.cmp(&b.name)));
        Ok(locations)
    }
}

/// Notifier that keeps every delivered message.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: RwLock<Vec<String>>,
    unreachable: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    pub async fn sent(&self) -> Vec<String> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_administrator(&self, text: &str) -> Result<(), NotifyError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(NotifyError("administrator unreachable".into()));
        }
        self.sent.write().await.push(text.to_string());
        Ok(())
    }
}
