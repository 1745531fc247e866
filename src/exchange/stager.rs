//! Per-actor single-slot stores.
//!
//! Each actor owns at most one entry. `stage` overwrites whatever was there and
//! `take` reads and clears the slot under one write lock, so two confirm clicks
//! racing each other can never both receive the same action.

use super::types::{ActorId, ExchangeRequest, PendingAction};
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct SlotMap<T> {
    slots: RwLock<HashMap<ActorId, T>>,
}

impl<T> Default for SlotMap<T> {
    fn default() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Clone> SlotMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for `actor`, returning the entry it replaced.
    pub async fn stage(&self, actor: ActorId, value: T) -> Option<T> {
        self.slots.write().await.insert(actor, value)
    }

    pub async fn take(&self, actor: ActorId) -> Option<T> {
        self.slots.write().await.remove(&actor)
    }

    pub async fn peek(&self, actor: ActorId) -> Option<T> {
        self.slots.read().await.get(&actor).cloned()
    }

    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}

/// Actions waiting for confirm/cancel.
pub type ConfirmationStager = SlotMap<PendingAction>;

/// Validated exchange requests waiting for a location choice.
pub type DraftBook = SlotMap<ExchangeRequest>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn take_clears_the_slot() {
        let stager = ConfirmationStager::new();
        stager
            .stage(7, PendingAction::DeleteUser { id: 9 })
            .await;
        assert_eq!(
            stager.take(7).await,
            Some(PendingAction::DeleteUser { id: 9 })
        );
        assert_eq!(stager.take(7).await, None);
        assert!(stager.is_empty().await);
    }

    #[tokio::test]
    async fn slots_are_per_actor() {
        let stager = ConfirmationStager::new();
        stager.stage(1, PendingAction::DeleteUser { id: 10 }).await;
        stager.stage(2, PendingAction::DeleteUser { id: 20 }).await;
        assert_eq!(stager.len().await, 2);
        assert_eq!(
            stager.take(2).await,
            Some(PendingAction::DeleteUser { id: 20 })
        );
        assert_eq!(
            stager.peek(1).await,
            Some(PendingAction::DeleteUser { id: 10 })
        );
    }
}
