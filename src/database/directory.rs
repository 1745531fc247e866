//! Users and locations.

use super::PgStore;
use super::models::{LocationRow, UserRow};
use crate::exchange::ports::DirectoryStore;
use crate::exchange::{Actor, ActorId, Location, StoreError};
use async_trait::async_trait;
use tracing::{instrument, warn};

#[async_trait]
impl DirectoryStore for PgStore {
    #[instrument(level = "debug", target = "db", skip(self))]
    async fn find_actor(&self, id: ActorId) -> Result<Option<Actor>, StoreError> {
        sqlx::query_as::<_, UserRow>(
            "SELECT user_id, role, is_active, username FROM users WHERE user_id = $1",
        )
        .bind(id as i64)
        .fetch_optional(self.pool())
        .await?
        .map(Actor::try_from)
        .transpose()
    }

    #[instrument(level = "debug", target = "db", skip(self), fields(id = actor.id))]
    async fn insert_actor(&self, actor: &Actor) -> Result<bool, StoreError> {
        let inserted = sqlx::query(
            "INSERT INTO users (user_id, role, is_active, username) VALUES ($1, $2, $3, $4) ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(actor.id as i64)
        .bind(actor.role.as_str())
        .bind(actor.active)
        .bind(&actor.username)
        .execute(self.pool())
        .await?
        .rows_affected();
        if inserted == 0 {
            warn!(target: "db", id = actor.id, "user already exists");
        }
        Ok(inserted == 1)
    }

    #[instrument(level = "debug", target = "db", skip(self))]
    async fn delete_actor(&self, id: ActorId) -> Result<bool, StoreError> {
        let deleted = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id as i64)
            .execute(self.pool())
            .await?
            .rows_affected();
        Ok(deleted > 0)
    }

    #[instrument(level = "debug", target = "db", skip(self))]
    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError> {
        sqlx::query_as::<_, UserRow>(
            "SELECT user_id, role, is_active, username FROM users ORDER BY role, username",
        )
        .fetch_all(self.pool())
        .await?
        .into_iter()
        .map(Actor::try_from)
        .collect()
    }

    #[instrument(level = "debug", target = "db", skip(self))]
    async fn insert_location(&self, name: &str) -> Result<bool, StoreError> {
        let inserted = sqlx::query(
            "INSERT INTO locations (name) VALUES ($1) ON CONFLICT (name) DO NOTHING",
        )
        .bind(name)
        .execute(self.pool())
        .await?
        .rows_affected();
        Ok(inserted == 1)
    }

    #[instrument(level = "debug", target = "db", skip(self))]
    async fn find_location(&self, id: i32) -> Result<Option<Location>, StoreError> {
        let row = sqlx::query_as::<_, LocationRow>(
            "SELECT id, name, is_active FROM locations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        Ok(row.map(Location::from))
    }

    #[instrument(level = "debug", target = "db", skip(self))]
    async fn set_location_active(&self, id: i32, active: bool) -> Result<bool, StoreError> {
        let updated = sqlx::query("UPDATE locations SET is_active = $2 WHERE id = $1")
            .bind(id)
            .bind(active)
            .execute(self.pool())
            .await?
            .rows_affected();
        Ok(updated == 1)
    }

    #[instrument(level = "debug", target = "db", skip(self))]
    async fn list_locations(&self) -> Result<Vec<Location>, StoreError> {
        let rows = sqlx::query_as::<_, LocationRow>(
            "SELECT id, name, is_active FROM locations ORDER BY is_active DESC, name",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows.into_iter().map(Location::from).collect())
    }
}
