//! Row structs mapping the desk tables, and their conversion into domain types.

use crate::exchange::{Actor, Location, Rate, Role, StoreError};
use rust_decimal::Decimal;
use sqlx::types::chrono::{DateTime, Utc};
use std::str::FromStr;

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct UserRow {
    pub user_id: i64,
    pub role: String,
    pub is_active: bool,
    pub username: String,
}

impl TryFrom<UserRow> for Actor {
    type Error = StoreError;
    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = Role::from_str(&row.role)
            .map_err(|_| StoreError::Corrupt(format!("role {:?} for user {}", row.role, row.user_id)))?;
        Ok(Actor {
            id: row.user_id as u64,
            role,
            active: row.is_active,
            username: row.username,
        })
    }
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct RateRow {
    pub buy_rate: Option<Decimal>,
    pub sell_rate: Option<Decimal>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<i64>,
}

impl RateRow {
    /// `None` until a rate has been committed at least once.
    pub fn into_rate(self) -> Option<Rate> {
        Some(Rate {
            buy: self.buy_rate?,
            sell: self.sell_rate?,
            updated_at: self.updated_at?,
            updated_by: self.updated_by.unwrap_or_default() as u64,
        })
    }
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct LocationRow {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            name: row.name,
            active: row.is_active,
        }
    }
}
