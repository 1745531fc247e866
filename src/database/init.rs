//! Schema bootstrap run once at start-up.

use crate::exchange::ActorId;
use sqlx::PgPool;
use tracing::info;

// Rates are validated to RATE_MAX_DECIMALS places, so NUMERIC(12, 4) stores them unrounded.
const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS users (
        user_id BIGINT PRIMARY KEY,
        role TEXT NOT NULL CHECK (role IN ('USER', 'ADMIN')),
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        username TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE IF NOT EXISTS rate (
        id INTEGER PRIMARY KEY,
        buy_rate NUMERIC(12, 4),
        sell_rate NUMERIC(12, 4),
        updated_at TIMESTAMPTZ,
        updated_by BIGINT
    )"#,
    r#"CREATE TABLE IF NOT EXISTS locations (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        is_active BOOLEAN NOT NULL DEFAULT TRUE
    )"#,
    "INSERT INTO rate (id) VALUES (1) ON CONFLICT (id) DO NOTHING",
];

/// Creates missing tables, the single rate row, and the configured administrator.
pub async fn ensure_schema(pool: &PgPool, admin_id: ActorId) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    let seeded = sqlx::query(
        "INSERT INTO users (user_id, role, is_active, username) VALUES ($1, 'ADMIN', TRUE, 'admin') ON CONFLICT (user_id) DO NOTHING",
    )
    .bind(admin_id as i64)
    .execute(&mut *tx)
    .await?
    .rows_affected();
    tx.commit().await?;
    info!(target: "db", admin_id, admin_seeded = seeded > 0, "schema ready");
    Ok(())
}
