//! The single-row `rate` table.

use super::PgStore;
use super::models::RateRow;
use crate::exchange::ports::RateStore;
use crate::exchange::{Rate, StoreError};
use async_trait::async_trait;
use tracing::instrument;

#[async_trait]
impl RateStore for PgStore {
    #[instrument(level = "debug", target = "db", skip(self))]
    async fn current_rate(&self) -> Result<Option<Rate>, StoreError> {
        let row = sqlx::query_as::<_, RateRow>(
            "SELECT buy_rate, sell_rate, updated_at, updated_by FROM rate WHERE id = 1",
        )
        .fetch_optional(self.pool())
        .await?;
        Ok(row.and_then(RateRow::into_rate))
    }

    #[instrument(level = "debug", target = "db", skip(self), fields(buy = %rate.buy, sell = %rate.sell))]
    async fn commit_rate(&self, rate: &Rate) -> Result<(), StoreError> {
        sqlx::query(
            r#"INSERT INTO rate (id, buy_rate, sell_rate, updated_at, updated_by)
            VALUES (1, $1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET buy_rate = EXCLUDED.buy_rate, sell_rate = EXCLUDED.sell_rate,
                updated_at = EXCLUDED.updated_at, updated_by = EXCLUDED.updated_by"#,
        )
        .bind(rate.buy)
        .bind(rate.sell)
        .bind(rate.updated_at)
        .bind(rate.updated_by as i64)
        .execute(self.pool())
        .await?;
        Ok(())
    }
}
