use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::{types::Json, Executor, Pool, Postgres, Row};
use uuid::Uuid;

use crate::entities::{LedgerEntry, PricingConfig};
use crate::error::Error;
use crate::pricing::PricingConfigSource;

pub struct PgPool(pub Pool<Postgres>);

impl PgPool {
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        Ok(Self(pool))
    }
}

/// Append-only record wallet balances are derived from; no cached balance
/// column exists anywhere.
#[async_trait]
pub trait LedgerStore {
    async fn append(&self, entry: &LedgerEntry) -> Result<(), Error>;
    async fn entries(&self, wallet_id: Uuid) -> Result<Vec<LedgerEntry>, Error>;
}

pub struct PgLedgerStore {
    pool: Pool<Postgres>,
}

impl PgLedgerStore {
    #[tracing::instrument(name = "PgLedgerStore::new", skip_all)]
    pub async fn new(pool: Pool<Postgres>) -> Result<Self, Error> {
        // TODO: move this to migrations
        pool.execute("CREATE TABLE IF NOT EXISTS ledger_entries (id UUID PRIMARY KEY, wallet_id UUID NOT NULL, status VARCHAR NOT NULL, data jsonb NOT NULL)")
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl LedgerStore for PgLedgerStore {
    #[tracing::instrument(skip(self))]
    async fn append(&self, entry: &LedgerEntry) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO ledger_entries (id, wallet_id, status, data) VALUES ($1, $2, $3, $4)",
            )
            .bind(&entry.id)
            .bind(&entry.wallet_id)
            .bind(entry.status.name())
            .bind(Json(entry)),
        )
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn entries(&self, wallet_id: Uuid) -> Result<Vec<LedgerEntry>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut rows = conn.fetch(
            sqlx::query("SELECT data FROM ledger_entries WHERE wallet_id = $1").bind(wallet_id),
        );

        let mut entries = Vec::new();

        while let Some(row) = rows.try_next().await? {
            let Json(entry): Json<LedgerEntry> = row.try_get("data")?;
            entries.push(entry);
        }

        Ok(entries)
    }
}

pub struct PgPricingConfigs {
    pool: Pool<Postgres>,
}

impl PgPricingConfigs {
    #[tracing::instrument(name = "PgPricingConfigs::new", skip_all)]
    pub async fn new(pool: Pool<Postgres>) -> Result<Self, Error> {
        pool.execute("CREATE TABLE IF NOT EXISTS pricing_configs (id UUID PRIMARY KEY, valid_from TIMESTAMPTZ NOT NULL, valid_until TIMESTAMPTZ NOT NULL, data jsonb NOT NULL)")
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl PricingConfigSource for PgPricingConfigs {
    #[tracing::instrument(skip(self))]
    async fn find_active(&self, at: DateTime<Utc>) -> Result<Option<PricingConfig>, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(
                sqlx::query(
                    "SELECT data FROM pricing_configs WHERE valid_from <= $1 AND valid_until > $1 ORDER BY valid_from DESC LIMIT 1",
                )
                .bind(at),
            )
            .await?;

        let config = match maybe_result {
            Some(row) => {
                let Json(config) = row.try_get("data")?;
                Some(config)
            }
            None => None,
        };

        Ok(config)
    }
}
