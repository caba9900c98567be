use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::User;
use crate::entities::{
    BalanceSummary, Coordinates, EntryStatus, LedgerEntry, Quote, RouteSummary,
};
use crate::error::Error;

#[async_trait]
pub trait QuoteAPI {
    async fn create_quote(
        &self,
        user: User,
        pickup: Coordinates,
        dropoff: Coordinates,
    ) -> Result<Quote, Error>;

    async fn find_quote(&self, user: User, token: Uuid) -> Result<Quote, Error>;
}

#[async_trait]
pub trait RouteAPI {
    async fn preview_route(
        &self,
        user: User,
        waypoints: Vec<Coordinates>,
        departure_time: Option<DateTime<Utc>>,
    ) -> Result<RouteSummary, Error>;
}

#[async_trait]
pub trait WalletAPI {
    async fn find_balance(&self, user: User, wallet_id: Uuid) -> Result<BalanceSummary, Error>;

    async fn record_entry(
        &self,
        user: User,
        wallet_id: Uuid,
        amount: f64,
        status: EntryStatus,
    ) -> Result<LedgerEntry, Error>;
}

pub trait API: QuoteAPI + RouteAPI + WalletAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
