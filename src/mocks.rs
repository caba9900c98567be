//! Programmable collaborators and sample data for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::db::LedgerStore;
use crate::entities::{
    Coordinates, FareBreakdown, LedgerEntry, PricingConfig, Quote, RouteSummary,
};
use crate::error::{invalid_input_error, no_route_error, Error};
use crate::external::RoutingProvider;
use crate::pricing::PricingConfigSource;

#[derive(Clone)]
pub struct MockRouting {
    result: Option<RouteSummary>,
    calls: Arc<AtomicUsize>,
}

impl MockRouting {
    pub fn returning(summary: RouteSummary) -> Self {
        Self {
            result: Some(summary),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of requests that reached the provider.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoutingProvider for MockRouting {
    async fn route(
        &self,
        _pickup: Coordinates,
        _dropoff: Coordinates,
    ) -> Result<RouteSummary, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.result.clone().ok_or_else(|| no_route_error())
    }

    async fn multi_stop_route(
        &self,
        waypoints: Vec<Coordinates>,
        _departure_time: Option<DateTime<Utc>>,
    ) -> Result<RouteSummary, Error> {
        if waypoints.len() < 2 {
            return Err(invalid_input_error());
        }

        self.calls.fetch_add(1, Ordering::SeqCst);

        self.result.clone().ok_or_else(|| no_route_error())
    }
}

#[derive(Clone)]
pub struct MockPricingConfigs {
    config: Option<PricingConfig>,
}

impl MockPricingConfigs {
    pub fn active(config: PricingConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    pub fn none() -> Self {
        Self { config: None }
    }
}

#[async_trait]
impl PricingConfigSource for MockPricingConfigs {
    async fn find_active(&self, at: DateTime<Utc>) -> Result<Option<PricingConfig>, Error> {
        Ok(self
            .config
            .clone()
            .filter(|config| config.is_active_at(at)))
    }
}

#[derive(Clone)]
pub struct MockLedger {
    entries: Arc<Mutex<Vec<LedgerEntry>>>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_entries(entries: Vec<LedgerEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl LedgerStore for MockLedger {
    async fn append(&self, entry: &LedgerEntry) -> Result<(), Error> {
        self.entries.lock().unwrap().push(entry.clone());

        Ok(())
    }

    async fn entries(&self, wallet_id: Uuid) -> Result<Vec<LedgerEntry>, Error> {
        let entries = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.wallet_id == wallet_id)
            .cloned()
            .collect();

        Ok(entries)
    }
}

pub fn pickup() -> Coordinates {
    Coordinates {
        latitude: -6.1754,
        longitude: 106.8272,
    }
}

pub fn dropoff() -> Coordinates {
    Coordinates {
        latitude: -6.2088,
        longitude: 106.8456,
    }
}

pub fn route_summary() -> RouteSummary {
    RouteSummary {
        distance_meters: 1500,
        duration_seconds: 180,
        geometry: "a~l~Fjk~uOwHJy@P".into(),
    }
}

pub fn pricing_config() -> PricingConfig {
    PricingConfig {
        id: Uuid::new_v4(),
        valid_from: Utc::now() - Duration::hours(1),
        valid_until: Utc::now() + Duration::hours(1),
        base_fare: 2.5,
        per_km_rate: 2.0,
        per_minute_rate: 0.5,
        minimum_fare: 5.0,
        currency: "USD".into(),
    }
}

pub fn fare() -> FareBreakdown {
    FareBreakdown {
        base_fare: 2.5,
        distance_fare: 3.0,
        time_fare: 1.5,
        total: 7.0,
        currency: "USD".into(),
    }
}

pub fn quote() -> Quote {
    Quote::new(
        Uuid::new_v4(),
        pickup(),
        dropoff(),
        route_summary(),
        Uuid::new_v4(),
        fare(),
    )
}

pub fn expired_quote() -> Quote {
    let mut quote = quote();

    quote.created_at = quote.created_at - Duration::seconds(600);
    quote.expires_at = quote.created_at + Duration::seconds(300);

    quote
}
