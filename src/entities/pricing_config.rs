use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fare rules that apply while `valid_from <= t < valid_until`. At most one
/// config is active for any instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub id: Uuid,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub base_fare: f64,
    pub per_km_rate: f64,
    pub per_minute_rate: f64,
    pub minimum_fare: f64,
    pub currency: String,
}

impl PricingConfig {
    pub fn is_active_at(&self, instant: DateTime<Utc>) -> bool {
        self.valid_from <= instant && instant < self.valid_until
    }
}
