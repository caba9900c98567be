use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{FareBreakdown, PricingConfig};
use crate::error::Error;

/// Looks up the pricing config whose validity window contains the instant.
#[async_trait]
pub trait PricingConfigSource {
    async fn find_active(&self, at: DateTime<Utc>) -> Result<Option<PricingConfig>, Error>;
}

pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Computes a fare from route distance and duration. `traffic_factor`
    /// scales the metered subtotal; `extras` are added after scaling. The
    /// total never drops below the configured minimum fare.
    pub fn quote(
        &self,
        distance_meters: u32,
        duration_seconds: u32,
        traffic_factor: Option<f64>,
        extras: Option<f64>,
    ) -> FareBreakdown {
        let distance_fare = self.config.per_km_rate * f64::from(distance_meters) / 1000.0;
        let time_fare = self.config.per_minute_rate * f64::from(duration_seconds) / 60.0;

        let mut total = self.config.base_fare + distance_fare + time_fare;

        if let Some(factor) = traffic_factor {
            total *= factor;
        }

        if let Some(extras) = extras {
            total += extras;
        }

        if total < self.config.minimum_fare {
            total = self.config.minimum_fare;
        }

        FareBreakdown {
            base_fare: self.config.base_fare,
            distance_fare,
            time_fare,
            total,
            currency: self.config.currency.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks;

    #[test]
    fn combines_base_distance_and_time_components() {
        let engine = PricingEngine::new(mocks::pricing_config());

        let fare = engine.quote(1500, 180, None, None);

        assert_eq!(fare.base_fare, 2.5);
        assert_eq!(fare.distance_fare, 3.0);
        assert_eq!(fare.time_fare, 1.5);
        assert_eq!(fare.total, 7.0);
        assert_eq!(fare.currency, "USD");
    }

    #[test]
    fn minimum_fare_floors_the_total() {
        let mut config = mocks::pricing_config();
        config.minimum_fare = 10.0;

        let fare = PricingEngine::new(config).quote(1500, 180, None, None);

        assert_eq!(fare.total, 10.0);
    }

    #[test]
    fn traffic_factor_scales_before_extras() {
        let engine = PricingEngine::new(mocks::pricing_config());

        let fare = engine.quote(1500, 180, Some(2.0), Some(1.5));

        assert_eq!(fare.total, 15.5);
    }
}
