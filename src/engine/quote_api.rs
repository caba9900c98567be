use super::Engine;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    api::QuoteAPI,
    auth::User,
    entities::{Coordinates, Quote},
    error::{pricing_config_not_found_error, quote_not_found_error, Error},
    pricing::PricingEngine,
};

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(
        &self,
        user: User,
        pickup: Coordinates,
        dropoff: Coordinates,
    ) -> Result<Quote, Error> {
        let route = self.routing.route(pickup.clone(), dropoff.clone()).await?;

        let config = self
            .pricing_configs
            .find_active(Utc::now())
            .await?
            .ok_or_else(|| pricing_config_not_found_error())?;

        let config_id = config.id;

        // no live-traffic signal is wired into this path; factor and extras
        // stay absent
        let fare = PricingEngine::new(config).quote(
            route.distance_meters,
            route.duration_seconds,
            None,
            None,
        );

        let quote = Quote::new(user.id, pickup, dropoff, route, config_id, fare);

        self.quotes.save(quote.clone()).await?;

        Ok(quote)
    }

    #[tracing::instrument(skip(self))]
    async fn find_quote(&self, user: User, token: Uuid) -> Result<Quote, Error> {
        let maybe_quote = self.quotes.load(token).await?;

        maybe_quote.ok_or_else(|| quote_not_found_error())
    }
}
