mod quote_api;
mod route_api;
mod wallet_api;

use crate::api::API;
use crate::cache::QuoteCache;
use crate::db::LedgerStore;
use crate::external::RoutingProvider;
use crate::pricing::PricingConfigSource;

/// Service core. Collaborators are injected once at startup; the engine
/// itself keeps no other state.
pub struct Engine {
    routing: Box<dyn RoutingProvider + Send + Sync>,
    pricing_configs: Box<dyn PricingConfigSource + Send + Sync>,
    quotes: Box<dyn QuoteCache + Send + Sync>,
    ledger: Box<dyn LedgerStore + Send + Sync>,
}

impl Engine {
    pub fn new(
        routing: Box<dyn RoutingProvider + Send + Sync>,
        pricing_configs: Box<dyn PricingConfigSource + Send + Sync>,
        quotes: Box<dyn QuoteCache + Send + Sync>,
        ledger: Box<dyn LedgerStore + Send + Sync>,
    ) -> Self {
        Self {
            routing,
            pricing_configs,
            quotes,
            ledger,
        }
    }
}

impl API for Engine {}
