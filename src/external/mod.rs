pub mod google_maps;
pub mod osrm;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::config::RoutingConfig;
use crate::entities::{Coordinates, RouteSummary};
use crate::error::Error;

pub use google_maps::GoogleMaps;
pub use osrm::Osrm;

#[async_trait]
pub trait RoutingProvider {
    async fn route(
        &self,
        pickup: Coordinates,
        dropoff: Coordinates,
    ) -> Result<RouteSummary, Error>;

    /// Routes through every waypoint in order; the first is the origin.
    /// Fails with an invalid-input error for fewer than 2 waypoints, before
    /// any request is made. `departure_time` is a best-effort traffic hint;
    /// providers without traffic-aware timing drop it.
    async fn multi_stop_route(
        &self,
        waypoints: Vec<Coordinates>,
        departure_time: Option<DateTime<Utc>>,
    ) -> Result<RouteSummary, Error>;
}

/// One provider is active per process, picked by startup configuration.
pub fn build_provider(config: &RoutingConfig) -> Box<dyn RoutingProvider + Send + Sync> {
    match config {
        RoutingConfig::GoogleMaps {
            api_base,
            api_key,
            profile,
        } => Box::new(GoogleMaps::new(
            api_base.clone(),
            api_key.clone(),
            profile.clone(),
        )),
        RoutingConfig::Osrm { api_base, profile } => {
            Box::new(Osrm::new(api_base.clone(), profile.clone()))
        }
    }
}
