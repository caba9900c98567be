use std::env;

use crate::error::{configuration_error, Error};

#[derive(Clone, Debug)]
pub enum RoutingConfig {
    GoogleMaps {
        api_base: String,
        api_key: String,
        profile: String,
    },
    Osrm {
        api_base: String,
        profile: String,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub routing: RoutingConfig,
}

impl Config {
    /// Reads the whole configuration up front; a missing or unknown value
    /// fails startup rather than the first request.
    pub fn from_env() -> Result<Self, Error> {
        let database_url = env::var("DATABASE_URL")?;

        let routing = match env::var("ROUTING_PROVIDER")?.as_str() {
            "google_maps" => RoutingConfig::GoogleMaps {
                api_base: env::var("GOOGLE_MAPS_API_BASE")?,
                api_key: env::var("GOOGLE_MAPS_API_KEY")?,
                profile: env::var("GOOGLE_MAPS_PROFILE").unwrap_or_else(|_| "driving".into()),
            },
            "osrm" => RoutingConfig::Osrm {
                api_base: env::var("OSRM_API_BASE")?,
                profile: env::var("OSRM_PROFILE").unwrap_or_else(|_| "driving".into()),
            },
            other => {
                return Err(configuration_error(&format!(
                    "unknown routing provider {}",
                    other
                )))
            }
        };

        Ok(Self {
            database_url,
            routing,
        })
    }
}
