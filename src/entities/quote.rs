use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinates, FareBreakdown, RouteSummary};

pub const QUOTE_VALIDITY_SECONDS: i64 = 300;

/// A time-bounded fare estimate. Immutable once created; usable only while
/// `now < expires_at`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub token: Uuid,
    pub user_id: Uuid,
    pub pickup: Coordinates,
    pub dropoff: Coordinates,
    pub distance_meters: u32,
    pub duration_seconds: u32,
    pub geometry: String,
    pub pricing_config_id: Uuid,
    pub fare: FareBreakdown,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Quote {
    pub fn new(
        user_id: Uuid,
        pickup: Coordinates,
        dropoff: Coordinates,
        route: RouteSummary,
        pricing_config_id: Uuid,
        fare: FareBreakdown,
    ) -> Self {
        let created_at = Utc::now();

        Self {
            token: Uuid::new_v4(),
            user_id,
            pickup,
            dropoff,
            distance_meters: route.distance_meters,
            duration_seconds: route.duration_seconds,
            geometry: route.geometry,
            pricing_config_id,
            fare,
            created_at,
            expires_at: created_at + Duration::seconds(QUOTE_VALIDITY_SECONDS),
        }
    }

    pub fn is_valid_at(&self, instant: DateTime<Utc>) -> bool {
        instant < self.expires_at
    }
}
