use serde::{Deserialize, Serialize};

/// Aggregate of a single routing call. Never stored on its own; quotes copy
/// its fields at creation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_meters: u32,
    pub duration_seconds: u32,
    pub geometry: String,
}
