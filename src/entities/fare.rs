use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareBreakdown {
    pub base_fare: f64,
    pub distance_fare: f64,
    pub time_fare: f64,
    pub total: f64,
    pub currency: String,
}
