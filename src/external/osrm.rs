use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::entities::{Coordinates, RouteSummary};
use crate::error::{invalid_input_error, no_route_error, upstream_error, Error};
use crate::external::RoutingProvider;

#[derive(Debug)]
pub struct Osrm {
    api_base: String,
    profile: String,
    client: reqwest::Client,
}

impl Osrm {
    pub fn new(api_base: String, profile: String) -> Self {
        Self {
            api_base,
            profile,
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_route(&self, waypoints: &[Coordinates]) -> Result<RouteSummary, Error> {
        // OSRM orders coordinates longitude first
        let coordinates = waypoints
            .iter()
            .map(|point| format!("{},{}", point.longitude, point.latitude))
            .collect::<Vec<String>>()
            .join(";");

        let url = format!(
            "https://{}/route/v1/{}/{}",
            self.api_base, self.profile, coordinates
        );

        let res = self
            .client
            .get(url)
            .query(&[("overview", "full")])
            .send()
            .await?;

        if res.status().as_u16() >= 500 {
            return Err(upstream_error());
        }

        let data: OsrmResponse = res.json().await.map_err(|_| no_route_error())?;

        summarize(data)
    }
}

#[async_trait]
impl RoutingProvider for Osrm {
    #[tracing::instrument(skip(self))]
    async fn route(
        &self,
        pickup: Coordinates,
        dropoff: Coordinates,
    ) -> Result<RouteSummary, Error> {
        self.fetch_route(&[pickup, dropoff]).await
    }

    /// OSRM has no traffic-aware departure input; the hint is dropped.
    #[tracing::instrument(skip(self))]
    async fn multi_stop_route(
        &self,
        waypoints: Vec<Coordinates>,
        _departure_time: Option<DateTime<Utc>>,
    ) -> Result<RouteSummary, Error> {
        if waypoints.len() < 2 {
            return Err(invalid_input_error());
        }

        self.fetch_route(&waypoints).await
    }
}

#[derive(Clone, Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Clone, Debug, Deserialize)]
struct OsrmRoute {
    geometry: String,
    legs: Vec<OsrmLeg>,
}

#[derive(Clone, Debug, Deserialize)]
struct OsrmLeg {
    distance: f64,
    duration: f64,
}

fn summarize(data: OsrmResponse) -> Result<RouteSummary, Error> {
    if data.code != "Ok" {
        return Err(no_route_error());
    }

    let route = data
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| no_route_error())?;

    let distance_meters = route.legs.iter().map(|leg| leg.distance).sum::<f64>().round() as u32;
    let duration_seconds = route.legs.iter().map(|leg| leg.duration).sum::<f64>().round() as u32;

    Ok(RouteSummary {
        distance_meters,
        duration_seconds,
        geometry: route.geometry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sums_legs_of_the_first_route() {
        let data: OsrmResponse = serde_json::from_value(json!({
            "code": "Ok",
            "waypoints": [],
            "routes": [{
                "geometry": "_p~iF~ps|U_ulLnnqC",
                "distance": 1500.0,
                "duration": 180.0,
                "legs": [
                    { "distance": 1000.0, "duration": 120.0, "steps": [] },
                    { "distance": 500.0, "duration": 60.0 }
                ]
            }]
        }))
        .unwrap();

        let summary = summarize(data).unwrap();

        assert_eq!(summary.distance_meters, 1500);
        assert_eq!(summary.duration_seconds, 180);
        assert_eq!(summary.geometry, "_p~iF~ps|U_ulLnnqC");
    }

    #[test]
    fn non_ok_code_is_no_route() {
        let data: OsrmResponse =
            serde_json::from_value(json!({ "code": "NoRoute", "routes": [] })).unwrap();

        assert_eq!(summarize(data).unwrap_err().code, 102);
    }

    #[tokio::test]
    async fn multi_stop_requires_two_waypoints() {
        let provider = Osrm::new("invalid".into(), "driving".into());

        let err = provider
            .multi_stop_route(
                vec![Coordinates {
                    latitude: -6.1754,
                    longitude: 106.8272,
                }],
                None,
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, 101);
    }
}
