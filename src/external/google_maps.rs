use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::entities::{Coordinates, RouteSummary};
use crate::error::{invalid_input_error, no_route_error, upstream_error, Error};
use crate::external::RoutingProvider;

#[derive(Debug)]
pub struct GoogleMaps {
    api_base: String,
    api_key: String,
    profile: String,
    client: reqwest::Client,
}

impl GoogleMaps {
    pub fn new(api_base: String, api_key: String, profile: String) -> Self {
        Self {
            api_base,
            api_key,
            profile,
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_directions(
        &self,
        origin: String,
        destination: String,
        via: Option<String>,
        departure_time: Option<DateTime<Utc>>,
    ) -> Result<RouteSummary, Error> {
        let url = format!("https://{}/maps/api/directions/json", self.api_base);

        let mut request = self
            .client
            .get(url)
            .query(&[("key", self.api_key.clone())])
            .query(&[("origin", origin)])
            .query(&[("destination", destination)])
            .query(&[("mode", self.profile.clone())]);

        if let Some(via) = via {
            request = request.query(&[("waypoints", via)]);
        }

        if let Some(departure_time) = departure_time {
            request = request.query(&[("departure_time", departure_time.timestamp().to_string())]);
        }

        let res = request.send().await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: DirectionsResponse = res.json().await.map_err(|_| no_route_error())?;

        summarize(data)
    }
}

#[async_trait]
impl RoutingProvider for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn route(
        &self,
        pickup: Coordinates,
        dropoff: Coordinates,
    ) -> Result<RouteSummary, Error> {
        self.fetch_directions(pickup.into(), dropoff.into(), None, None)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn multi_stop_route(
        &self,
        waypoints: Vec<Coordinates>,
        departure_time: Option<DateTime<Utc>>,
    ) -> Result<RouteSummary, Error> {
        if waypoints.len() < 2 {
            return Err(invalid_input_error());
        }

        let mut stops: Vec<String> = waypoints.into_iter().map(Into::into).collect();

        let destination = stops.pop().ok_or_else(|| invalid_input_error())?;

        if stops.is_empty() {
            return Err(invalid_input_error());
        }

        let origin = stops.remove(0);

        let via = match stops.is_empty() {
            true => None,
            false => Some(stops.join("|")),
        };

        self.fetch_directions(origin, destination, via, departure_time)
            .await
    }
}

// Unknown fields are ignored so provider-side additions don't break decoding.
#[derive(Clone, Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Clone, Debug, Deserialize)]
struct DirectionsRoute {
    legs: Vec<DirectionsLeg>,
    overview_polyline: OverviewPolyline,
}

#[derive(Clone, Debug, Deserialize)]
struct DirectionsLeg {
    distance: LegMeasure,
    duration: LegMeasure,
}

#[derive(Clone, Debug, Deserialize)]
struct LegMeasure {
    value: u32,
}

#[derive(Clone, Debug, Deserialize)]
struct OverviewPolyline {
    points: String,
}

fn summarize(data: DirectionsResponse) -> Result<RouteSummary, Error> {
    if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
        return Err(upstream_error());
    }

    let route = data
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| no_route_error())?;

    let distance_meters = route.legs.iter().map(|leg| leg.distance.value).sum();
    let duration_seconds = route.legs.iter().map(|leg| leg.duration.value).sum();

    Ok(RouteSummary {
        distance_meters,
        duration_seconds,
        geometry: route.overview_polyline.points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sums_legs_of_the_first_route() {
        let data: DirectionsResponse = serde_json::from_value(json!({
            "status": "OK",
            "geocoded_waypoints": [],
            "routes": [{
                "legs": [
                    {
                        "distance": { "text": "1.0 km", "value": 1000 },
                        "duration": { "text": "2 mins", "value": 120 }
                    },
                    {
                        "distance": { "text": "0.5 km", "value": 500 },
                        "duration": { "text": "1 min", "value": 60 }
                    }
                ],
                "overview_polyline": { "points": "a~l~Fjk~uOwHJy@P" },
                "summary": "Jl. Sudirman"
            }]
        }))
        .unwrap();

        let summary = summarize(data).unwrap();

        assert_eq!(summary.distance_meters, 1500);
        assert_eq!(summary.duration_seconds, 180);
        assert_eq!(summary.geometry, "a~l~Fjk~uOwHJy@P");
    }

    #[test]
    fn zero_results_is_no_route() {
        let data: DirectionsResponse =
            serde_json::from_value(json!({ "status": "ZERO_RESULTS" })).unwrap();

        assert_eq!(summarize(data).unwrap_err().code, 102);
    }

    #[test]
    fn empty_route_list_is_no_route() {
        let data: DirectionsResponse =
            serde_json::from_value(json!({ "status": "OK", "routes": [] })).unwrap();

        assert_eq!(summarize(data).unwrap_err().code, 102);
    }

    #[test]
    fn provider_error_status_is_upstream() {
        let data: DirectionsResponse =
            serde_json::from_value(json!({ "status": "REQUEST_DENIED" })).unwrap();

        assert_eq!(summarize(data).unwrap_err().code, 4);
    }

    #[tokio::test]
    async fn multi_stop_requires_two_waypoints() {
        let provider = GoogleMaps::new("invalid".into(), "key".into(), "driving".into());

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
