use axum::extract::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::auth::User;
use crate::entities::{Coordinates, RouteSummary};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct PreviewParams {
    waypoints: Vec<Coordinates>,
    departure_time: Option<DateTime<Utc>>,
}

pub async fn preview(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(params): Json<PreviewParams>,
) -> Result<Json<RouteSummary>, Error> {
    let summary = api
        .preview_route(user, params.waypoints, params.departure_time)
        .await?;

    Ok(summary.into())
}
