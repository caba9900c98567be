use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::auth::User;
use crate::entities::{Coordinates, Quote};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    pickup: Coordinates,
    dropoff: Coordinates,
}

#[axum_macros::debug_handler]
pub async fn create(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Quote>, Error> {
    let quote = api.create_quote(user, params.pickup, params.dropoff).await?;

    Ok(quote.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(token): Path<Uuid>,
) -> Result<Json<Quote>, Error> {
    let quote = api.find_quote(user, token).await?;

    Ok(quote.into())
}
