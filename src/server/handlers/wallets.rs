use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::auth::User;
use crate::entities::{BalanceSummary, EntryStatus, LedgerEntry};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateEntryParams {
    amount: f64,
    status: EntryStatus,
}

pub async fn find_balance(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<Json<BalanceSummary>, Error> {
    let balance = api.find_balance(user, id).await?;

    Ok(balance.into())
}

pub async fn create_entry(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(params): Json<CreateEntryParams>,
) -> Result<Json<LedgerEntry>, Error> {
    let entry = api
        .record_entry(user, id, params.amount, params.status)
        .await?;

    Ok(entry.into())
}
