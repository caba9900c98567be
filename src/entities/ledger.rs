use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Settled,
    Held,
}

impl EntryStatus {
    pub fn name(&self) -> String {
        match self {
            EntryStatus::Settled => "settled".to_string(),
            EntryStatus::Held => "held".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub wallet_id: Uuid,
    pub amount: f64,
    pub status: EntryStatus,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn new(wallet_id: Uuid, amount: f64, status: EntryStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            wallet_id,
            amount,
            status,
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub available: f64,
    pub pending: f64,
    pub total: f64,
}
