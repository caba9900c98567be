mod fare;
mod ledger;
mod location;
mod pricing_config;
mod quote;
mod route;

pub use fare::FareBreakdown;
pub use ledger::{BalanceSummary, EntryStatus, LedgerEntry};
pub use location::Coordinates;
pub use pricing_config::PricingConfig;
pub use quote::{Quote, QUOTE_VALIDITY_SECONDS};
pub use route::RouteSummary;
