use std::time::Duration;

use vectura::cache::MemoryQuoteCache;
use vectura::config::Config;
use vectura::db::{PgLedgerStore, PgPool, PgPricingConfigs};
use vectura::engine::Engine;
use vectura::external;
use vectura::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt::init();

    let config = Config::from_env().unwrap();

    let PgPool(pool) = PgPool::new(&config.database_url, 5).await.unwrap();

    let ledger = PgLedgerStore::new(pool.clone()).await.unwrap();
    let pricing_configs = PgPricingConfigs::new(pool).await.unwrap();

    let quotes = MemoryQuoteCache::new();
    quotes.start_reaper(Duration::from_secs(60));

    let routing = external::build_provider(&config.routing);

    let engine = Engine::new(
        routing,
        Box::new(pricing_configs),
        Box::new(quotes),
        Box::new(ledger),
    );

    serve(engine).await;
}
