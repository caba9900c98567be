mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::server::handlers::{quotes, routes, wallets};
use crate::{
    api::{API, DynAPI},
    auth::User,
};

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/quotes", post(quotes::create))
        .route("/quotes/:token", get(quotes::find))
        .route("/routes/preview", post(routes::preview))
        .route("/wallets/:id/balance", get(wallets::find_balance))
        .route("/wallets/:id/entries", post(wallets::create_entry))
        .layer(Extension(api))
        .layer(Extension(User::new_system_user()));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
