use axum::routing::{get, post};
use std::sync::Arc;
use tansaku_provider_prelude::Provider;

pub mod api;

pub type SharedProvider = Arc<dyn Provider + Send + Sync + 'static>;

pub fn router(provider: SharedProvider) -> axum::Router {
    axum::Router::new()
        .route("/api/settings", get(api::provider::settings))
        .route("/api/search", get(api::provider::search))
        .route("/api/latest", get(api::provider::latest))
        .route("/api/smart-search", post(api::provider::smart_search))
        .route("/api/magnet", post(api::provider::magnet))
        .with_state(provider)
}
