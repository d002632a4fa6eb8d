#![forbid(unsafe_code)]
//! HTTP surface for the armory catalog.
//!
//! All state is loaded once at startup and threaded into handlers via
//! [`AppState`]; nothing ambient, nothing mutable after load.

use armory_store::{DatasetIndex, DatasetInfo};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

mod config;
mod etag;
mod http;

pub use config::ServerConfig;
pub use etag::sha256_hex;

pub const CRATE_NAME: &str = "armory-server";

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<DatasetIndex>,
    pub info: Arc<DatasetInfo>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(index: DatasetIndex, info: DatasetInfo, config: ServerConfig) -> Self {
        Self {
            index: Arc::new(index),
            info: Arc::new(info),
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/v1/meta", get(http::handlers::meta_handler))
        .route("/v1/characters", get(http::handlers::characters_handler))
        .route(
            "/v1/characters/:id",
            get(http::handlers::character_detail_handler),
        )
        .route(
            "/v1/characters/:id/images",
            get(http::handlers::character_images_handler),
        )
        .route(
            "/v1/characters/:id/images/:file",
            get(http::handlers::character_image_file_handler),
        )
        .route("/v1/weapons", get(http::handlers::weapons_handler))
        .route(
            "/v1/weapons/:id",
            get(http::handlers::weapon_detail_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            etag::conditional_etag,
        ))
        .with_state(state)
}
