// SPDX-License-Identifier: Apache-2.0

use crate::http::error::{api_error_response, ApiError};
use crate::AppState;
use armory_query::{
    parse_page_params, query_characters, query_weapons, CharacterFilter, WeaponFilter,
};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::collections::HashMap;

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

pub(crate) async fn meta_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": "armory",
        "version": env!("CARGO_PKG_VERSION"),
        "dataset": &*state.info,
    }))
}

pub(crate) async fn characters_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let filter = CharacterFilter::from_query(&params);
    let page = parse_page_params(&params);
    Json(query_characters(state.index.list_characters(), &filter, page))
}

pub(crate) async fn character_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.index.get_character(&id) {
        Some(character) => Json(character).into_response(),
        None => api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found(format!("character '{id}' not found")),
        ),
    }
}

pub(crate) async fn weapons_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let filter = WeaponFilter::from_query(&params);
    let page = parse_page_params(&params);
    Json(query_weapons(state.index.list_weapons(), &filter, page))
}

pub(crate) async fn weapon_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.index.get_weapon(&id) {
        Some(weapon) => Json(weapon).into_response(),
        None => api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found(format!("weapon '{id}' not found")),
        ),
    }
}

pub(crate) async fn character_images_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    if state.index.get_character(&id).is_none() {
        return api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found(format!("character '{id}' not found")),
        );
    }

    // The id was resolved through the index, so the join below never
    // sees an attacker-controlled path segment.
    let dir = state.config.images_root.join("characters").join(&id);
    let mut files = Vec::new();
    if let Ok(mut entries) = tokio::fs::read_dir(&dir).await {
        while let Ok(Some(entry)) = entries.next_entry().await {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.to_lowercase().ends_with(".webp") {
                files.push(name);
            }
        }
    }
    files.sort();

    let images: Vec<_> = files
        .into_iter()
        .map(|file| {
            let url = format!("/v1/characters/{id}/images/{file}");
            json!({ "file": file, "url": url })
        })
        .collect();
    Json(json!({ "id": id, "images": images })).into_response()
}

pub(crate) async fn character_image_file_handler(
    State(state): State<AppState>,
    Path((id, file)): Path<(String, String)>,
) -> Response {
    if !is_plain_file_name(&file) {
        return api_error_response(StatusCode::BAD_REQUEST, ApiError::bad_request("invalid file name"));
    }
    if state.index.get_character(&id).is_none() {
        return api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found(format!("character '{id}' not found")),
        );
    }

    let path = state
        .config
        .images_root
        .join("characters")
        .join(&id)
        .join(&file);
    match tokio::fs::read(&path).await {
        // Only webp is stored.
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/webp")], bytes).into_response(),
        Err(_) => api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found("image not found"),
        ),
    }
}

/// Rejects anything a router-decoded segment could smuggle past a
/// plain file-name expectation.
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}
