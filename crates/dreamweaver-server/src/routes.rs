//! HTTP handlers. Service errors become JSON envelopes with status 500 here.

use crate::page::{INDEX_HTML, SCRIPT_JS};
use crate::service::{DreamService, GenerateRequest};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Json, Response};
use log::{error, warn};
use serde_json::json;

// GET /
pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// GET /static/js/script.js
pub(crate) async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}

// POST /generate
pub(crate) async fn generate(State(service): State<DreamService>, body: Bytes) -> Response {
    let result = match GenerateRequest::from_slice(&body) {
        Ok(request) => service.generate(request).await,
        Err(err) => Err(err),
    };
    match result {
        Ok(response) => Json(response).into_response(),
        Err(err) => {
            warn!("dream generation failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

// GET /dreams
pub(crate) async fn list_dreams(State(service): State<DreamService>) -> Response {
    match service.list().await {
        Ok(dreams) => Json(dreams).into_response(),
        Err(err) => {
            error!("listing dreams failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}
