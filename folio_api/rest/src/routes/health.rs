use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_health_contracts::{HealthFeatureService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    database: bool,
    email: bool,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Response {
    let status = service.get_status().await;
    let HealthStatus { database, email } = status;

    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let response = HealthResponse {
        http: true,
        database,
        email,
    };

    (code, Json(response)).into_response()
}
