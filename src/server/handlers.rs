//! HTTP route handlers
//!
//! This module provides HTTP route handler functions.

use crate::server::state::AppState;
use crate::server::types::{HealthResponse, WorkerPoolStatus};
use actix_web::{HttpResponse, web};

/// Health check endpoint handler
pub async fn health_check(data: web::Data<AppState>) -> HttpResponse {
    let storage = data.storage.health_check().await;
    let pool = data.items.pool();

    let status = if storage.healthy && !pool.is_closed() {
        "healthy"
    } else {
        "degraded"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage,
        workers: WorkerPoolStatus {
            capacity: pool.capacity(),
            available: pool.available(),
            accepting: !pool.is_closed(),
        },
    })
}
