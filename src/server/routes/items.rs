//! Item API endpoints
//!
//! CRUD over `/api/items` plus the batch processing trigger.

use crate::core::models::{ItemId, ItemPayload};
use crate::server::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use tracing::{debug, info};

/// Configure item routes
///
/// `/process` is registered ahead of `/{id}` so it is never parsed as an id.
pub fn configure_item_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/items")
            .route("", web::get().to(list_items))
            .route("", web::post().to(create_item))
            .route("/process", web::get().to(process_items))
            .route("/{id}", web::get().to(get_item))
            .route("/{id}", web::put().to(update_item))
            .route("/{id}", web::delete().to(delete_item)),
    );
}

/// List all items
/// GET /api/items
pub async fn list_items(data: web::Data<AppState>) -> Result<HttpResponse> {
    let items = data.items.find_all().await?;
    debug!("Listing {} items", items.len());
    Ok(HttpResponse::Ok().json(items))
}

/// Create an item
/// POST /api/items
pub async fn create_item(
    data: web::Data<AppState>,
    payload: web::Json<ItemPayload>,
) -> Result<HttpResponse> {
    let item = data.items.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(item))
}

/// Get an item
/// GET /api/items/{id}
pub async fn get_item(data: web::Data<AppState>, path: web::Path<ItemId>) -> Result<HttpResponse> {
    let item = data.items.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

/// Replace an item
/// PUT /api/items/{id}
pub async fn update_item(
    data: web::Data<AppState>,
    path: web::Path<ItemId>,
    payload: web::Json<ItemPayload>,
) -> Result<HttpResponse> {
    let item = data
        .items
        .update(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(item))
}

/// Delete an item
/// DELETE /api/items/{id}
pub async fn delete_item(
    data: web::Data<AppState>,
    path: web::Path<ItemId>,
) -> Result<HttpResponse> {
    data.items.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Process every stored item and wait for the aggregate
/// GET /api/items/process
pub async fn process_items(data: web::Data<AppState>) -> Result<HttpResponse> {
    info!("Batch processing requested");
    let result = data.items.process_all().await?;
    Ok(HttpResponse::Ok().json(result))
}
