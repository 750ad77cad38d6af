use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::api::store::Store;

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Production {
    /// Server-assigned identifier.
    pub id: i64,
    /// Product being produced. Not checked against /products.
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(ToSchema, Deserialize, Debug)]
pub struct NewProduction {
    pub product_id: i64,
    pub quantity: i64,
}

#[utoipa::path(
    get,
    path = "/production",
    responses(
        (status = 200, description = "List all production runs", body = [Production], content_type = "application/json"),
    ),
    tag = "production"
)]
pub async fn list(store: Extension<Arc<Store>>) -> Json<Vec<Production>> {
    Json(store.production.list().await)
}

#[utoipa::path(
    post,
    path = "/production",
    request_body = NewProduction,
    responses(
        (status = 201, description = "Production run created", body = Production, content_type = "application/json"),
    ),
    tag = "production"
)]
#[instrument(skip(store))]
pub async fn create(
    store: Extension<Arc<Store>>,
    Json(payload): Json<NewProduction>,
) -> (StatusCode, Json<Production>) {
    debug!("production: {:?}", payload);

    let production = store
        .production
        .insert(|id| Production {
            id,
            product_id: payload.product_id,
            quantity: payload.quantity,
        })
        .await;

    (StatusCode::CREATED, Json(production))
}
