use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::api::store::Store;

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Server-assigned identifier.
    pub id: i64,
    /// Customer placing the order. Not checked against /customers.
    pub customer_id: i64,
    /// Products in the order. Not checked against /products.
    pub product_ids: Vec<i64>,
    pub quantity: i64,
}

#[derive(ToSchema, Deserialize, Debug)]
pub struct NewOrder {
    pub customer_id: i64,
    pub product_ids: Vec<i64>,
    pub quantity: i64,
}

#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "List all orders", body = [Order], content_type = "application/json"),
    ),
    tag = "orders"
)]
pub async fn list(store: Extension<Arc<Store>>) -> Json<Vec<Order>> {
    Json(store.orders.list().await)
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = NewOrder,
    responses(
        (status = 201, description = "Order created", body = Order, content_type = "application/json"),
    ),
    tag = "orders"
)]
#[instrument(skip(store))]
pub async fn create(
    store: Extension<Arc<Store>>,
    Json(payload): Json<NewOrder>,
) -> (StatusCode, Json<Order>) {
    debug!("order: {:?}", payload);

    let order = store
        .orders
        .insert(|id| Order {
            id,
            customer_id: payload.customer_id,
            product_ids: payload.product_ids.clone(),
            quantity: payload.quantity,
        })
        .await;

    (StatusCode::CREATED, Json(order))
}
