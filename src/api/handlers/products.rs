use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::api::store::Store;

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

#[derive(ToSchema, Deserialize, Debug)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "List all products", body = [Product], content_type = "application/json"),
    ),
    tag = "products"
)]
pub async fn list(store: Extension<Arc<Store>>) -> Json<Vec<Product>> {
    Json(store.products.list().await)
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created", body = Product, content_type = "application/json"),
    ),
    tag = "products"
)]
#[instrument(skip(store))]
pub async fn create(
    store: Extension<Arc<Store>>,
    Json(payload): Json<NewProduct>,
) -> (StatusCode, Json<Product>) {
    debug!("product: {:?}", payload);

    let product = store
        .products
        .insert(|id| Product {
            id,
            name: payload.name.clone(),
            price: payload.price,
            stock: payload.stock,
        })
        .await;

    (StatusCode::CREATED, Json(product))
}
