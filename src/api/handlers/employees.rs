use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::api::store::Store;

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Server-assigned identifier.
    pub id: i64,
    pub name: String,
    pub role: String,
    pub email: String,
}

#[derive(ToSchema, Deserialize, Debug)]
pub struct NewEmployee {
    pub name: String,
    pub role: String,
    pub email: String,
}

#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "List all employees", body = [Employee], content_type = "application/json"),
    ),
    tag = "employees"
)]
pub async fn list(store: Extension<Arc<Store>>) -> Json<Vec<Employee>> {
    Json(store.employees.list().await)
}

#[utoipa::path(
    post,
    path = "/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee, content_type = "application/json"),
    ),
    tag = "employees"
)]
#[instrument(skip(store))]
pub async fn create(
    store: Extension<Arc<Store>>,
    Json(payload): Json<NewEmployee>,
) -> (StatusCode, Json<Employee>) {
    debug!("employee: {:?}", payload);

    let employee = store
        .employees
        .insert(|id| Employee {
            id,
            name: payload.name.clone(),
            role: payload.role.clone(),
            email: payload.email.clone(),
        })
        .await;

    (StatusCode::CREATED, Json(employee))
}
