use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use super::{present, ErrorBody, Rejection, MIN_PHONE_LEN};
use crate::api::store::Store;

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Server-assigned identifier.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Creation payload. Every field is optional at the serde boundary so the
/// validator can report which one is missing instead of failing
/// deserialization.
#[derive(ToSchema, Deserialize, Debug, Default)]
pub struct NewCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Validate a customer creation payload.
///
/// Checks run in a fixed order and only the first failure is reported: email
/// presence, name presence, phone presence, phone length. An absent phone is
/// its own client error so the length check never reads a missing field.
pub fn validate(payload: &NewCustomer) -> Result<(), Rejection> {
    if !present(payload.email.as_deref()) {
        return Err(Rejection::BadRequest("Email is required"));
    }

    if !present(payload.name.as_deref()) {
        return Err(Rejection::BadRequest("Name is required"));
    }

    match payload.phone.as_deref() {
        None => Err(Rejection::BadRequest("Phone is required")),
        // Raw character count, punctuation included.
        Some(phone) if phone.chars().count() < MIN_PHONE_LEN => {
            Err(Rejection::UnprocessableEntity("Phone number is too short"))
        }
        Some(_) => Ok(()),
    }
}

#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "List all customers", body = [Customer], content_type = "application/json"),
    ),
    tag = "customers"
)]
pub async fn list(store: Extension<Arc<Store>>) -> Json<Vec<Customer>> {
    Json(store.customers.list().await)
}

#[utoipa::path(
    post,
    path = "/customers",
    request_body = NewCustomer,
    responses(
        (status = 201, description = "Customer created", body = Customer, content_type = "application/json"),
        (status = 400, description = "Missing email, name or phone", body = ErrorBody),
        (status = 422, description = "Phone number is too short", body = ErrorBody),
    ),
    tag = "customers"
)]
#[instrument(skip(store))]
pub async fn create(
    store: Extension<Arc<Store>>,
    payload: Option<Json<NewCustomer>>,
) -> Result<(StatusCode, Json<Customer>), Rejection> {
    // An absent body is validated like an empty payload, so the caller gets
    // the first missing-field message instead of a generic rejection.
    let payload = payload.map_or_else(NewCustomer::default, |Json(payload)| payload);

    validate(&payload)?;

    debug!("customer: {:?}", payload);

    let customer = store
        .customers
        .insert(|id| Customer {
            id,
            name: payload.name.clone().unwrap_or_default(),
            email: payload.email.clone().unwrap_or_default(),
            phone: payload.phone.clone().unwrap_or_default(),
        })
        .await;

    Ok((StatusCode::CREATED, Json(customer)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: Option<&str>, email: Option<&str>, phone: Option<&str>) -> NewCustomer {
        NewCustomer {
            name: name.map(ToString::to_string),
            email: email.map(ToString::to_string),
            phone: phone.map(ToString::to_string),
        }
    }

    #[test]
    fn test_valid_payload() {
        let result = validate(&payload(
            Some("Jane Doe"),
            Some("jane@example.com"),
            Some("555-1234"),
        ));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_missing_email() {
        let result = validate(&payload(Some("Jane Doe"), None, Some("555-1234")));
        assert_eq!(result, Err(Rejection::BadRequest("Email is required")));
    }

    #[test]
    fn test_empty_email() {
        let result = validate(&payload(Some("Jane Doe"), Some(""), Some("555-1234")));
        assert_eq!(result, Err(Rejection::BadRequest("Email is required")));
    }

    #[test]
    fn test_missing_name() {
        let result = validate(&payload(None, Some("jane@example.com"), Some("555-1234")));
        assert_eq!(result, Err(Rejection::BadRequest("Name is required")));
    }

    #[test]
    fn test_missing_phone() {
        let result = validate(&payload(Some("Jane Doe"), Some("jane@example.com"), None));
        assert_eq!(result, Err(Rejection::BadRequest("Phone is required")));
    }

    #[test]
    fn test_short_phone() {
        let result = validate(&payload(
            Some("Jane Doe"),
            Some("jane@example.com"),
            Some("555"),
        ));
        assert_eq!(
            result,
            Err(Rejection::UnprocessableEntity("Phone number is too short"))
        );
    }

    #[test]
    fn test_empty_phone_is_too_short() {
        // Present but empty goes through the length check, like the other
        // present-but-short values.
        let result = validate(&payload(
            Some("Jane Doe"),
            Some("jane@example.com"),
            Some(""),
        ));
        assert_eq!(
            result,
            Err(Rejection::UnprocessableEntity("Phone number is too short"))
        );
    }

    #[test]
    fn test_phone_length_counts_punctuation() {
        // "555-123" is 7 raw characters even though only 6 are digits.
        let result = validate(&payload(
            Some("Jane Doe"),
            Some("jane@example.com"),
            Some("555-123"),
        ));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_first_failing_check_wins() {
        // Missing email and short phone: the email check fires first.
        let result = validate(&payload(Some("Jane Doe"), None, Some("555")));
        assert_eq!(result, Err(Rejection::BadRequest("Email is required")));
    }

    #[test]
    fn test_empty_payload_reports_email_first() {
        let result = validate(&NewCustomer::default());
        assert_eq!(result, Err(Rejection::BadRequest("Email is required")));
    }
}
