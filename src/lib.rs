//! # Factoria (Factory Management API)
//!
//! `factoria` is a small resource-oriented REST API for a factory management
//! system. It exposes five resources: employees, products, orders, customers
//! and production runs.
//!
//! ## Resource model
//!
//! Records are created with `POST` and listed with `GET`; there is no update
//! or delete. Every created record receives a server-assigned, monotonically
//! increasing integer id and is kept in an in-process store, so lists reflect
//! creations for the lifetime of the process.
//!
//! ## Validation
//!
//! Customer creation is the only endpoint with field-level validation: email
//! and name must be present, and the phone number must be at least seven
//! characters long. Checks run in a fixed order and only the first failure is
//! reported, as `{"error": <reason phrase>, "message": <detail>}`.
//!
//! The OpenAPI document is generated from the router wiring and served along
//! with Swagger UI under `/docs`.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }
}
