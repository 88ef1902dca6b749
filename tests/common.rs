//! Test helper utilities for petfriends tests
//!
//! This module provides reusable fixtures and helper functions shared across
//! the contract test files: explicit client construction, session
//! authentication, disposable pet records, and scoped temp photo files.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use petfriends::{ApiResponse, Credentials, Pet, PetFriends, PetFriendsConfig};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Credentials the scripted service accepts.
pub const VALID_EMAIL: &str = "tester@petfriends.example";
pub const VALID_PASSWORD: &str = "correct-horse";

/// Auth key the scripted service hands out for valid credentials.
pub const AUTH_KEY: &str = "a1b2c3d4e5f6";

/// Create a client pointed at a mock server, with fast timeouts.
///
/// Clients are constructed per test and passed by parameter; there is no
/// shared global instance.
pub fn test_client(base_url: &str) -> PetFriends {
    let mut config = PetFriendsConfig::new(
        base_url,
        Credentials::new(VALID_EMAIL, VALID_PASSWORD),
    );
    config.request_timeout = Duration::from_secs(5);
    PetFriends::new(config).expect("test client should build from a valid config")
}

/// Script the auth endpoint: valid credentials get a key, anything else 403.
pub async fn mount_auth(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/key"))
        .and(header("email", VALID_EMAIL))
        .and(header("password", VALID_PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "key": AUTH_KEY,
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/key"))
        .respond_with(ResponseTemplate::new(403).set_body_string("403 Forbidden"))
        .mount(server)
        .await;
}

/// Session fixture: authenticate with valid credentials and return the key.
///
/// Fails the calling test if authentication does not come back 200 with a
/// key present, matching the suite-wide precondition.
pub async fn authenticate(client: &PetFriends) -> String {
    let response = client
        .get_api_key(VALID_EMAIL, VALID_PASSWORD)
        .await
        .expect("auth round-trip should complete");
    assert_eq!(response.status, 200, "valid credentials must yield 200");
    response
        .into_success()
        .expect("success body must carry a key")
        .key
}

/// JSON for one pet record as the service would return it.
pub fn pet_json(
    id: &str,
    name: &str,
    animal_type: &str,
    age: &str,
    pet_photo: Option<&str>,
) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "animal_type": animal_type,
        "age": age,
        "pet_photo": pet_photo.unwrap_or(""),
    })
}

/// JSON for a listing reply.
pub fn pets_json(pets: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({ "pets": pets })
}

/// Unwrap a success response body, failing the test with context otherwise.
pub fn expect_pet(response: ApiResponse<Pet>) -> Pet {
    assert_eq!(response.status, 200, "pet operation must succeed");
    response.into_success().expect("success body expected")
}

/// Scoped temp photo file: written on creation, removed when the handle
/// drops regardless of test outcome.
pub fn temp_photo(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("pf-photo-")
        .suffix(".jpg")
        .tempfile()
        .expect("temp photo should be creatable");
    file.write_all(contents.as_bytes())
        .expect("temp photo should be writable");
    file
}
