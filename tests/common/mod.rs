//! Shared test utilities for petfriends integration tests
#![allow(dead_code)]

use petfriends::{AuthKey, PetFriendsClient};
use std::path::{Path, PathBuf};

/// Standard test API key for consistency across tests
pub const TEST_AUTH_KEY: &str = "ea738148a1f19838e1c5d1413877f3691a3731380e733e877b0ae729";

pub fn test_key() -> AuthKey {
    AuthKey::new(TEST_AUTH_KEY)
}

/// Create a test client pointing to a mock server
pub fn create_test_client(base_url: &str) -> PetFriendsClient {
    PetFriendsClient::with_base_url(base_url).expect("Failed to create test client")
}

/// Write a stand-in photo. ASCII content keeps multipart bodies matchable as text.
pub fn write_photo(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"fake-jpeg-bytes").expect("Failed to write photo fixture");
    path
}

/// Real JPEG shipped with the tests, for the live suite
pub fn fixture_photo() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("images")
        .join("cat.jpg")
}
