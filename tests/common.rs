//! Test helper utilities for petfriends-qa tests
//!
//! This module provides reusable fixtures and helper functions shared
//! across the integration test files: a client wired to a mock server,
//! canned service payloads in the exact shape the real API returns, and
//! on-disk photo fixtures for the multipart scenarios.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use petfriends_qa::{ApiConfig, PetFriends};
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::MockServer;

/// A key in the shape the real service hands out (hex, no structure).
pub const TEST_AUTH_KEY: &str = "ea738148a1f19838e1c5d1413877f3691a3731380e733e87";

/// Build a client pointed at the given mock server.
///
/// # Panics
///
/// Panics if the client cannot be constructed (test failure is appropriate).
pub fn client_for(mock_server: &MockServer) -> PetFriends {
    PetFriends::new(ApiConfig::new(mock_server.uri())).expect("Client should build against mock")
}

/// Canned body of a successful authentication reply.
pub fn auth_key_body() -> Value {
    json!({ "key": TEST_AUTH_KEY })
}

/// A pet record in the service's all-string JSON shape, photo not attached.
pub fn pet_record(id: &str, name: &str, animal_type: &str, age: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "animal_type": animal_type,
        "age": age,
        "created_at": "1700000000.123456",
        "pet_photo": ""
    })
}

/// A listing body wrapping the given records.
pub fn pet_listing(pets: Vec<Value>) -> Value {
    json!({ "pets": pets })
}

// ============================================================================
// Photo Fixtures
// ============================================================================
//
// Fixtures are written into a caller-owned TempDir so the file outlives the
// upload call and disappears with the test.

/// Write a minimal JPEG (SOI, JFIF APP0, EOI) under the given name.
pub fn jpeg_fixture(dir: &TempDir, file_name: &str) -> PathBuf {
    const JPEG_STUB: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xD9,
    ];
    write_fixture(dir, file_name, JPEG_STUB)
}

/// Write a plain-text document under the given name, for the scenario that
/// uploads a non-image as a photo.
pub fn text_fixture(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    write_fixture(dir, file_name, content.as_bytes())
}

fn write_fixture(dir: &TempDir, file_name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(file_name);
    std::fs::write(&path, bytes).expect("Fixture file should be writable");
    path
}
