// Test modules for the petfriends-qa crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on business logic verification.

pub mod error;

// NOTE: Wire-level coverage (headers, multipart bodies, envelope handling
// against a mock server) lives in tests/client_integration_tests.rs, and
// the scenarios against the real service live in tests/live_service_tests.rs.
