// Unit Tests for Client Error Handling
//
// UNIT UNDER TEST: ClientError
//
// BUSINESS RESPONSIBILITY:
//   - Separates local failures (configuration, transport, file IO) from
//     remote verdicts, which are never errors in this suite
//   - Produces messages precise enough to diagnose a failed run from the
//     test log alone
//   - Preserves underlying error causes for the source() chain
//
// TEST COVERAGE:
//   - Display formatting for every variant
//   - Source preservation for transport and photo-read failures
//   - Constructor functions with proper context

use crate::error::ClientError;
use std::error::Error;
use std::io;
use std::path::Path;

#[cfg(test)]
mod display_tests {
    use super::*;

    #[test]
    fn test_configuration_error_names_the_problem() {
        // Test verifies the message carries the caller-supplied description

        // Act
        let error = ClientError::configuration("PetFriends base URL is required");

        // Assert
        assert_eq!(
            error.to_string(),
            "configuration error: PetFriends base URL is required"
        );
    }

    #[test]
    fn test_transport_error_describes_the_failed_request() {
        // Act
        let error = ClientError::transport("get_api_key request failed: connection refused", None);

        // Assert
        assert_eq!(
            error.to_string(),
            "request failed: get_api_key request failed: connection refused"
        );
    }

    #[test]
    fn test_body_read_error_mentions_the_body() {
        // Act
        let error = ClientError::body_read("connection reset mid-body");

        // Assert
        assert_eq!(
            error.to_string(),
            "failed to read response body: connection reset mid-body"
        );
    }

    #[test]
    fn test_photo_read_error_names_the_file() {
        // Test verifies a missing photo is diagnosable from the message alone

        // Arrange
        let io_error = io::Error::new(io::ErrorKind::NotFound, "no such file");

        // Act
        let error = ClientError::photo_read(Path::new("images/cat1.jpg"), io_error);

        // Assert
        let rendered = error.to_string();
        assert!(
            rendered.contains("images/cat1.jpg"),
            "Message should name the file, got: {rendered}"
        );
    }

    #[test]
    fn test_unexpected_body_error_describes_the_shape_mismatch() {
        // Act
        let error = ClientError::unexpected_body("expected JSON, got text: Forbidden");

        // Assert
        assert_eq!(
            error.to_string(),
            "unexpected response body: expected JSON, got text: Forbidden"
        );
    }
}

#[cfg(test)]
mod source_chain_tests {
    use super::*;

    #[test]
    fn test_transport_error_preserves_underlying_cause() {
        // Test verifies the original failure survives for the source() chain

        // Arrange
        let cause = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");

        // Act
        let error = ClientError::transport("request failed", Some(Box::new(cause)));

        // Assert
        let source = error.source().expect("Transport should expose its cause");
        assert!(source.to_string().contains("connection refused"));
    }

    #[test]
    fn test_transport_error_without_cause_has_no_source() {
        // Act
        let error = ClientError::transport("request failed", None);

        // Assert
        assert!(error.source().is_none());
    }

    #[test]
    fn test_photo_read_error_preserves_io_cause() {
        // Arrange
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");

        // Act
        let error = ClientError::photo_read(Path::new("images/cat1.jpg"), io_error);

        // Assert
        let source = error.source().expect("PhotoRead should expose its cause");
        assert!(source.to_string().contains("permission denied"));
    }
}
