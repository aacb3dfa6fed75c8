//! Unit tests for error handling

use super::*;
use std::io;

#[tokio::test]
async fn test_http_error_is_network_failure() {
    let client = reqwest::Client::new();
    let result = client
        .get("http://invalid-url-that-does-not-exist.fake")
        .send()
        .await;
    let nhl_error = NhlError::from(result.unwrap_err());

    match &nhl_error {
        NhlError::Http(_) => (),
        _ => panic!("Expected Http error variant"),
    }
    assert_eq!(nhl_error.kind(), FailureKind::NetworkFailure);
}

#[test]
fn test_json_error_is_malformed() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let nhl_error = NhlError::from(json_error);

    match &nhl_error {
        NhlError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
    assert_eq!(nhl_error.kind(), FailureKind::MalformedResponse);
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let nhl_error = NhlError::from(io_error);

    match &nhl_error {
        NhlError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
    // a missing local file is not an upstream "not found"
    assert_eq!(nhl_error.kind(), FailureKind::Other);
}

#[test]
fn test_parse_int_error_conversion() {
    let parse_error = "not_a_number".parse::<u16>().unwrap_err();
    let nhl_error = NhlError::from(parse_error);

    match nhl_error {
        NhlError::InvalidNumber(_) => (),
        _ => panic!("Expected InvalidNumber error variant"),
    }
}

#[test]
fn test_not_found_helper() {
    let error = NhlError::not_found("stats for 2019-2020");
    assert_eq!(error.to_string(), "Not found: stats for 2019-2020");
    assert_eq!(error.kind(), FailureKind::NotFound);
}

#[test]
fn test_malformed_helper() {
    let error = NhlError::malformed("empty people array");
    assert!(error.to_string().contains("Malformed response"));
    assert!(error.to_string().contains("empty people array"));
    assert_eq!(error.kind(), FailureKind::MalformedResponse);
}

#[test]
fn test_missing_column_error() {
    let error = NhlError::MissingColumn {
        name: "season".to_string(),
    };
    assert_eq!(error.to_string(), "Column not found: season");
    assert_eq!(error.kind(), FailureKind::Other);
}

#[test]
fn test_birth_after_cutoff_error() {
    let error = NhlError::BirthAfterCutoff {
        birth_date: "2021-03-01".to_string(),
        cutoff: "2021-01-31".to_string(),
    };
    let message = error.to_string();
    assert!(message.contains("2021-03-01"));
    assert!(message.contains("2021-01-31"));
    assert_eq!(error.kind(), FailureKind::MalformedResponse);
}

#[test]
fn test_failure_kind_display() {
    assert_eq!(FailureKind::NetworkFailure.to_string(), "network failure");
    assert_eq!(FailureKind::NotFound.to_string(), "not found");
    assert_eq!(FailureKind::MalformedResponse.to_string(), "malformed response");
    assert_eq!(FailureKind::Other.to_string(), "other");
}

#[test]
fn test_error_source_chain() {
    use std::error::Error;

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
    let nhl_error = NhlError::from(io_error);
    assert!(nhl_error.source().is_some());
}
