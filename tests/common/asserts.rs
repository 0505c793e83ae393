#![allow(dead_code)]

use super::builders::APP_MARKER;
use super::headers::{header_value, vary_values};
use bunner_cors_router::ResponseState;

pub fn assert_header_eq(response: &ResponseState, name: &str, expected: &str) {
    assert_eq!(
        header_value(response, name),
        Some(expected),
        "unexpected value for header {name}"
    );
}

pub fn assert_header_absent(response: &ResponseState, name: &str) {
    assert!(
        header_value(response, name).is_none(),
        "expected header {name} to be absent, got {:?}",
        header_value(response, name)
    );
}

pub fn assert_vary_origin_once(response: &ResponseState) {
    let count = vary_values(response)
        .iter()
        .filter(|value| value.as_str() == "origin")
        .count();
    assert_eq!(count, 1, "vary should list origin exactly once");
}

pub fn assert_terminated(response: &ResponseState, status: u16) {
    assert!(response.is_ended(), "response should be terminated");
    assert_eq!(response.status(), Some(status));
    assert!(
        header_value(response, APP_MARKER).is_none(),
        "application handler should not run"
    );
}

pub fn assert_passed_through(response: &ResponseState) {
    assert!(!response.is_ended(), "response should not be terminated");
    assert_eq!(header_value(response, APP_MARKER), Some("hit"));
}
