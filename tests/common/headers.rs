#![allow(dead_code)]

use bunner_cors_router::constants::header;
use bunner_cors_router::{ResponseState, ResponseView};

pub fn header_value<'a>(response: &'a ResponseState, name: &str) -> Option<&'a str> {
    response.header(name)
}

pub fn has_header(response: &ResponseState, name: &str) -> bool {
    header_value(response, name).is_some()
}

pub fn vary_values(response: &ResponseState) -> Vec<String> {
    header_value(response, header::VARY)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_ascii_lowercase())
                .filter(|part| !part.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
