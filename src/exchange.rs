use crate::context::{RequestView, ResponseView};
use crate::headers::Headers;
use crate::util::normalize_lower;

/// In-memory [`RequestView`] backed by an ordered header map.
#[derive(Debug, Default, Clone)]
pub struct RequestHeaders {
    headers: Headers,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(normalize_lower(name), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<N, V> FromIterator<(N, V)> for RequestHeaders
where
    N: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name.as_ref(), value);
        }
        headers
    }
}

impl RequestView for RequestHeaders {
    fn header(&self, name: &str) -> Option<&str> {
        match self.headers.get(name) {
            Some(value) => Some(value.as_str()),
            None => self.headers.get(&normalize_lower(name)).map(String::as_str),
        }
    }
}

/// In-memory [`ResponseView`] recording headers, status and termination.
#[derive(Debug, Default, Clone)]
pub struct ResponseState {
    headers: Headers,
    status: Option<u16>,
    ended: bool,
}

impl ResponseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn into_headers(self) -> Headers {
        self.headers
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Whether a handler terminated the response.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl ResponseView for ResponseState {
    fn header(&self, name: &str) -> Option<&str> {
        match self.headers.get(name) {
            Some(value) => Some(value.as_str()),
            None => self.headers.get(&normalize_lower(name)).map(String::as_str),
        }
    }

    fn set_header(&mut self, name: &str, value: Option<String>) {
        let key = normalize_lower(name);
        match value {
            Some(value) => {
                self.headers.insert(key, value);
            }
            None => {
                self.headers.shift_remove(&key);
            }
        }
    }

    fn end(&mut self, status: u16) {
        self.status = Some(status);
        self.ended = true;
    }
}

#[cfg(test)]
#[path = "exchange_test.rs"]
mod exchange_test;
