use crate::constants::{header, method};
use crate::context::{RequestView, ResponseView};
use crate::negotiator::{self, Negotiator};

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Emit the value verbatim.
    Literal(String),
    /// Emit a comma-separated list. An empty list emits an empty value.
    List(Vec<String>),
    /// Echo the request's `Access-Control-Request-Method`.
    Mirror,
}

impl AllowedMethods {
    pub fn literal<S: Into<String>>(value: S) -> Self {
        Self::Literal(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn mirror() -> Self {
        Self::Mirror
    }

    /// Return the fixed header value, if the configuration has one.
    pub fn header_value(&self) -> Option<String> {
        match self {
            AllowedMethods::Literal(value) => Some(value.clone()),
            AllowedMethods::List(values) => Some(values.join(",")),
            AllowedMethods::Mirror => None,
        }
    }

    pub(crate) fn negotiator(&self) -> Negotiator {
        match self.header_value() {
            Some(value) => negotiator::literal(header::ACCESS_CONTROL_ALLOW_METHODS, value),
            None => Box::new(|request: &dyn RequestView, response: &mut dyn ResponseView| {
                let requested = request
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD)
                    .map(str::to_owned);
                response.set_header(header::ACCESS_CONTROL_ALLOW_METHODS, requested);
            }),
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::HEAD,
            method::PUT,
            method::PATCH,
            method::POST,
            method::DELETE,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
