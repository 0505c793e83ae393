use crate::constants::header;
use crate::context::{RequestView, ResponseView};
use crate::negotiator::{self, Negotiator};

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedHeaders {
    /// Echo `Access-Control-Request-Headers` when the request carries it.
    #[default]
    Mirror,
    Literal(String),
    List(Vec<String>),
}

impl AllowedHeaders {
    pub fn mirror() -> Self {
        Self::Mirror
    }

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

    pub fn header_value(&self) -> Option<String> {
        match self {
            AllowedHeaders::Mirror => None,
            AllowedHeaders::Literal(value) => Some(value.clone()),
            AllowedHeaders::List(values) => Some(values.join(",")),
        }
    }

    pub(crate) fn negotiator(&self) -> Negotiator {
        match self.header_value() {
            Some(value) => negotiator::literal(header::ACCESS_CONTROL_ALLOW_HEADERS, value),
            None => Box::new(|request: &dyn RequestView, response: &mut dyn ResponseView| {
                if let Some(requested) = request
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS)
                    .filter(|value| !value.is_empty())
                {
                    response.set_header(
                        header::ACCESS_CONTROL_ALLOW_HEADERS,
                        Some(requested.to_owned()),
                    );
                }
            }),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
