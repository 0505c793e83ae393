use crate::constants::header;
use crate::negotiator::{self, Negotiator};

/// Configuration mirror of the `Access-Control-Expose-Headers` response header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExposedHeaders {
    #[default]
    Disabled,
    Literal(String),
    List(Vec<String>),
}

impl ExposedHeaders {
    pub fn disabled() -> Self {
        Self::Disabled
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

    /// Serializes the configuration into a header-ready value.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Disabled => None,
            Self::Literal(value) => Some(value.clone()),
            Self::List(values) => Some(values.join(",")),
        }
    }

    pub(crate) fn negotiator(&self) -> Negotiator {
        match self.header_value() {
            Some(value) => negotiator::literal(header::ACCESS_CONTROL_EXPOSE_HEADERS, value),
            None => negotiator::noop(),
        }
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
