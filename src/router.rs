use crate::context::{BoxFuture, RequestView, ResponseView};
use crate::result::CorsError;
use std::sync::Arc;

pub type HandlerFn = dyn for<'a> Fn(
        &'a dyn RequestView,
        &'a mut dyn ResponseView,
    ) -> BoxFuture<'a, Result<(), CorsError>>
    + Send
    + Sync;

/// Shared request handler registered on a [`Router`].
pub type Handler = Arc<HandlerFn>;

/// Wraps a closure into a [`Handler`], pinning down its higher-ranked signature.
pub fn handler<F>(f: F) -> Handler
where
    F: for<'a> Fn(
            &'a dyn RequestView,
            &'a mut dyn ResponseView,
        ) -> BoxFuture<'a, Result<(), CorsError>>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// Registration surface the policy mounts onto.
pub trait Router {
    /// Registers a handler that runs for every request before routing.
    fn use_handler(&mut self, handler: Handler);

    /// Registers a handler for `method` requests whose path matches `pattern`.
    fn route(&mut self, method: &str, pattern: &str, handler: Handler);
}

/// Path pattern accepted by [`Router::route`].
///
/// `*` matches every path, a trailing `/*` matches everything under that
/// prefix, anything else must match exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoutePattern {
    Any,
    Prefix(String),
    Exact(String),
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Self {
        if pattern == "*" {
            Self::Any
        } else if let Some(prefix) = pattern.strip_suffix('*')
            && prefix.ends_with('/')
        {
            Self::Prefix(prefix.to_owned())
        } else {
            Self::Exact(pattern.to_owned())
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            RoutePattern::Any => true,
            RoutePattern::Prefix(prefix) => {
                path.starts_with(prefix.as_str()) || path == prefix.trim_end_matches('/')
            }
            RoutePattern::Exact(expected) => expected == path,
        }
    }
}

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;
