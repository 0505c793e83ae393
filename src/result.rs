use thiserror::Error;

/// Error type returned by asynchronous origin predicates.
pub type PredicateError = Box<dyn std::error::Error + Send + Sync>;

/// Invalid configuration detected while mounting the policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("unsupported origin test [{matcher}]; booleans are only valid as the top-level origin")]
    UnsupportedOriginTest { matcher: String },
}

/// Errors raised while annotating a single request.
#[derive(Debug, Error)]
pub enum CorsError {
    #[error("origin predicate failed while evaluating [{origin}]")]
    Predicate {
        origin: String,
        #[source]
        source: PredicateError,
    },
}
