pub mod constants;
mod allowed_headers;
mod allowed_methods;
mod context;
mod exchange;
mod exposed_headers;
mod headers;
mod mount;
mod negotiator;
mod options;
mod origin;
mod pipeline;
mod policy;
mod result;
mod router;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::{BoxFuture, RequestView, ResponseView};
pub use exchange::{RequestHeaders, ResponseState};
pub use exposed_headers::ExposedHeaders;
pub use headers::{Headers, append_unique};
pub use mount::{PREFLIGHT_PATTERN, annotate_handler, mount, preflight_handler};
pub use options::{CorsOptions, CorsOverrides};
pub use origin::{
    AsyncOriginPredicateFn, Origin, OriginMatcher, OriginPredicateFn, PatternError,
};
pub use pipeline::Pipeline;
pub use policy::CorsPolicy;
pub use regex_automata::meta::Regex;
pub use result::{ConfigurationError, CorsError, PredicateError};
pub use router::{Handler, HandlerFn, RoutePattern, Router, handler};
