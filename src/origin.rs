use crate::constants::header;
use crate::context::{BoxFuture, RequestView, ResponseView};
use crate::result::{ConfigurationError, CorsError, PredicateError};
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::trace;

pub type OriginPredicateFn = dyn Fn(&str) -> bool + Send + Sync;
pub type AsyncOriginPredicateFn =
    dyn Fn(String) -> BoxFuture<'static, Result<bool, PredicateError>> + Send + Sync;

/// Origin matching strategy for a mount.
#[derive(Clone, Default)]
pub enum Origin {
    /// Echo the request's `Origin` back and vary on it.
    #[default]
    Reflect,
    /// Do not install the middleware at all.
    Disabled,
    /// Emit this literal value for every request.
    Exact(String),
    /// Reflect the origin when any matcher accepts it, in list order.
    List(Vec<OriginMatcher>),
    Pattern(Regex),
    Predicate(Arc<OriginPredicateFn>),
    AsyncPredicate(Arc<AsyncOriginPredicateFn>),
    /// Installs a handler that never writes an origin header.
    Inert,
}

impl Origin {
    pub fn reflect() -> Self {
        Self::Reflect
    }

    pub fn disabled() -> Self {
        Self::Disabled
    }

    pub fn inert() -> Self {
        Self::Inert
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        compile_pattern(pattern, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn async_predicate<F, Fut>(predicate: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool, PredicateError>> + Send + 'static,
    {
        Self::AsyncPredicate(box_async_predicate(predicate))
    }
}

impl From<bool> for Origin {
    fn from(value: bool) -> Self {
        if value {
            Origin::Reflect
        } else {
            Origin::Disabled
        }
    }
}

impl From<&str> for Origin {
    fn from(value: &str) -> Self {
        Origin::Exact(value.to_owned())
    }
}

impl From<String> for Origin {
    fn from(value: String) -> Self {
        Origin::Exact(value)
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Reflect => write!(f, "Reflect"),
            Origin::Disabled => write!(f, "Disabled"),
            Origin::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            Origin::List(matchers) => f.debug_tuple("List").field(matchers).finish(),
            Origin::Pattern(_) => write!(f, "Pattern(<regex>)"),
            Origin::Predicate(_) => write!(f, "Predicate(<function>)"),
            Origin::AsyncPredicate(_) => write!(f, "AsyncPredicate(<function>)"),
            Origin::Inert => write!(f, "Inert"),
        }
    }
}

#[derive(Debug)]
pub enum PatternError {
    Build(Box<BuildError>),
    Timeout { elapsed: Duration, budget: Duration },
    TooLong { length: usize, max: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Build(_) => write!(f, "failed to compile origin pattern"),
            PatternError::Timeout { .. } => {
                write!(f, "compiling origin pattern exceeded the configured budget")
            }
            PatternError::TooLong { length, max } => write!(
                f,
                "origin pattern length {} exceeds maximum allowed {}",
                length, max
            ),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Build(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;

fn compile_pattern(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong {
            length: pattern.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    let started = Instant::now();
    let regex = Regex::new(pattern).map_err(|err| PatternError::Build(Box::new(err)))?;
    let elapsed = started.elapsed();
    if elapsed > budget {
        return Err(PatternError::Timeout { elapsed, budget });
    }

    Ok(regex)
}

fn box_async_predicate<F, Fut>(predicate: F) -> Arc<AsyncOriginPredicateFn>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<bool, PredicateError>> + Send + 'static,
{
    Arc::new(move |origin: String| -> BoxFuture<'static, Result<bool, PredicateError>> {
        Box::pin(predicate(origin))
    })
}

/// One entry of an origin list, before compilation.
#[derive(Clone)]
pub enum OriginMatcher {
    Exact(String),
    Pattern(Regex),
    Predicate(Arc<OriginPredicateFn>),
    AsyncPredicate(Arc<AsyncOriginPredicateFn>),
    /// Representable so that `true`/`false` inside a list can be reported;
    /// never accepted by [`crate::mount`].
    Bool(bool),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        compile_pattern(pattern, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    #[cfg(test)]
    pub(crate) fn pattern_str_with_budget(
        pattern: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        compile_pattern(pattern, budget).map(Self::Pattern)
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn async_predicate<F, Fut>(predicate: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool, PredicateError>> + Send + 'static,
    {
        Self::AsyncPredicate(box_async_predicate(predicate))
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::Exact(value.to_owned())
    }
}

impl From<Regex> for OriginMatcher {
    fn from(value: Regex) -> Self {
        OriginMatcher::Pattern(value)
    }
}

impl From<bool> for OriginMatcher {
    fn from(value: bool) -> Self {
        OriginMatcher::Bool(value)
    }
}

impl fmt::Debug for OriginMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginMatcher::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            OriginMatcher::Pattern(_) => write!(f, "Pattern(<regex>)"),
            OriginMatcher::Predicate(_) => write!(f, "Predicate(<function>)"),
            OriginMatcher::AsyncPredicate(_) => write!(f, "AsyncPredicate(<function>)"),
            OriginMatcher::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
        }
    }
}

/// A matcher compiled into a uniform test over an origin string.
#[derive(Clone)]
pub(crate) enum OriginTest {
    Exact(String),
    Pattern(Regex),
    Predicate(Arc<OriginPredicateFn>),
    AsyncPredicate(Arc<AsyncOriginPredicateFn>),
}

impl OriginTest {
    pub(crate) fn compile(matcher: &OriginMatcher) -> Result<Self, ConfigurationError> {
        match matcher {
            OriginMatcher::Exact(value) => Ok(Self::Exact(value.clone())),
            OriginMatcher::Pattern(regex) => Ok(Self::Pattern(regex.clone())),
            OriginMatcher::Predicate(predicate) => Ok(Self::Predicate(Arc::clone(predicate))),
            OriginMatcher::AsyncPredicate(predicate) => {
                Ok(Self::AsyncPredicate(Arc::clone(predicate)))
            }
            OriginMatcher::Bool(value) => Err(ConfigurationError::UnsupportedOriginTest {
                matcher: value.to_string(),
            }),
        }
    }

    pub(crate) async fn test(&self, origin: &str) -> Result<bool, CorsError> {
        match self {
            OriginTest::Exact(value) => Ok(value == origin),
            OriginTest::Pattern(regex) => Ok(regex.is_match(origin.as_bytes())),
            OriginTest::Predicate(predicate) => Ok(predicate(origin)),
            OriginTest::AsyncPredicate(predicate) => {
                predicate(origin.to_owned())
                    .await
                    .map_err(|source| CorsError::Predicate {
                        origin: origin.to_owned(),
                        source,
                    })
            }
        }
    }
}

/// Per-request origin decision, resolved once from [`Origin`].
pub(crate) enum OriginPolicy {
    Reflect,
    Fixed(String),
    Match(Vec<OriginTest>),
    Inert,
}

impl OriginPolicy {
    /// Returns `None` when the origin configuration disables CORS.
    pub(crate) fn compile(origin: &Origin) -> Result<Option<Self>, ConfigurationError> {
        let policy = match origin {
            Origin::Disabled => return Ok(None),
            Origin::Reflect => Self::Reflect,
            Origin::Exact(value) => Self::Fixed(value.clone()),
            Origin::List(matchers) => Self::Match(
                matchers
                    .iter()
                    .map(OriginTest::compile)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Origin::Pattern(regex) => Self::Match(vec![OriginTest::Pattern(regex.clone())]),
            Origin::Predicate(predicate) => {
                Self::Match(vec![OriginTest::Predicate(Arc::clone(predicate))])
            }
            Origin::AsyncPredicate(predicate) => {
                Self::Match(vec![OriginTest::AsyncPredicate(Arc::clone(predicate))])
            }
            Origin::Inert => Self::Inert,
        };

        Ok(Some(policy))
    }

    pub(crate) async fn apply(
        &self,
        request: &dyn RequestView,
        response: &mut dyn ResponseView,
    ) -> Result<(), CorsError> {
        match self {
            OriginPolicy::Reflect => {
                let origin = request.header(header::ORIGIN);
                response.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.map(str::to_owned));
                response.append_unique(header::VARY, header::ORIGIN);
            }
            OriginPolicy::Fixed(value) => {
                response.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, Some(value.clone()));
            }
            OriginPolicy::Match(tests) => {
                let origin = request.header(header::ORIGIN);
                let allowed = match origin {
                    Some(origin) => first_match(tests, origin).await?,
                    None => false,
                };
                trace!(origin = ?origin, allowed, "evaluated origin list");

                let value = if allowed { origin.map(str::to_owned) } else { None };
                response.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
                response.append_unique(header::VARY, header::ORIGIN);
            }
            OriginPolicy::Inert => {}
        }

        Ok(())
    }
}

/// Runs `tests` one after another and stops at the first that accepts.
pub(crate) async fn first_match(tests: &[OriginTest], origin: &str) -> Result<bool, CorsError> {
    for test in tests {
        if test.test(origin).await? {
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
