use crate::constants::header;
use crate::context::{RequestView, ResponseView};

/// Writes at most one response header per request.
pub(crate) type Negotiator = Box<dyn Fn(&dyn RequestView, &mut dyn ResponseView) + Send + Sync>;

pub(crate) fn noop() -> Negotiator {
    Box::new(|_: &dyn RequestView, _: &mut dyn ResponseView| {})
}

pub(crate) fn literal(name: &'static str, value: String) -> Negotiator {
    Box::new(move |_: &dyn RequestView, response: &mut dyn ResponseView| {
        response.set_header(name, Some(value.clone()))
    })
}

pub(crate) fn credentials(enabled: bool) -> Negotiator {
    if enabled {
        literal(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string())
    } else {
        noop()
    }
}

pub(crate) fn max_age(seconds: Option<u64>) -> Negotiator {
    match seconds {
        Some(seconds) => literal(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string()),
        None => noop(),
    }
}

#[cfg(test)]
#[path = "negotiator_test.rs"]
mod negotiator_test;
