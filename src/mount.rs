use crate::constants::method;
use crate::options::CorsOptions;
use crate::policy::CorsPolicy;
use crate::result::ConfigurationError;
use crate::router::{Handler, Router, handler};
use std::sync::Arc;
use tracing::debug;

/// Path pattern the preflight handler is registered under.
pub const PREFLIGHT_PATTERN: &str = "*";

/// Compiles `options` and registers the CORS handlers on `router`.
///
/// With [`crate::Origin::Disabled`] nothing is registered and `Ok(None)` is
/// returned. Otherwise a pipeline-wide handler annotating every response is
/// added, plus an `OPTIONS *` handler ending the response when
/// [`CorsOptions::preflight`] is set. Configuration errors surface here and
/// never per request.
pub fn mount<R, O>(router: &mut R, options: O) -> Result<Option<Arc<CorsPolicy>>, ConfigurationError>
where
    R: Router + ?Sized,
    O: Into<CorsOptions>,
{
    let Some(policy) = CorsPolicy::new(options.into())? else {
        debug!("origin disabled, CORS handlers not installed");
        return Ok(None);
    };
    let policy = Arc::new(policy);

    router.use_handler(annotate_handler(Arc::clone(&policy)));
    debug!("installed CORS annotation handler");

    if policy.preflight() {
        router.route(
            method::OPTIONS,
            PREFLIGHT_PATTERN,
            preflight_handler(policy.options_status()),
        );
        debug!(
            status = policy.options_status(),
            "registered preflight handler"
        );
    }

    Ok(Some(policy))
}

/// Pipeline handler that writes the policy's headers on every request.
pub fn annotate_handler(policy: Arc<CorsPolicy>) -> Handler {
    handler(move |request, response| {
        let policy = Arc::clone(&policy);
        Box::pin(async move { policy.annotate(request, response).await })
    })
}

/// Route handler that ends the response with `status` and an empty body.
///
/// Headers come from the annotation handler that already ran for the request.
pub fn preflight_handler(status: u16) -> Handler {
    handler(move |_, response| {
        Box::pin(async move {
            response.end(status);
            Ok(())
        })
    })
}

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;
