use crate::context::{RequestView, ResponseView};
use crate::negotiator::{self, Negotiator};
use crate::options::CorsOptions;
use crate::origin::OriginPolicy;
use crate::result::{ConfigurationError, CorsError};

/// Compiled CORS policy shared by every request of a mount.
pub struct CorsPolicy {
    origin: OriginPolicy,
    /// methods, allowed headers, exposed headers, credentials, max-age.
    negotiators: [Negotiator; 5],
    preflight: bool,
    options_status: u16,
}

impl CorsPolicy {
    /// Compiles `options`; returns `Ok(None)` when the origin is disabled.
    pub fn new(options: CorsOptions) -> Result<Option<Self>, ConfigurationError> {
        let Some(origin) = OriginPolicy::compile(&options.origin)? else {
            return Ok(None);
        };

        Ok(Some(Self {
            origin,
            negotiators: [
                options.methods.negotiator(),
                options.allowed_headers.negotiator(),
                options.exposed_headers.negotiator(),
                negotiator::credentials(options.credentials),
                negotiator::max_age(options.max_age),
            ],
            preflight: options.preflight,
            options_status: options.options_status,
        }))
    }

    /// Writes the access-control headers for one request.
    ///
    /// The origin decision completes before any other header is written.
    pub async fn annotate(
        &self,
        request: &dyn RequestView,
        response: &mut dyn ResponseView,
    ) -> Result<(), CorsError> {
        self.origin.apply(request, response).await?;
        for negotiate in &self.negotiators {
            negotiate(request, response);
        }
        Ok(())
    }

    pub fn preflight(&self) -> bool {
        self.preflight
    }

    pub fn options_status(&self) -> u16 {
        self.options_status
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
