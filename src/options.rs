use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::status;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;

/// Fully resolved configuration for one mount.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    pub max_age: Option<u64>,
    /// Register a catch-all `OPTIONS` route that ends the response.
    pub preflight: bool,
    pub options_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::Reflect,
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::Mirror,
            exposed_headers: ExposedHeaders::Disabled,
            credentials: false,
            max_age: None,
            preflight: true,
            options_status: status::NO_CONTENT,
        }
    }
}

impl CorsOptions {
    /// Whether mounting these options installs any handler.
    pub fn is_enabled(&self) -> bool {
        !matches!(self.origin, Origin::Disabled)
    }
}

/// Partial configuration; every `Some` replaces the matching default.
#[derive(Clone, Debug, Default)]
pub struct CorsOverrides {
    pub origin: Option<Origin>,
    pub methods: Option<AllowedMethods>,
    pub allowed_headers: Option<AllowedHeaders>,
    pub exposed_headers: Option<ExposedHeaders>,
    pub credentials: Option<bool>,
    pub max_age: Option<u64>,
    pub preflight: Option<bool>,
    pub options_status: Option<u16>,
}

impl From<CorsOverrides> for CorsOptions {
    fn from(overrides: CorsOverrides) -> Self {
        let defaults = CorsOptions::default();

        Self {
            origin: overrides.origin.unwrap_or(defaults.origin),
            methods: overrides.methods.unwrap_or(defaults.methods),
            allowed_headers: overrides.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: overrides.exposed_headers.unwrap_or(defaults.exposed_headers),
            credentials: overrides.credentials.unwrap_or(defaults.credentials),
            max_age: overrides.max_age.or(defaults.max_age),
            preflight: overrides.preflight.unwrap_or(defaults.preflight),
            options_status: overrides.options_status.unwrap_or(defaults.options_status),
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
