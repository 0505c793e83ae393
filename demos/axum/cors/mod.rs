use std::sync::Arc;

use bunner_cors_router::{
    AllowedHeaders, AllowedMethods, ConfigurationError, CorsOptions, ExposedHeaders, Origin,
    OriginMatcher, Pipeline, mount,
};

#[derive(Clone)]
pub struct AppState {
    /// Holds only the CORS handlers; axum routes the application itself.
    pub cors: Arc<Pipeline>,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ConfigurationError> {
    let options = CorsOptions {
        origin: Origin::list([
            OriginMatcher::exact("http://localhost:3000"),
            OriginMatcher::predicate(|origin| origin.ends_with(".example.com")),
        ]),
        methods: AllowedMethods::list(["GET", "POST", "OPTIONS"]),
        allowed_headers: AllowedHeaders::list(["Content-Type", "X-Requested-With", "X-Demo-Trace"]),
        exposed_headers: ExposedHeaders::list(["X-Demo-Trace"]),
        credentials: true,
        max_age: Some(600),
        ..CorsOptions::default()
    };

    let mut cors = Pipeline::new();
    mount(&mut cors, options)?;

    Ok(AppState {
        cors: Arc::new(cors),
        greeting: "Welcome to the Axum CORS demo!",
    })
}

pub mod middleware;
