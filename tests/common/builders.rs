#![allow(dead_code)]

use bunner_cors_router::constants::method;
use bunner_cors_router::{
    AllowedHeaders, AllowedMethods, CorsOverrides, ExposedHeaders, Origin, Pipeline, RequestHeaders,
    ResponseState, Router, handler, mount,
};

pub const APP_MARKER: &str = "x-app";
pub const APP_PATH: &str = "/greet";

const APP_METHODS: [&str; 7] = [
    method::GET,
    method::HEAD,
    method::PUT,
    method::PATCH,
    method::POST,
    method::DELETE,
    method::OPTIONS,
];

#[derive(Default)]
pub struct PipelineBuilder {
    overrides: CorsOverrides,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.overrides.origin = Some(origin);
        self
    }

    pub fn methods(mut self, methods: AllowedMethods) -> Self {
        self.overrides.methods = Some(methods);
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.overrides.allowed_headers = Some(headers);
        self
    }

    pub fn exposed_headers(mut self, headers: ExposedHeaders) -> Self {
        self.overrides.exposed_headers = Some(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.overrides.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.overrides.max_age = Some(seconds);
        self
    }

    pub fn preflight(mut self, enabled: bool) -> Self {
        self.overrides.preflight = Some(enabled);
        self
    }

    pub fn options_status(mut self, status: u16) -> Self {
        self.overrides.options_status = Some(status);
        self
    }

    /// Mounts the policy, then an application handler answering every method.
    pub fn build(self) -> Pipeline {
        let mut pipeline = Pipeline::new();
        mount(&mut pipeline, self.overrides).expect("valid CORS configuration");
        for app_method in APP_METHODS {
            pipeline.route(
                app_method,
                "*",
                handler(|_, response| {
                    Box::pin(async move {
                        response.set_header(APP_MARKER, Some("hit".into()));
                        Ok(())
                    })
                }),
            );
        }
        pipeline
    }
}

pub struct RequestBuilder {
    method: String,
    path: String,
    headers: RequestHeaders,
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            method: method.to_owned(),
            path: APP_PATH.to_owned(),
            headers: RequestHeaders::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(self, origin: impl Into<String>) -> Self {
        self.header("Origin", origin)
    }

    pub fn request_method(self, method: impl Into<String>) -> Self {
        self.header("Access-Control-Request-Method", method)
    }

    pub fn request_headers(self, headers: impl Into<String>) -> Self {
        self.header("Access-Control-Request-Headers", headers)
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub async fn try_dispatch(
        &self,
        pipeline: &Pipeline,
    ) -> Result<ResponseState, bunner_cors_router::CorsError> {
        pipeline
            .dispatch(&self.method, &self.path, &self.headers)
            .await
    }

    pub async fn dispatch(&self, pipeline: &Pipeline) -> ResponseState {
        self.try_dispatch(pipeline)
            .await
            .expect("request annotation should succeed")
    }
}

pub fn cors() -> PipelineBuilder {
    PipelineBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
