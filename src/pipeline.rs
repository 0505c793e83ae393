use crate::context::RequestView;
use crate::exchange::ResponseState;
use crate::result::CorsError;
use crate::router::{Handler, RoutePattern, Router};

#[derive(Clone)]
struct Route {
    method: String,
    pattern: RoutePattern,
    handler: Handler,
}

/// Minimal in-process dispatcher implementing [`Router`].
///
/// Every `use_handler` handler runs first, in registration order, until one
/// ends the response. The first route whose method and pattern match then
/// runs; later routes are ignored.
#[derive(Clone, Default)]
pub struct Pipeline {
    middleware: Vec<Handler>,
    routes: Vec<Route>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn middleware_len(&self) -> usize {
        self.middleware.len()
    }

    pub fn routes_len(&self) -> usize {
        self.routes.len()
    }

    pub async fn dispatch(
        &self,
        method: &str,
        path: &str,
        request: &dyn RequestView,
    ) -> Result<ResponseState, CorsError> {
        let mut response = ResponseState::new();

        for handler in &self.middleware {
            handler(request, &mut response).await?;
            if response.is_ended() {
                return Ok(response);
            }
        }

        if let Some(route) = self.routes.iter().find(|route| {
            route.method.eq_ignore_ascii_case(method) && route.pattern.matches(path)
        }) {
            (route.handler)(request, &mut response).await?;
        }

        Ok(response)
    }
}

impl Router for Pipeline {
    fn use_handler(&mut self, handler: Handler) {
        self.middleware.push(handler);
    }

    fn route(&mut self, method: &str, pattern: &str, handler: Handler) {
        self.routes.push(Route {
            method: method.to_owned(),
            pattern: RoutePattern::parse(pattern),
            handler,
        });
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
