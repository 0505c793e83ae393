use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use bunner_cors_router::{CorsError, Headers, RequestHeaders};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let headers = request_headers(request.headers());
    let method = request.method().as_str().to_owned();
    let path = request.uri().path().to_owned();

    let outcome = match state.cors.dispatch(&method, &path, &headers).await {
        Ok(outcome) => outcome,
        Err(err) => return error_response(err),
    };

    if let Some(status) = outcome.status().filter(|_| outcome.is_ended()) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::NO_CONTENT);
        let mut response = Response::new(Body::empty());
        *response.status_mut() = status;
        apply_headers(response.headers_mut(), outcome.headers());
        return response;
    }

    let mut response = next.run(request).await;
    apply_headers(response.headers_mut(), outcome.headers());
    response
}

fn request_headers(map: &HeaderMap) -> RequestHeaders {
    map.iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str(), value.to_owned()))
        })
        .collect()
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

fn error_response(err: CorsError) -> Response {
    let mut response = Response::new(Body::from(format!("CORS evaluation failed: {err}")));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}
