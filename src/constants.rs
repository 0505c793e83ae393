pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "access-control-allow-origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "access-control-allow-methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "access-control-allow-headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "access-control-allow-credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "access-control-expose-headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "access-control-max-age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "access-control-request-headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "access-control-request-method";
    pub const ORIGIN: &str = "origin";
    pub const VARY: &str = "vary";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod status {
    pub const NO_CONTENT: u16 = 204;
}
