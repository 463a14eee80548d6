use serde::Serialize;

use crate::domain::variables::{Variables, names};

pub const DEFAULT_ALLOW_ORIGIN: &str = "http://localhost:3000,http://127.0.0.1:3000";
pub const DEFAULT_ALLOW_METHODS: &str = "DELETE,GET,OPTIONS,PATCH,POST,PUT";
pub const DEFAULT_ALLOW_CREDENTIALS: &str = "true";
pub const DEFAULT_EXPOSE_HEADERS: &str = "Content-Length,X-My-Header";
pub const DEFAULT_ALLOW_HEADERS: &str = "Accept,Authorization,Content-Type,X-Custom-Header";
pub const DEFAULT_MAX_AGE: &str = "3600";

/// Attributes of the `<plone:CORSPolicy>` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorsPolicy {
    pub allow_origin: String,
    pub allow_methods: String,
    pub allow_credentials: String,
    pub expose_headers: String,
    pub allow_headers: String,
    pub max_age: String,
}

impl CorsPolicy {
    /// `None` unless at least one `CORS_`-prefixed variable is present.
    pub fn from_variables(vars: &Variables) -> Option<Self> {
        if !vars.any_with_prefix(names::CORS_PREFIX) {
            return None;
        }
        let get = |name: &str, default: &str| vars.get_or(name, default).to_string();
        Some(Self {
            allow_origin: get(names::CORS_ALLOW_ORIGIN, DEFAULT_ALLOW_ORIGIN),
            allow_methods: get(names::CORS_ALLOW_METHODS, DEFAULT_ALLOW_METHODS),
            allow_credentials: get(names::CORS_ALLOW_CREDENTIALS, DEFAULT_ALLOW_CREDENTIALS),
            expose_headers: get(names::CORS_EXPOSE_HEADERS, DEFAULT_EXPOSE_HEADERS),
            allow_headers: get(names::CORS_ALLOW_HEADERS, DEFAULT_ALLOW_HEADERS),
            max_age: get(names::CORS_MAX_AGE, DEFAULT_MAX_AGE),
        })
    }
}
