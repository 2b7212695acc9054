//! Cross-origin policy applied to every response, preflight included

use warp::http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, VARY,
};
use warp::reply::Response;

pub const ALLOWED_HEADERS: &str = "Content-Type";
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Origins the browser client is served from by default
///
/// An `Origin` header is scheme, host and port only, so the GitHub Pages
/// project path is covered by its bare host.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5000",
    "http://localhost:3000",
    "https://hunterspataro.github.io",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// `*`: any origin, without credentials
    Any,
    /// Exact origins, echoed back with credentials allowed
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    origins: AllowedOrigins,
}

impl CorsPolicy {
    pub fn any() -> Self {
        Self {
            origins: AllowedOrigins::Any,
        }
    }

    pub fn list<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let origins = origins
            .into_iter()
            .map(|o| normalize(o.as_ref()).to_string())
            .filter(|o| !o.is_empty())
            .collect();
        Self {
            origins: AllowedOrigins::List(origins),
        }
    }

    /// Parse a comma-separated origin list; `*` anywhere means any origin
    pub fn parse(value: &str) -> Self {
        let entries: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .collect();

        if entries.contains(&"*") {
            return Self::any();
        }
        Self::list(entries)
    }

    pub fn origins(&self) -> &AllowedOrigins {
        &self.origins
    }

    /// Value for `Access-Control-Allow-Origin`, if the origin is allowed
    pub fn allow_origin(&self, origin: Option<&str>) -> Option<String> {
        match &self.origins {
            AllowedOrigins::Any => Some("*".to_string()),
            AllowedOrigins::List(allowed) => {
                let origin = origin?;
                let wanted = normalize(origin);
                allowed
                    .iter()
                    .any(|a| a == wanted)
                    .then(|| origin.to_string())
            }
        }
    }

    /// Stamp CORS headers onto a finished response
    pub fn apply(&self, mut response: Response, origin: Option<&str>) -> Response {
        let echoes_origin = matches!(self.origins, AllowedOrigins::List(_));
        let allowed = self
            .allow_origin(origin)
            .and_then(|value| HeaderValue::from_str(&value).ok());

        let headers = response.headers_mut();
        if echoes_origin {
            headers.append(VARY, HeaderValue::from_static("Origin"));
        }

        let Some(allowed) = allowed else {
            return response;
        };

        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, allowed);
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        if echoes_origin {
            headers.insert(
                ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            );
        }

        response
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::list(DEFAULT_ALLOWED_ORIGINS)
    }
}

fn normalize(origin: &str) -> &str {
    origin.trim().trim_end_matches('/')
}
