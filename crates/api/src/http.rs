//! JSON-over-HTTP implementation of the navigation contract.
//!
//! Routes, relative to the configured base URL:
//! - `GET  /navigation`          -> `{ "items": [...] }`
//! - `PUT  /navigation`          <- `{ "items": [...] }`, -> `{ "success": bool }`
//! - `POST /navigation/changes`  <- `{ "id", "from", "to" }`, -> `{ "success": bool }`

use std::time::Duration;

use jobdeck_types::{Ack, NavChange, NavItem, NavigationPayload};
use reqwest::{Client, Method, RequestBuilder, Response, header};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::{NavigationSource, SourceError};

/// Hostnames allowed to use plain `http`.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

#[derive(Serialize)]
struct UpdateBody<'a> {
    items: &'a [NavItem],
}

/// Thin wrapper around a configured `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpNavigationSource {
    base_url: String,
    http: Client,
}

impl HttpNavigationSource {
    /// Build a source for `base_url`, optionally sending a bearer token.
    ///
    /// Non-localhost hosts must use HTTPS.
    pub fn new(base_url: &str, api_token: Option<&str>) -> Result<Self, SourceError> {
        validate_base_url(base_url)?;

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        if let Some(token) = api_token {
            let value = header::HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| SourceError::InvalidBase {
                base: base_url.to_string(),
                reason: format!("unusable API token: {e}"),
            })?;
            default_headers.insert(header::AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(default_headers)
            .user_agent(concat!("jobdeck/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, %method, "building navigation request");
        self.http.request(method, url)
    }
}

fn check_status(operation: &'static str, response: Response) -> Result<Response, SourceError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(SourceError::Status {
            operation,
            status: status.as_u16(),
        })
    }
}

#[async_trait::async_trait]
impl NavigationSource for HttpNavigationSource {
    async fn fetch_navigation(&self) -> Result<NavigationPayload, SourceError> {
        let response = self.request(Method::GET, "/navigation").send().await?;
        let payload = check_status("fetchNavigation", response)?.json::<NavigationPayload>().await?;
        Ok(payload)
    }

    async fn update_navigation(&self, items: &[NavItem]) -> Result<Ack, SourceError> {
        let response = self
            .request(Method::PUT, "/navigation")
            .json(&UpdateBody { items })
            .send()
            .await?;
        Ok(check_status("updateNavigation", response)?.json::<Ack>().await?)
    }

    async fn track_nav_change(&self, change: &NavChange) -> Result<Ack, SourceError> {
        let response = self.request(Method::POST, "/navigation/changes").json(change).send().await?;
        Ok(check_status("trackNavChange", response)?.json::<Ack>().await?)
    }

    fn describe(&self) -> String {
        format!("http ({})", self.base_url)
    }
}

/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS
fn validate_base_url(base: &str) -> Result<(), SourceError> {
    let invalid = |reason: String| SourceError::InvalidBase {
        base: base.to_string(),
        reason,
    };
    let parsed = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    let host = parsed.host_str().ok_or_else(|| invalid("missing host".into()))?;

    if LOCALHOST_DOMAINS.iter().any(|allowed| host.eq_ignore_ascii_case(allowed)) {
        return Ok(());
    }
    if parsed.scheme() != "https" {
        return Err(invalid(format!("non-localhost hosts must use https; got '{}://'", parsed.scheme())));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_rules() {
        assert!(validate_base_url("http://localhost:8080").is_ok());
        assert!(validate_base_url("http://127.0.0.1").is_ok());
        assert!(validate_base_url("https://jobs.example.com/api").is_ok());
        assert!(validate_base_url("http://jobs.example.com").is_err());
        assert!(validate_base_url("not a url").is_err());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let source = HttpNavigationSource::new("http://localhost:9000/api/", None).expect("valid base");
        assert_eq!(source.base_url(), "http://localhost:9000/api");
        assert_eq!(source.describe(), "http (http://localhost:9000/api)");
    }
}
