//! Connection settings.

use std::env;
use std::time::Duration;

use url::Url;

use qbt_types::QbtError;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("qBittorrent-API v", env!("CARGO_PKG_VERSION"));

/// Settings used to build an [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// WebUI address, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Proxy URI with an `http`, `https` or `socks5` scheme.
    pub proxy: Option<String>,
    /// Skip TLS certificate verification.
    pub accept_invalid_certs: bool,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Settings for `base_url` with defaults for everything else.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: USER_AGENT.to_owned(),
            proxy: None,
            accept_invalid_certs: false,
            timeout: None,
        }
    }

    /// Settings from `QBITTORRENT_URL` and the optional `QBITTORRENT_PROXY`.
    pub fn from_env() -> Result<Self, QbtError> {
        let base_url = env::var("QBITTORRENT_URL")
            .map_err(|_| QbtError::InvalidInput("QBITTORRENT_URL is not set".into()))?;
        let mut config = Self::new(base_url);
        config.proxy = env::var("QBITTORRENT_PROXY").ok().filter(|p| !p.is_empty());
        Ok(config)
    }

    /// Routes requests through a proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Skips TLS certificate verification.
    pub fn with_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Base URL with the trailing slash trimmed, as sent in `Origin` and `Referer`.
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// `{base}/api/v2/`, the URL every endpoint is joined onto.
    pub(crate) fn api_base(&self) -> Result<Url, QbtError> {
        let raw = format!("{}/api/v2/", self.origin());
        let url = Url::parse(&raw).map_err(|e| {
            QbtError::InvalidInput(format!("invalid base url {}: {e}", self.base_url))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(QbtError::InvalidInput(format!(
                "unsupported base url scheme {scheme}"
            ))),
        }
    }

    pub(crate) fn proxy(&self) -> Result<Option<reqwest::Proxy>, QbtError> {
        let Some(raw) = self.proxy.as_deref() else {
            return Ok(None);
        };
        let url = Url::parse(raw)
            .map_err(|e| QbtError::InvalidInput(format!("invalid proxy url: {e}")))?;
        match url.scheme() {
            "http" | "https" | "socks5" => reqwest::Proxy::all(url.as_str())
                .map(Some)
                .map_err(|e| QbtError::InvalidInput(format!("invalid proxy url: {e}"))),
            _ => Err(QbtError::InvalidInput(
                "invalid proxy scheme, only http, https and socks5 are supported".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_carries_crate_version() {
        let config = ClientConfig::new("http://localhost:8080");
        assert!(config.user_agent.starts_with("qBittorrent-API v"));
        assert!(config.user_agent.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://localhost:8080/");
        assert_eq!(config.origin(), "http://localhost:8080");
        assert_eq!(
            config.api_base().unwrap().as_str(),
            "http://localhost:8080/api/v2/"
        );
    }

    #[test]
    fn base_url_with_prefix_keeps_it() {
        let config = ClientConfig::new("https://example.org/qbt");
        assert_eq!(
            config.api_base().unwrap().as_str(),
            "https://example.org/qbt/api/v2/"
        );
    }

    #[test]
    fn rejects_bad_base_url() {
        assert!(ClientConfig::new("not a url").api_base().is_err());
        assert!(ClientConfig::new("ftp://host").api_base().is_err());
    }

    #[test]
    fn proxy_schemes() {
        let base = ClientConfig::new("http://localhost:8080");
        assert!(base.proxy().unwrap().is_none());
        for ok in ["http://proxy:3128", "https://proxy:3128", "socks5://proxy:1080"] {
            assert!(base.clone().with_proxy(ok).proxy().unwrap().is_some(), "{ok}");
        }
        let err = base.with_proxy("ftp://proxy:21").proxy().unwrap_err();
        assert!(matches!(err, QbtError::InvalidInput(msg) if msg.contains("socks5")));
    }
}
