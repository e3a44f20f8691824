//! Login and the authenticated session every binding runs on.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use qbt_types::QbtError;

use crate::config::ClientConfig;
use crate::endpoints;
use crate::params::Params;
use crate::status::{self, StatusRule, StatusRule::Is, StatusRule::Not};
use crate::transport::{ApiRequest, HttpTransport, RawResponse, Transport};

#[cfg(test)]
mod tests;

const LOGIN: &[StatusRule] = &[
    Is(403, "user's IP is banned for too many failed login attempts"),
    Not(200, "login failed"),
];
const LOGOUT: &[StatusRule] = &[Not(200, "logout failed")];

/// An unauthenticated handle. [`Client::login`] turns it into a [`Session`].
#[derive(Debug)]
pub struct Client<T: Transport = HttpTransport> {
    transport: T,
    origin: String,
}

impl Client {
    /// Client for `base_url` with default settings.
    pub fn new(base_url: &str) -> Result<Self, QbtError> {
        Self::with_config(&ClientConfig::new(base_url))
    }

    /// Client built from explicit settings.
    pub fn with_config(config: &ClientConfig) -> Result<Self, QbtError> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
            origin: config.origin().to_owned(),
        })
    }
}

impl<T: Transport> Client<T> {
    /// Client running on a custom transport.
    pub fn with_transport(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            origin: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.origin
    }

    /// Logs in and returns the authenticated session.
    ///
    /// The daemon answers wrong credentials with a 200 and no cookie, which is
    /// reported as a bad response like any other refusal.
    pub async fn login(self, username: &str, password: &str) -> Result<Session<T>, QbtError> {
        debug!(base_url = %self.origin, username, "logging in");
        let request = ApiRequest::post(
            endpoints::AUTH_LOGIN,
            Params::new()
                .with("username", username)
                .with("password", password),
        )
        .header("Origin", self.origin.as_str())
        .header("Referer", self.origin.as_str());

        let response = self.transport.send(request).await?;
        if let Err(err) = status::check(LOGIN, response.status) {
            warn!(%err, "login rejected");
            return Err(err);
        }
        if response.cookies.is_empty() {
            warn!("login returned no session cookie");
            return Err(QbtError::bad_response(
                response.status,
                "login failed: no cookie returned",
            ));
        }

        debug!("logged in");
        Ok(Session {
            transport: self.transport,
            origin: self.origin,
        })
    }
}

/// An authenticated session.
///
/// Only [`Client::login`] creates one; [`Session::logout`] and
/// [`Session::shutdown`] consume it. The bindings live in the `api` modules.
#[derive(Debug)]
pub struct Session<T: Transport = HttpTransport> {
    transport: T,
    origin: String,
}

impl<T: Transport> Session<T> {
    /// Create a session around a transport without logging in.
    /// This is primarily useful for testing with mocks.
    #[cfg(test)]
    pub(crate) fn with_transport(transport: T) -> Self {
        Self {
            transport,
            origin: "http://localhost:8080".to_owned(),
        }
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.origin
    }

    /// Ends the session and hands back an unauthenticated client.
    pub async fn logout(self) -> Result<Client<T>, QbtError> {
        self.post(endpoints::AUTH_LOGOUT, Params::new(), LOGOUT).await?;
        debug!("logged out");
        Ok(Client {
            transport: self.transport,
            origin: self.origin,
        })
    }

    /// Sends a request and maps its status.
    ///
    /// A 403 means the daemon no longer accepts the session cookie, unless the
    /// endpoint's own table gives 403 a meaning.
    pub(crate) async fn call(
        &self,
        request: ApiRequest,
        rules: &[StatusRule],
    ) -> Result<RawResponse, QbtError> {
        let endpoint = request.endpoint;
        debug!(endpoint, method = ?request.method, params = ?request.params, "sending request");
        let response = self.transport.send(request).await?;

        if response.status == 403 && !has_exact_rule(rules, 403) {
            warn!(endpoint, "session cookie rejected");
            return Err(QbtError::Unauthenticated);
        }
        if let Err(err) = status::check(rules, response.status) {
            warn!(endpoint, %err, "request failed");
            return Err(err);
        }
        Ok(response)
    }

    pub(crate) async fn get(
        &self,
        endpoint: &'static str,
        params: Params,
        rules: &[StatusRule],
    ) -> Result<RawResponse, QbtError> {
        self.call(ApiRequest::get(endpoint, params), rules).await
    }

    pub(crate) async fn post(
        &self,
        endpoint: &'static str,
        params: Params,
        rules: &[StatusRule],
    ) -> Result<RawResponse, QbtError> {
        self.call(ApiRequest::post(endpoint, params), rules).await
    }

    pub(crate) async fn get_json<R: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: Params,
        rules: &[StatusRule],
    ) -> Result<R, QbtError> {
        self.get(endpoint, params, rules).await?.json()
    }

    pub(crate) async fn post_json<R: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: Params,
        rules: &[StatusRule],
    ) -> Result<R, QbtError> {
        self.post(endpoint, params, rules).await?.json()
    }
}

fn has_exact_rule(rules: &[StatusRule], code: u16) -> bool {
    rules
        .iter()
        .any(|rule| matches!(rule, StatusRule::Is(c, _) if *c == code))
}
