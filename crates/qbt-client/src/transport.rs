//! The HTTP boundary of the client.
//!
//! [`Transport`] is the only place requests leave the process. [`HttpTransport`]
//! implements it with `reqwest`; tests substitute a mock.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::{Url, form_urlencoded};

use qbt_types::QbtError;

use crate::config::ClientConfig;
use crate::params::Params;

/// HTTP method of an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Parameters travel in the query string.
    Get,
    /// Parameters travel form-encoded in the body.
    Post,
}

/// A file uploaded in a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name.
    pub field: String,
    /// File name reported to the daemon.
    pub file_name: String,
    /// MIME type of the content.
    pub mime: String,
    /// File content.
    pub content: Vec<u8>,
}

/// A multipart body: text fields plus files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    /// Text fields.
    pub fields: Params,
    /// Uploaded files.
    pub files: Vec<FilePart>,
}

/// A request against `/api/v2/{endpoint}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Endpoint below the API prefix, e.g. `sync/maindata`.
    pub endpoint: &'static str,
    /// Query parameters for GET, form fields for POST.
    pub params: Params,
    /// Extra headers.
    pub headers: Vec<(String, String)>,
    /// Multipart body; replaces the form-encoded `params` when set.
    pub multipart: Option<MultipartForm>,
}

impl ApiRequest {
    /// A GET request.
    pub fn get(endpoint: &'static str, params: Params) -> Self {
        Self {
            method: Method::Get,
            endpoint,
            params,
            headers: Vec::new(),
            multipart: None,
        }
    }

    /// A form-encoded POST request.
    pub fn post(endpoint: &'static str, params: Params) -> Self {
        Self {
            method: Method::Post,
            ..Self::get(endpoint, params)
        }
    }

    /// A multipart POST request.
    pub fn multipart(endpoint: &'static str, form: MultipartForm) -> Self {
        Self {
            multipart: Some(form),
            ..Self::post(endpoint, Params::new())
        }
    }

    /// Adds a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A received response: status, raw body and the names of cookies it set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Undecoded body.
    pub body: Vec<u8>,
    /// Names of the cookies set by the response.
    pub cookies: Vec<String>,
}

impl RawResponse {
    /// A response without cookies.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            cookies: Vec::new(),
        }
    }

    /// Adds a cookie name.
    pub fn with_cookie(mut self, name: impl Into<String>) -> Self {
        self.cookies.push(name.into());
        self
    }

    /// Decodes the body as JSON.
    pub fn json<R: DeserializeOwned>(&self) -> Result<R, QbtError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// The body as text, lossily decoded and trimmed.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).trim().to_owned()
    }
}

/// Sends API requests. Implementations own cookies, proxies and TLS.
#[cfg_attr(test, mockall::automock)]
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Performs a single request. No retries.
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, QbtError>;
}

/// `reqwest` backed transport with a cookie store.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    api_base: Url,
}

impl HttpTransport {
    /// Builds the transport from a configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, QbtError> {
        let api_base = config.api_base()?;
        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(proxy) = config.proxy()? {
            builder = builder.proxy(proxy);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(map_reqwest_error)?;
        Ok(Self { client, api_base })
    }

    fn url(&self, endpoint: &str) -> Result<Url, QbtError> {
        self.api_base
            .join(endpoint)
            .map_err(|e| QbtError::InvalidInput(format!("invalid endpoint {endpoint}: {e}")))
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, QbtError> {
        let mut url = self.url(request.endpoint)?;
        let builder = match (request.method, request.multipart) {
            (Method::Get, _) => {
                if !request.params.is_empty() {
                    url.query_pairs_mut().extend_pairs(request.params.iter());
                }
                self.client.get(url)
            }
            (Method::Post, Some(form)) => self.client.post(url).multipart(into_reqwest_form(form)?),
            (Method::Post, None) => {
                let body = form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(request.params.iter())
                    .finish();
                self.client
                    .post(url)
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(body)
            }
        };

        let response = builder
            .headers(header_map(&request.headers)?)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let cookies = response.cookies().map(|c| c.name().to_owned()).collect();
        let body = response.bytes().await.map_err(map_reqwest_error)?.to_vec();
        debug!(endpoint = request.endpoint, status, bytes = body.len(), "received response");

        Ok(RawResponse {
            status,
            body,
            cookies,
        })
    }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, QbtError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| QbtError::InvalidInput(format!("invalid header name {name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| QbtError::InvalidInput(format!("invalid header value: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

fn into_reqwest_form(form: MultipartForm) -> Result<Form, QbtError> {
    let mut out = Form::new();
    for (name, value) in form.fields.into_pairs() {
        out = out.text(name, value);
    }
    for file in form.files {
        let part = Part::bytes(file.content)
            .file_name(file.file_name)
            .mime_str(&file.mime)
            .map_err(map_reqwest_error)?;
        out = out.part(file.field, part);
    }
    Ok(out)
}

/// Maps reqwest errors to client errors.
fn map_reqwest_error(err: reqwest::Error) -> QbtError {
    QbtError::Network(err.to_string())
}
