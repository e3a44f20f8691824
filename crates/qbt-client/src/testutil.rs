//! Shared test utilities and fixtures.

use crate::client::Session;
use crate::transport::{ApiRequest, Method, MockTransport, RawResponse};

pub(crate) const MAIN_DATA_FULL: &str = r#"{
    "rid": 1,
    "full_update": true,
    "torrents": {
        "8c212779b4abde7c6bc608063a0d008b7e40ce32": {
            "name": "debian-12.iso",
            "hash": "8c212779b4abde7c6bc608063a0d008b7e40ce32",
            "state": "downloading",
            "progress": 0.25,
            "tags": "linux, iso",
            "added_on": 1700000000
        }
    },
    "categories": {"Linux": {"name": "Linux", "savePath": "/data/linux"}},
    "tags": ["linux", "iso"],
    "server_state": {"connection_status": "connected"}
}"#;

pub(crate) const MAIN_DATA_DELTA: &str = r#"{
    "rid": 2,
    "torrents": {"8c212779b4abde7c6bc608063a0d008b7e40ce32": {"progress": 0.5}},
    "torrents_removed": ["deadbeef"]
}"#;

pub(crate) const RSS_ITEMS: &str = r#"{
    "Folder1": {
        "Feed1": {"uid": "{a}", "url": "http://a/rss", "title": "A"}
    },
    "Feed2": {"uid": "{b}", "url": "http://b/rss", "title": "B"}
}"#;

pub(crate) const RSS_RULES: &str = r#"{
    "Debian": {"enabled": true, "mustContain": "debian", "affectedFeeds": ["http://a/rss"]}
}"#;

pub(crate) fn ok(body: &str) -> RawResponse {
    RawResponse::new(200, body)
}

pub(crate) fn status(code: u16) -> RawResponse {
    RawResponse::new(code, "")
}

pub(crate) fn session(mock: MockTransport) -> Session<MockTransport> {
    Session::with_transport(mock)
}

/// Expects one request to `endpoint` with `method`, answered by `response`.
pub(crate) fn expect(
    mock: &mut MockTransport,
    method: Method,
    endpoint: &'static str,
    response: RawResponse,
) {
    mock.expect_send()
        .withf(move |req: &ApiRequest| req.method == method && req.endpoint == endpoint)
        .times(1)
        .returning(move |_| Ok(response.clone()));
}
