//! # qBittorrent WebUI types
//!
//! This crate defines the wire types returned by the qBittorrent WebUI API, the
//! decoders for its irregular JSON encodings and the error type shared with the client.

use thiserror::Error;

pub mod decode;
mod models;
pub mod rss;
pub mod sync;
mod torrent;

pub use decode::Timestamp;
pub use models::{
    BuildInfo, Category, LogLevel, MainLog, Peer, PeerLog, Preferences, SearchPlugin,
    SearchPluginCategory, SearchResult, SearchResults, SearchStatus, SpeedLimitsMode,
    TransferInfo,
};
pub use rss::{AutoDownloadRule, RssArticle, RssFeed, RssFolder, RssNode, RssRoot};
pub use sync::{MainData, PeersData, SyncCursor, TorrentUpdate};
pub use torrent::{
    AddTorrentParams, ContentLayout, TorrentContent, TorrentInfo, TorrentListParams,
    TorrentProperties, Tracker,
};

/// Error type for qBittorrent API operations.
#[derive(Error, Debug)]
pub enum QbtError {
    /// The daemon rejected the session cookie.
    #[error("unauthenticated request")]
    Unauthenticated,

    /// The request could not be sent or no response was received.
    #[error("network error: {0}")]
    Network(String),

    /// A response was received but its status code signals a failure.
    #[error("received bad response (HTTP {status}): {reason}")]
    BadResponse {
        /// HTTP status code of the response.
        status: u16,
        /// Human readable reason attached by the binding.
        reason: String,
    },

    /// The caller supplied arguments the request cannot be built from.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// File system errors (file not found, permission denied, etc.)
    #[error("file system error: {0}")]
    FileSystem(String),

    /// Other unexpected errors
    #[error("unexpected error: {0}")]
    Other(String),
}

impl QbtError {
    /// Creates a bad response error.
    pub fn bad_response(status: u16, reason: impl Into<String>) -> Self {
        Self::BadResponse {
            status,
            reason: reason.into(),
        }
    }

    /// Returns the status code when this is a [`QbtError::BadResponse`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::QbtError;

    #[test]
    fn bad_response_carries_reason() {
        let err = QbtError::bad_response(404, "torrent hash was not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "received bad response (HTTP 404): torrent hash was not found"
        );
    }

    #[test]
    fn decode_errors_convert_from_serde() {
        let err: QbtError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, QbtError::Decode(_)));
        assert_eq!(err.status(), None);
    }
}
