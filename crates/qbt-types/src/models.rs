//! Smaller records: categories, peers, transfer, application, log and search.

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::decode::{Keyed, Timestamp};

/// A torrent category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name. Filled from the object key when the category is delivered keyed.
    #[serde(default)]
    pub name: String,
    /// Save path, empty for the default location.
    #[serde(rename = "savePath", default)]
    pub save_path: String,
}

impl Category {
    /// Creates a category.
    pub fn new(name: impl Into<String>, save_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            save_path: save_path.into(),
        }
    }
}

impl Keyed for Category {
    fn set_key(&mut self, key: String) {
        self.name = key;
    }
}

/// A remote peer address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Peer {
    /// Host name or IP address.
    pub ip: String,
    /// Port.
    pub port: u16,
}

impl Peer {
    /// Creates a peer address.
    pub fn new(ip: impl Into<String>, port: u16) -> Self {
        Self {
            ip: ip.into(),
            port,
        }
    }
}

impl fmt::Display for Peer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ip.contains(':') {
            write!(f, "[{}]:{}", self.ip, self.port)
        } else {
            write!(f, "{}:{}", self.ip, self.port)
        }
    }
}

/// Global transfer information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct TransferInfo {
    pub connection_status: String,
    pub dht_nodes: i64,
    pub dl_info_data: i64,
    pub dl_info_speed: i64,
    pub dl_rate_limit: i64,
    pub up_info_data: i64,
    pub up_info_speed: i64,
    pub up_rate_limit: i64,
}

/// Whether the alternative speed limits are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedLimitsMode {
    /// Regular global limits apply.
    Normal,
    /// Alternative limits apply.
    Alternative,
}

impl SpeedLimitsMode {
    /// Parses the `0`/`1` body returned by `transfer/speedLimitsMode`.
    pub fn from_flag(flag: i64) -> Option<Self> {
        match flag {
            0 => Some(Self::Normal),
            1 => Some(Self::Alternative),
            _ => None,
        }
    }
}

/// Library versions the daemon was built with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct BuildInfo {
    pub qt: String,
    pub libtorrent: String,
    pub boost: String,
    pub openssl: String,
    pub zlib: String,
    pub bitness: i32,
}

/// Application preferences, passed through verbatim.
pub type Preferences = serde_json::Map<String, serde_json::Value>;

/// Bit set of log severities used to filter `log/main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogLevel(u8);

impl LogLevel {
    /// Normal messages.
    pub const NORMAL: Self = Self(1);
    /// Informational messages.
    pub const INFO: Self = Self(1 << 1);
    /// Warnings.
    pub const WARNING: Self = Self(1 << 2);
    /// Critical messages.
    pub const CRITICAL: Self = Self(1 << 3);
    /// Every severity.
    pub const ALL: Self = Self(0b1111);

    /// Whether every bit of `other` is set.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for LogLevel {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// An entry of the main log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainLog {
    /// Entry id, usable as `last_known_id`.
    pub id: i64,
    /// Message text.
    pub message: String,
    /// Time the entry was logged.
    pub timestamp: Timestamp,
    /// Severity bit of the entry.
    #[serde(rename = "type")]
    pub kind: u8,
}

/// An entry of the peer log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerLog {
    /// Entry id, usable as `last_known_id`.
    pub id: i64,
    /// Peer address.
    pub ip: String,
    /// Time the entry was logged.
    pub timestamp: Timestamp,
    /// Whether the peer was blocked.
    pub blocked: bool,
    /// Reason the peer was blocked.
    #[serde(default)]
    pub reason: String,
}

/// Status of a search job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatus {
    /// Search job id.
    pub id: i64,
    /// `Running` or `Stopped`.
    pub status: String,
    /// Number of results found so far.
    pub total: i64,
}

/// A page of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    /// Results in this page.
    pub results: Vec<SearchResult>,
    /// `Running` or `Stopped`.
    pub status: String,
    /// Total number of results.
    pub total: i64,
}

/// A single search hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct SearchResult {
    #[serde(rename = "descrLink")]
    pub description_link: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_url: String,
    #[serde(rename = "nbLeechers")]
    pub leechers: i64,
    #[serde(rename = "nbSeeders")]
    pub seeders: i64,
    pub site_url: String,
}

/// An installed search plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct SearchPlugin {
    pub enabled: bool,
    pub full_name: String,
    pub name: String,
    pub supported_categories: Vec<SearchPluginCategory>,
    pub url: String,
    pub version: String,
}

/// A category a search plugin can filter by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct SearchPluginCategory {
    pub id: String,
    pub name: String,
}
