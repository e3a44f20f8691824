//! Torrent records and request parameters.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::decode::{Timestamp, comma_list};

/// Torrent summary as returned by `torrents/info` and `sync/maindata`.
///
/// Every field falls back to its default when absent. Sync deltas arrive as
/// [`TorrentUpdate`](crate::TorrentUpdate) and are merged into this record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct TorrentInfo {
    pub added_on: Timestamp,
    pub amount_left: i64,
    pub auto_tmm: bool,
    pub availability: f64,
    pub category: String,
    pub completed: i64,
    pub completion_on: Timestamp,
    pub content_path: String,
    #[serde(rename = "dl_limit")]
    pub download_limit: i64,
    #[serde(rename = "dlspeed")]
    pub download_speed: i64,
    pub download_path: String,
    pub downloaded: i64,
    pub downloaded_session: i64,
    pub eta: i64,
    #[serde(rename = "f_l_piece_prio")]
    pub first_last_piece_prio: bool,
    pub force_start: bool,
    pub hash: String,
    pub inactive_seeding_time_limit: i64,
    pub infohash_v1: String,
    pub infohash_v2: String,
    pub last_activity: Timestamp,
    pub magnet_uri: String,
    pub max_ratio: f64,
    pub max_inactive_seeding_time: i64,
    pub max_seeding_time: i64,
    pub name: String,
    pub num_complete: i64,
    pub num_incomplete: i64,
    #[serde(rename = "num_leechs")]
    pub num_leechers: i64,
    pub num_seeds: i64,
    pub priority: i64,
    pub progress: f64,
    pub ratio: f64,
    pub ratio_limit: f64,
    pub save_path: String,
    pub seeding_time: i64,
    pub seeding_time_limit: i64,
    pub seen_complete: Timestamp,
    #[serde(rename = "seq_dl")]
    pub sequential_download: bool,
    pub size: i64,
    pub state: String,
    pub super_seeding: bool,
    #[serde(with = "comma_list")]
    pub tags: Vec<String>,
    pub time_active: i64,
    pub total_size: i64,
    pub tracker: String,
    pub trackers_count: i64,
    #[serde(rename = "up_limit")]
    pub upload_limit: i64,
    pub uploaded: i64,
    pub uploaded_session: i64,
    #[serde(rename = "upspeed")]
    pub upload_speed: i64,
}

/// Generic properties of a single torrent (`torrents/properties`).
///
/// Integer properties the daemon does not know are reported as `-1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct TorrentProperties {
    pub addition_date: Timestamp,
    pub comment: String,
    pub completion_date: Timestamp,
    pub created_by: String,
    pub creation_date: Timestamp,
    #[serde(rename = "dl_limit")]
    pub download_limit: i64,
    #[serde(rename = "dl_speed")]
    pub download_speed: i64,
    #[serde(rename = "dl_speed_avg")]
    pub download_speed_avg: i64,
    pub download_path: String,
    pub eta: i64,
    pub hash: String,
    pub infohash_v1: String,
    pub infohash_v2: String,
    pub is_private: bool,
    pub last_seen: Timestamp,
    pub name: String,
    #[serde(rename = "nb_connections")]
    pub connections: i64,
    #[serde(rename = "nb_connections_limit")]
    pub connections_limit: i64,
    pub peers: i64,
    pub peers_total: i64,
    pub piece_size: i64,
    pub pieces_have: i64,
    pub pieces_num: i64,
    pub reannounce: i64,
    pub save_path: String,
    pub seeding_time: i64,
    pub seeds: i64,
    pub seeds_total: i64,
    pub share_ratio: f64,
    pub time_elapsed: i64,
    pub total_downloaded: i64,
    pub total_downloaded_session: i64,
    pub total_size: i64,
    pub total_uploaded: i64,
    pub total_uploaded_session: i64,
    pub total_wasted: i64,
    #[serde(rename = "up_limit")]
    pub upload_limit: i64,
    #[serde(rename = "up_speed")]
    pub upload_speed: i64,
    #[serde(rename = "up_speed_avg")]
    pub upload_speed_avg: i64,
}

/// A tracker of a torrent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Tracker {
    pub url: String,
    pub status: i64,
    pub tier: i64,
    pub num_peers: i64,
    pub num_seeds: i64,
    pub num_leeches: i64,
    pub num_downloaded: i64,
    #[serde(rename = "msg")]
    pub message: String,
}

/// A file inside a torrent (`torrents/files`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct TorrentContent {
    pub index: i64,
    pub is_seed: bool,
    pub name: String,
    pub piece_range: Vec<i64>,
    pub priority: i64,
    pub progress: f64,
    pub size: i64,
    pub availability: f64,
}

/// Filters for `torrents/info`. The default lists every torrent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TorrentListParams {
    /// State filter, e.g. `downloading` or `completed`.
    pub filter: Option<String>,
    /// Only torrents of this category.
    pub category: Option<String>,
    /// Only torrents without a category. Takes precedence over `category`.
    pub without_category: bool,
    /// Only torrents with this tag.
    pub tag: Option<String>,
    /// Only torrents without tags. Takes precedence over `tag`.
    pub without_tag: bool,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Reverse the sort order.
    pub reverse: bool,
    /// Page size, ignored when zero.
    pub limit: u32,
    /// Page offset; negative values count from the end.
    pub offset: i64,
    /// Only these torrents.
    pub hashes: Vec<String>,
}

/// How the content of an added torrent is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLayout {
    /// Use the daemon default.
    Original,
    /// Always create a subfolder.
    Subfolder,
    /// Never create a subfolder.
    NoSubfolder,
}

impl ContentLayout {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Subfolder => "Subfolder",
            Self::NoSubfolder => "NoSubfolder",
        }
    }
}

/// Parameters for `torrents/add`. At least one URL or file is required.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(missing_docs)]
pub struct AddTorrentParams {
    /// Magnet links or HTTP URLs.
    pub urls: Vec<String>,
    /// Local `.torrent` files to upload.
    pub files: Vec<PathBuf>,
    pub save_path: Option<String>,
    /// Cookie sent by the daemon when downloading `urls`.
    pub cookie: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub skip_checking: bool,
    pub paused: bool,
    /// `None` leaves the daemon default.
    pub root_folder: Option<bool>,
    pub rename: Option<String>,
    /// Bytes per second.
    pub upload_limit: Option<i64>,
    /// Bytes per second.
    pub download_limit: Option<i64>,
    pub ratio_limit: Option<f64>,
    /// Minutes.
    pub seeding_time_limit: Option<i64>,
    pub auto_tmm: bool,
    pub sequential_download: bool,
    pub first_last_piece_prio: bool,
    pub add_to_top_of_queue: bool,
    /// `MetadataReceived` or `FilesChecked`.
    pub stop_condition: Option<String>,
    pub content_layout: Option<ContentLayout>,
}

impl AddTorrentParams {
    /// Parameters adding torrents from URLs or magnet links.
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Parameters uploading local torrent files.
    pub fn from_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Whether there is anything to add.
    pub fn has_source(&self) -> bool {
        !self.urls.is_empty() || !self.files.is_empty()
    }
}
