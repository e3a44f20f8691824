//! Delta synchronization payloads.
//!
//! Both sync endpoints take a response id (`rid`). A `rid` of 0 asks for a full
//! snapshot; any other value asks for what changed since the response that
//! carried it. The daemon decides which one it sends: when `full_update` is set
//! the payload replaces the caller's state instead of patching it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::decode::keyed;
use crate::{Category, TorrentInfo};

/// Response of `sync/maindata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainData {
    /// Cursor to send with the next request.
    pub rid: i64,
    /// Whether this is a full snapshot.
    pub full_update: bool,
    /// Added or changed torrents keyed by hash. Deltas only carry changed fields.
    pub torrents: BTreeMap<String, TorrentUpdate>,
    /// Hashes of removed torrents.
    pub torrents_removed: Vec<String>,
    /// Added or changed categories.
    #[serde(deserialize_with = "keyed::deserialize")]
    pub categories: Vec<Category>,
    /// Names of removed categories.
    pub categories_removed: Vec<String>,
    /// Added tags.
    pub tags: Vec<String>,
    /// Removed tags.
    pub tags_removed: Vec<String>,
    /// Global state, kept as the daemon sends it.
    pub server_state: Map<String, Value>,
}

impl MainData {
    /// Applies this response to a mirrored torrent table.
    ///
    /// A full update replaces the table. A delta patches the listed torrents
    /// field by field and then drops the removed hashes.
    pub fn merge_torrents(
        &self,
        state: &mut BTreeMap<String, TorrentInfo>,
    ) -> Result<(), serde_json::Error> {
        if self.full_update {
            state.clear();
        }
        for (hash, update) in &self.torrents {
            let entry = state.entry(hash.clone()).or_insert_with(|| TorrentInfo {
                hash: hash.clone(),
                ..Default::default()
            });
            update.apply_to(entry)?;
        }
        for hash in &self.torrents_removed {
            state.remove(hash);
        }
        Ok(())
    }
}

/// The fields of one torrent as carried by `sync/maindata`.
///
/// In a delta only the changed keys are present, so a missing key and a key
/// set to zero stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TorrentUpdate(Map<String, Value>);

impl TorrentUpdate {
    /// Raw fields as sent by the daemon.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Whether the daemon sent `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Decodes the fields into a record, defaulting the absent ones.
    pub fn info(&self) -> Result<TorrentInfo, serde_json::Error> {
        serde_json::from_value(Value::Object(self.0.clone()))
    }

    /// Overwrites the fields of `target` that this update carries.
    pub fn apply_to(&self, target: &mut TorrentInfo) -> Result<(), serde_json::Error> {
        let mut merged = match serde_json::to_value(&*target)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (key, value) in &self.0 {
            merged.insert(key.clone(), value.clone());
        }
        *target = serde_json::from_value(Value::Object(merged))?;
        Ok(())
    }
}

/// Response of `sync/torrentPeers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeersData {
    /// Cursor to send with the next request.
    pub rid: i64,
    /// Whether this is a full snapshot.
    pub full_update: bool,
    /// Whether peer flags should be displayed.
    pub show_flags: bool,
    /// Peers keyed by `ip:port`, kept as the daemon sends them.
    pub peers: Map<String, Value>,
    /// Keys of peers that went away.
    pub peers_removed: Vec<String>,
}

/// A response cursor owned by the caller.
///
/// It starts at 0 (full snapshot) and only moves to values the daemon returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncCursor {
    rid: i64,
}

impl SyncCursor {
    /// A cursor requesting a full snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The `rid` to send.
    pub fn rid(&self) -> i64 {
        self.rid
    }

    /// Whether the next request asks for a full snapshot.
    pub fn is_initial(&self) -> bool {
        self.rid == 0
    }

    /// Advances to the cursor carried by a main data response.
    pub fn advance_main(&mut self, data: &MainData) {
        self.rid = data.rid;
    }

    /// Advances to the cursor carried by a peers response.
    pub fn advance_peers(&mut self, data: &PeersData) {
        self.rid = data.rid;
    }

    /// Forgets the cursor so the next request fetches a full snapshot.
    pub fn reset(&mut self) {
        self.rid = 0;
    }
}
