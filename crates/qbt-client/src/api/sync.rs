//! `sync/*`: delta synchronization.
//!
//! The cursor belongs to the caller. Nothing is cached here, so two calls with
//! the same `rid` ask the daemon the same question.

use tracing::debug;

use qbt_types::{MainData, PeersData, QbtError};

use crate::client::Session;
use crate::endpoints;
use crate::params::Params;
use crate::status::StatusRule::{self, Is, Not};
use crate::transport::Transport;

const MAIN_DATA: &[StatusRule] = &[Not(200, "get main data failed")];
const TORRENT_PEERS: &[StatusRule] = &[
    Is(404, "torrent hash was not found"),
    Not(200, "get torrent peers data failed"),
];

impl<T: Transport> Session<T> {
    /// Changes since the response that carried `rid`, or a full snapshot for 0.
    ///
    /// When the result has `full_update` set it replaces the caller's state.
    pub async fn sync_main_data(&self, rid: i64) -> Result<MainData, QbtError> {
        let data: MainData = self
            .get_json(
                endpoints::SYNC_MAIN_DATA,
                Params::new().with("rid", rid),
                MAIN_DATA,
            )
            .await?;
        debug!(
            rid = data.rid,
            full_update = data.full_update,
            torrents = data.torrents.len(),
            removed = data.torrents_removed.len(),
            "main data synced"
        );
        Ok(data)
    }

    /// Peer changes of one torrent since `rid`.
    pub async fn sync_torrent_peers(&self, hash: &str, rid: i64) -> Result<PeersData, QbtError> {
        let data: PeersData = self
            .get_json(
                endpoints::SYNC_TORRENT_PEERS,
                Params::new().with("hash", hash).with("rid", rid),
                TORRENT_PEERS,
            )
            .await?;
        debug!(hash, rid = data.rid, peers = data.peers.len(), "torrent peers synced");
        Ok(data)
    }
}
