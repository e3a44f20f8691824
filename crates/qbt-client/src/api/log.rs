//! `log/*`

use qbt_types::{LogLevel, MainLog, PeerLog, QbtError};

use crate::client::Session;
use crate::endpoints;
use crate::params::Params;
use crate::status::StatusRule::{self, Not};
use crate::transport::Transport;

const MAIN: &[StatusRule] = &[Not(200, "get main logs failed")];
const PEERS: &[StatusRule] = &[Not(200, "get peer logs failed")];

impl<T: Transport> Session<T> {
    /// Main log entries of the given severities newer than `last_known_id`.
    ///
    /// Pass `-1` as `last_known_id` to get every entry.
    pub async fn main_log(
        &self,
        level: LogLevel,
        last_known_id: i64,
    ) -> Result<Vec<MainLog>, QbtError> {
        let params = Params::new()
            .with("normal", level.contains(LogLevel::NORMAL))
            .with("info", level.contains(LogLevel::INFO))
            .with("warning", level.contains(LogLevel::WARNING))
            .with("critical", level.contains(LogLevel::CRITICAL))
            .with("last_known_id", last_known_id);
        self.get_json(endpoints::LOG_MAIN, params, MAIN).await
    }

    /// Peer log entries newer than `last_known_id`.
    pub async fn peer_log(&self, last_known_id: i64) -> Result<Vec<PeerLog>, QbtError> {
        self.get_json(
            endpoints::LOG_PEERS,
            Params::new().with("last_known_id", last_known_id),
            PEERS,
        )
        .await
    }
}
