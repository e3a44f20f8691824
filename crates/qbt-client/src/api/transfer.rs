//! `transfer/*`: global transfer state and limits.

use qbt_types::decode::join_list;
use qbt_types::{Peer, QbtError, SpeedLimitsMode, TransferInfo};

use crate::client::Session;
use crate::endpoints;
use crate::params::Params;
use crate::status::StatusRule::{self, Not};
use crate::transport::Transport;

const INFO: &[StatusRule] = &[Not(200, "get transfer info failed")];
const SPEED_LIMITS_MODE: &[StatusRule] = &[Not(200, "get speed limits mode failed")];
const TOGGLE_SPEED_LIMITS_MODE: &[StatusRule] = &[Not(200, "toggle speed limits mode failed")];
const DOWNLOAD_LIMIT: &[StatusRule] = &[Not(200, "get global download limit failed")];
const UPLOAD_LIMIT: &[StatusRule] = &[Not(200, "get global upload limit failed")];
const SET_DOWNLOAD_LIMIT: &[StatusRule] = &[Not(200, "set global download limit failed")];
const SET_UPLOAD_LIMIT: &[StatusRule] = &[Not(200, "set global upload limit failed")];
const BAN_PEERS: &[StatusRule] = &[Not(200, "ban peers failed")];

impl<T: Transport> Session<T> {
    /// Global speeds, totals and connection status.
    pub async fn transfer_info(&self) -> Result<TransferInfo, QbtError> {
        self.get_json(endpoints::TRANSFER_INFO, Params::new(), INFO)
            .await
    }

    /// Whether the alternative speed limits are active.
    pub async fn speed_limits_mode(&self) -> Result<SpeedLimitsMode, QbtError> {
        let flag: i64 = self
            .get_json(
                endpoints::TRANSFER_SPEED_LIMITS_MODE,
                Params::new(),
                SPEED_LIMITS_MODE,
            )
            .await?;
        SpeedLimitsMode::from_flag(flag)
            .ok_or_else(|| QbtError::Other(format!("unknown speed limits mode {flag}")))
    }

    /// Switches between regular and alternative speed limits.
    pub async fn toggle_speed_limits_mode(&self) -> Result<(), QbtError> {
        self.post(
            endpoints::TRANSFER_TOGGLE_SPEED_LIMITS_MODE,
            Params::new(),
            TOGGLE_SPEED_LIMITS_MODE,
        )
        .await?;
        Ok(())
    }

    /// Global download limit in bytes per second, 0 when unlimited.
    pub async fn global_download_limit(&self) -> Result<i64, QbtError> {
        self.get_json(endpoints::TRANSFER_DOWNLOAD_LIMIT, Params::new(), DOWNLOAD_LIMIT)
            .await
    }

    /// Global upload limit in bytes per second, 0 when unlimited.
    pub async fn global_upload_limit(&self) -> Result<i64, QbtError> {
        self.get_json(endpoints::TRANSFER_UPLOAD_LIMIT, Params::new(), UPLOAD_LIMIT)
            .await
    }

    /// Sets the global download limit in bytes per second.
    pub async fn set_global_download_limit(&self, limit: i64) -> Result<(), QbtError> {
        self.post(
            endpoints::TRANSFER_SET_DOWNLOAD_LIMIT,
            Params::new().with("limit", limit),
            SET_DOWNLOAD_LIMIT,
        )
        .await?;
        Ok(())
    }

    /// Sets the global upload limit in bytes per second.
    pub async fn set_global_upload_limit(&self, limit: i64) -> Result<(), QbtError> {
        self.post(
            endpoints::TRANSFER_SET_UPLOAD_LIMIT,
            Params::new().with("limit", limit),
            SET_UPLOAD_LIMIT,
        )
        .await?;
        Ok(())
    }

    /// Bans peers permanently.
    pub async fn ban_peers(&self, peers: &[Peer]) -> Result<(), QbtError> {
        let peers: Vec<String> = peers.iter().map(Peer::to_string).collect();
        self.post(
            endpoints::TRANSFER_BAN_PEERS,
            Params::new().with("peers", join_list(&peers, '|')),
            BAN_PEERS,
        )
        .await?;
        Ok(())
    }
}
