//! `app/*`: versions, preferences and shutdown.

use tracing::debug;

use qbt_types::{BuildInfo, Preferences, QbtError};

use crate::client::Session;
use crate::endpoints;
use crate::params::Params;
use crate::status::StatusRule::{self, Not};
use crate::transport::Transport;

const VERSION: &[StatusRule] = &[Not(200, "get qbittorrent version failed")];
const WEBAPI_VERSION: &[StatusRule] = &[Not(200, "get WebAPI version failed")];
const BUILD_INFO: &[StatusRule] = &[Not(200, "get build info failed")];
const SHUTDOWN: &[StatusRule] = &[Not(200, "shutdown failed")];
const PREFERENCES: &[StatusRule] = &[Not(200, "get preferences failed")];
const SET_PREFERENCES: &[StatusRule] = &[Not(200, "set preferences failed")];
const DEFAULT_SAVE_PATH: &[StatusRule] = &[Not(200, "get default save path failed")];

impl<T: Transport> Session<T> {
    /// Application version, e.g. `v4.6.4`.
    pub async fn version(&self) -> Result<String, QbtError> {
        Ok(self
            .get(endpoints::APP_VERSION, Params::new(), VERSION)
            .await?
            .text())
    }

    /// WebUI API version, e.g. `2.9.3`.
    pub async fn webapi_version(&self) -> Result<String, QbtError> {
        Ok(self
            .get(endpoints::APP_WEBAPI_VERSION, Params::new(), WEBAPI_VERSION)
            .await?
            .text())
    }

    /// Library versions the daemon was built with.
    pub async fn build_info(&self) -> Result<BuildInfo, QbtError> {
        self.get_json(endpoints::APP_BUILD_INFO, Params::new(), BUILD_INFO)
            .await
    }

    /// Stops the daemon. The session is gone afterwards.
    pub async fn shutdown(self) -> Result<(), QbtError> {
        self.post(endpoints::APP_SHUTDOWN, Params::new(), SHUTDOWN)
            .await?;
        debug!("daemon shutting down");
        Ok(())
    }

    /// Application preferences as the daemon reports them.
    pub async fn preferences(&self) -> Result<Preferences, QbtError> {
        self.get_json(endpoints::APP_PREFERENCES, Params::new(), PREFERENCES)
            .await
    }

    /// Changes the preferences present in `preferences`; others keep their value.
    pub async fn set_preferences(&self, preferences: &Preferences) -> Result<(), QbtError> {
        let json = serde_json::to_string(preferences)?;
        self.post(
            endpoints::APP_SET_PREFERENCES,
            Params::new().with("json", json),
            SET_PREFERENCES,
        )
        .await?;
        Ok(())
    }

    /// Default save path for new torrents.
    pub async fn default_save_path(&self) -> Result<String, QbtError> {
        Ok(self
            .get(endpoints::APP_DEFAULT_SAVE_PATH, Params::new(), DEFAULT_SAVE_PATH)
            .await?
            .text())
    }
}
