//! `search/*`: search jobs and plugins.

use serde::Deserialize;

use qbt_types::decode::join_list;
use qbt_types::{QbtError, SearchPlugin, SearchResults, SearchStatus};

use crate::client::Session;
use crate::endpoints;
use crate::params::Params;
use crate::status::StatusRule::{self, Is, Not};
use crate::transport::Transport;

const START: &[StatusRule] = &[
    Is(409, "user has reached the limit of max running searches"),
    Not(200, "start search failed"),
];
const STOP: &[StatusRule] = &[
    Is(404, "search job was not found"),
    Not(200, "stop search failed"),
];
const STATUS: &[StatusRule] = &[
    Is(404, "search job was not found"),
    Not(200, "get search status failed"),
];
const RESULTS: &[StatusRule] = &[
    Is(404, "search job was not found"),
    Is(409, "offset is too large, or too small"),
    Not(200, "get search results failed"),
];
const DELETE: &[StatusRule] = &[
    Is(404, "search job was not found"),
    Not(200, "delete search failed"),
];
const PLUGINS: &[StatusRule] = &[Not(200, "get search plugins failed")];
const INSTALL: &[StatusRule] = &[Not(200, "install search plugins failed")];
const UNINSTALL: &[StatusRule] = &[Not(200, "uninstall search plugins failed")];
const ENABLE: &[StatusRule] = &[Not(200, "enable search plugins failed")];
const UPDATE: &[StatusRule] = &[Not(200, "update search plugins failed")];

#[derive(Deserialize)]
struct SearchJob {
    id: i64,
}

impl<T: Transport> Session<T> {
    /// Starts a search and returns its job id.
    ///
    /// `plugins` may hold plugin names or `all`/`enabled`; `category` a plugin
    /// category or `all`.
    pub async fn start_search<S: AsRef<str>>(
        &self,
        pattern: &str,
        plugins: &[S],
        category: &str,
    ) -> Result<i64, QbtError> {
        let job: SearchJob = self
            .post_json(
                endpoints::SEARCH_START,
                Params::new()
                    .with("pattern", pattern)
                    .with("plugins", join_list(plugins, '|'))
                    .with("category", category),
                START,
            )
            .await?;
        Ok(job.id)
    }

    /// Stops a running search.
    pub async fn stop_search(&self, id: i64) -> Result<(), QbtError> {
        self.post(endpoints::SEARCH_STOP, Params::new().with("id", id), STOP)
            .await?;
        Ok(())
    }

    /// Status of one search job, or of every job when `id` is `None`.
    pub async fn search_status(&self, id: Option<i64>) -> Result<Vec<SearchStatus>, QbtError> {
        self.post_json(
            endpoints::SEARCH_STATUS,
            Params::new().with_opt("id", id),
            STATUS,
        )
        .await
    }

    /// A page of results. A negative `offset` counts from the end.
    pub async fn search_results(
        &self,
        id: i64,
        limit: Option<u32>,
        offset: Option<i64>,
    ) -> Result<SearchResults, QbtError> {
        self.post_json(
            endpoints::SEARCH_RESULTS,
            Params::new()
                .with("id", id)
                .with_opt("limit", limit)
                .with_opt("offset", offset),
            RESULTS,
        )
        .await
    }

    /// Stops a search and discards its results.
    pub async fn delete_search(&self, id: i64) -> Result<(), QbtError> {
        self.post(endpoints::SEARCH_DELETE, Params::new().with("id", id), DELETE)
            .await?;
        Ok(())
    }

    /// Installed search plugins.
    pub async fn search_plugins(&self) -> Result<Vec<SearchPlugin>, QbtError> {
        self.get_json(endpoints::SEARCH_PLUGINS, Params::new(), PLUGINS)
            .await
    }

    /// Installs plugins from URLs or local file paths.
    pub async fn install_search_plugins<S: AsRef<str>>(
        &self,
        sources: &[S],
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::SEARCH_INSTALL_PLUGIN,
            Params::new().with("sources", join_list(sources, '|')),
            INSTALL,
        )
        .await?;
        Ok(())
    }

    /// Uninstalls plugins by name.
    pub async fn uninstall_search_plugins<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::SEARCH_UNINSTALL_PLUGIN,
            Params::new().with("names", join_list(names, '|')),
            UNINSTALL,
        )
        .await?;
        Ok(())
    }

    /// Enables or disables plugins.
    pub async fn enable_search_plugins<S: AsRef<str>>(
        &self,
        names: &[S],
        enable: bool,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::SEARCH_ENABLE_PLUGIN,
            Params::new()
                .with("names", join_list(names, '|'))
                .with("enable", enable),
            ENABLE,
        )
        .await?;
        Ok(())
    }

    /// Updates every installed plugin.
    pub async fn update_search_plugins(&self) -> Result<(), QbtError> {
        self.post(endpoints::SEARCH_UPDATE_PLUGINS, Params::new(), UPDATE)
            .await?;
        Ok(())
    }
}
