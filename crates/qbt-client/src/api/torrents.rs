//! `torrents/*`: listing, lifecycle, trackers, priorities, limits, categories and tags.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use qbt_types::decode::{join_list, keyed};
use qbt_types::{
    AddTorrentParams, Category, Peer, QbtError, TorrentContent, TorrentInfo, TorrentListParams,
    TorrentProperties, Tracker,
};

use crate::client::Session;
use crate::endpoints;
use crate::params::{self, Params};
use crate::status::StatusRule::{self, Is, Not};
use crate::transport::{ApiRequest, Transport};

const LIST: &[StatusRule] = &[Not(200, "get torrents list failed")];
const PROPERTIES: &[StatusRule] = &[
    Is(404, "hash is invalid"),
    Not(200, "get torrents properties failed"),
];
const TRACKERS: &[StatusRule] = &[
    Is(404, "hash is invalid"),
    Not(200, "get torrent trackers failed"),
];
const WEB_SEEDS: &[StatusRule] = &[
    Is(404, "hash is invalid"),
    Not(200, "get torrent web seeds failed"),
];
const CONTENTS: &[StatusRule] = &[
    Is(404, "hash is invalid"),
    Not(200, "get torrent contents failed"),
];
const PIECE_STATES: &[StatusRule] = &[
    Is(404, "hash is invalid"),
    Not(200, "get torrent pieces' states failed"),
];
const PIECE_HASHES: &[StatusRule] = &[
    Is(404, "hash is invalid"),
    Not(200, "get torrent pieces' hashes failed"),
];
const PAUSE: &[StatusRule] = &[Not(200, "pause torrents failed")];
const RESUME: &[StatusRule] = &[Not(200, "resume torrents failed")];
const DELETE: &[StatusRule] = &[Not(200, "delete torrents failed")];
const RECHECK: &[StatusRule] = &[Not(200, "recheck torrents failed")];
const REANNOUNCE: &[StatusRule] = &[Not(200, "reannounce torrents failed")];
const EXPORT: &[StatusRule] = &[
    Is(404, "torrent hash was not found"),
    Not(200, "export torrent failed"),
];
const ADD: &[StatusRule] = &[
    Is(415, "torrent file is not valid"),
    Not(200, "add new torrent failed"),
];
const ADD_TRACKERS: &[StatusRule] = &[
    Is(404, "torrent hash was not found"),
    Not(200, "add trackers to torrent failed"),
];
const EDIT_TRACKER: &[StatusRule] = &[
    Is(400, "newUrl is not a valid URL"),
    Is(404, "torrent hash was not found"),
    Is(409, "newUrl already exists for the torrent or origUrl was not found"),
    Not(200, "edit trackers to torrent failed"),
];
const REMOVE_TRACKERS: &[StatusRule] = &[
    Is(404, "torrent hash was not found"),
    Is(409, "specified trackers not found"),
    Not(200, "remove trackers from torrent failed"),
];
const ADD_PEERS: &[StatusRule] = &[
    Is(400, "none of the supplied peers are valid"),
    Not(200, "add peers to torrent(s) failed"),
];
const INCREASE_PRIO: &[StatusRule] = &[
    Is(409, "torrent queueing is not enabled"),
    Not(200, "increase torrent priority failed"),
];
const DECREASE_PRIO: &[StatusRule] = &[
    Is(409, "torrent queueing is not enabled"),
    Not(200, "decrease torrent priority failed"),
];
const TOP_PRIO: &[StatusRule] = &[
    Is(409, "torrent queueing is not enabled"),
    Not(200, "maximize torrent priority failed"),
];
const BOTTOM_PRIO: &[StatusRule] = &[
    Is(409, "torrent queueing is not enabled"),
    Not(200, "minimize torrent priority failed"),
];
const FILE_PRIO: &[StatusRule] = &[
    Is(400, "priority is invalid, or at least one file id is not a valid integer"),
    Is(404, "torrent hash was not found"),
    Is(409, "torrent metadata hasn't downloaded yet, or at least one file id was not found"),
    Not(200, "set file priority failed"),
];
const DOWNLOAD_LIMIT: &[StatusRule] = &[Not(200, "get download limit failed")];
const UPLOAD_LIMIT: &[StatusRule] = &[Not(200, "get upload limit failed")];
const SET_DOWNLOAD_LIMIT: &[StatusRule] = &[Not(200, "set download limit failed")];
const SET_UPLOAD_LIMIT: &[StatusRule] = &[Not(200, "set upload limit failed")];
const SHARE_LIMITS: &[StatusRule] = &[Not(200, "set share limit failed")];
const SET_LOCATION: &[StatusRule] = &[
    Is(400, "save path is empty"),
    Is(403, "user does not have write access to directory"),
    Is(409, "unable to create save path directory"),
    Not(200, "set torrent location failed"),
];
const RENAME: &[StatusRule] = &[
    Is(404, "torrent hash is invalid"),
    Is(409, "torrent name is empty"),
    Not(200, "set torrent name failed"),
];
const SET_CATEGORY: &[StatusRule] = &[
    Is(409, "category name does not exist"),
    Not(200, "set torrent category failed"),
];
const ADD_TAGS: &[StatusRule] = &[Not(200, "add torrent tags failed")];
const REMOVE_TAGS: &[StatusRule] = &[Not(200, "remove torrent tags failed")];
const CATEGORIES: &[StatusRule] = &[Not(200, "get categories failed")];
const CREATE_CATEGORY: &[StatusRule] = &[
    Is(400, "category name is empty"),
    Is(409, "category name is invalid"),
    Not(200, "add category failed"),
];
const EDIT_CATEGORY: &[StatusRule] = &[
    Is(400, "category name is empty"),
    Is(409, "category editing failed"),
    Not(200, "category editing failed"),
];
const REMOVE_CATEGORIES: &[StatusRule] = &[Not(200, "remove categories failed")];
const TAGS: &[StatusRule] = &[Not(200, "get tags failed")];
const CREATE_TAGS: &[StatusRule] = &[Not(200, "create tags failed")];
const DELETE_TAGS: &[StatusRule] = &[Not(200, "delete tags failed")];
const AUTO_MANAGEMENT: &[StatusRule] = &[Not(200, "set auto torrent management failed")];
const SEQUENTIAL: &[StatusRule] = &[Not(200, "toggle sequential download failed")];
const FIRST_LAST_PRIO: &[StatusRule] = &[Not(200, "set first/last piece priority failed")];
const FORCE_START: &[StatusRule] = &[Not(200, "set force start failed")];
const SUPER_SEEDING: &[StatusRule] = &[Not(200, "set super seeding failed")];
const RENAME_FILE: &[StatusRule] = &[
    Is(400, "missing newPath parameter"),
    Is(409, "invalid newPath or oldPath, or newPath is already in use"),
    Not(200, "rename file failed"),
];
const RENAME_FOLDER: &[StatusRule] = &[
    Is(400, "missing newPath parameter"),
    Is(409, "invalid newPath or oldPath, or newPath is already in use"),
    Not(200, "rename folder failed"),
];

#[derive(Deserialize)]
struct WebSeed {
    url: String,
}

fn hash_params<S: AsRef<str>>(hashes: &[S]) -> Params {
    Params::new().with("hashes", params::hashes(hashes))
}

fn index_list(indexes: &[i64]) -> String {
    let indexes: Vec<String> = indexes.iter().map(i64::to_string).collect();
    join_list(&indexes, '|')
}

impl<T: Transport> Session<T> {
    async fn post_hashes<S: AsRef<str>>(
        &self,
        endpoint: &'static str,
        hashes: &[S],
        rules: &[StatusRule],
    ) -> Result<(), QbtError> {
        self.post(endpoint, hash_params(hashes), rules).await?;
        Ok(())
    }

    /// Torrents matching the filters.
    pub async fn torrents(&self, filter: &TorrentListParams) -> Result<Vec<TorrentInfo>, QbtError> {
        self.get_json(endpoints::TORRENTS_INFO, params::torrent_list(filter), LIST)
            .await
    }

    /// Generic properties of one torrent.
    pub async fn properties(&self, hash: &str) -> Result<TorrentProperties, QbtError> {
        self.get_json(
            endpoints::TORRENTS_PROPERTIES,
            Params::new().with("hash", hash),
            PROPERTIES,
        )
        .await
    }

    /// Trackers of one torrent, including the DHT, PeX and LSD pseudo trackers.
    pub async fn trackers(&self, hash: &str) -> Result<Vec<Tracker>, QbtError> {
        self.get_json(
            endpoints::TORRENTS_TRACKERS,
            Params::new().with("hash", hash),
            TRACKERS,
        )
        .await
    }

    /// Web seed URLs of one torrent.
    pub async fn web_seeds(&self, hash: &str) -> Result<Vec<String>, QbtError> {
        let seeds: Vec<WebSeed> = self
            .get_json(
                endpoints::TORRENTS_WEBSEEDS,
                Params::new().with("hash", hash),
                WEB_SEEDS,
            )
            .await?;
        Ok(seeds.into_iter().map(|seed| seed.url).collect())
    }

    /// Files of one torrent; every file when `indexes` is empty.
    pub async fn contents(
        &self,
        hash: &str,
        indexes: &[i64],
    ) -> Result<Vec<TorrentContent>, QbtError> {
        let mut params = Params::new().with("hash", hash);
        if !indexes.is_empty() {
            params.push("indexes", index_list(indexes));
        }
        self.get_json(endpoints::TORRENTS_FILES, params, CONTENTS)
            .await
    }

    /// Per-piece state: 0 not downloaded, 1 downloading, 2 downloaded.
    pub async fn piece_states(&self, hash: &str) -> Result<Vec<u8>, QbtError> {
        self.get_json(
            endpoints::TORRENTS_PIECE_STATES,
            Params::new().with("hash", hash),
            PIECE_STATES,
        )
        .await
    }

    /// Per-piece hashes.
    pub async fn piece_hashes(&self, hash: &str) -> Result<Vec<String>, QbtError> {
        self.get_json(
            endpoints::TORRENTS_PIECE_HASHES,
            Params::new().with("hash", hash),
            PIECE_HASHES,
        )
        .await
    }

    /// Pauses torrents. `all` selects every torrent.
    pub async fn pause<S: AsRef<str>>(&self, hashes: &[S]) -> Result<(), QbtError> {
        self.post_hashes(endpoints::TORRENTS_PAUSE, hashes, PAUSE)
            .await
    }

    /// Resumes torrents.
    pub async fn resume<S: AsRef<str>>(&self, hashes: &[S]) -> Result<(), QbtError> {
        self.post_hashes(endpoints::TORRENTS_RESUME, hashes, RESUME)
            .await
    }

    /// Removes torrents, optionally with their downloaded data.
    pub async fn delete<S: AsRef<str>>(
        &self,
        hashes: &[S],
        delete_files: bool,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_DELETE,
            hash_params(hashes).with("deleteFiles", delete_files),
            DELETE,
        )
        .await?;
        Ok(())
    }

    /// Rechecks torrent data.
    pub async fn recheck<S: AsRef<str>>(&self, hashes: &[S]) -> Result<(), QbtError> {
        self.post_hashes(endpoints::TORRENTS_RECHECK, hashes, RECHECK)
            .await
    }

    /// Reannounces torrents to their trackers.
    pub async fn reannounce<S: AsRef<str>>(&self, hashes: &[S]) -> Result<(), QbtError> {
        self.post_hashes(endpoints::TORRENTS_REANNOUNCE, hashes, REANNOUNCE)
            .await
    }

    /// The `.torrent` file of a torrent.
    pub async fn export(&self, hash: &str) -> Result<Vec<u8>, QbtError> {
        let response = self
            .get(
                endpoints::TORRENTS_EXPORT,
                Params::new().with("hash", hash),
                EXPORT,
            )
            .await?;
        Ok(response.body)
    }

    /// Writes the `.torrent` file of a torrent to `path`.
    ///
    /// Without `overwrite` an existing file is an error and is left untouched.
    pub async fn export_to_file(
        &self,
        hash: &str,
        path: impl AsRef<Path>,
        overwrite: bool,
    ) -> Result<(), QbtError> {
        let path = path.as_ref();
        let content = self.export(hash).await?;

        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        let fs_error = |e: std::io::Error| QbtError::FileSystem(format!("{}: {e}", path.display()));
        let mut file = options.open(path).await.map_err(fs_error)?;
        file.write_all(&content).await.map_err(fs_error)?;
        file.flush().await.map_err(fs_error)?;

        debug!(hash, path = %path.display(), bytes = content.len(), "exported torrent");
        Ok(())
    }

    /// Adds torrents from URLs and local files.
    ///
    /// Fails with [`QbtError::InvalidInput`] before sending anything when
    /// `params` names neither.
    pub async fn add(&self, params: &AddTorrentParams) -> Result<(), QbtError> {
        let form = params::add_torrent_form(params).await?;
        debug!(urls = params.urls.len(), files = form.files.len(), "adding torrents");
        self.call(ApiRequest::multipart(endpoints::TORRENTS_ADD, form), ADD)
            .await?;
        Ok(())
    }

    /// Adds trackers to a torrent.
    pub async fn add_trackers<S: AsRef<str>>(
        &self,
        hash: &str,
        urls: &[S],
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_ADD_TRACKERS,
            Params::new()
                .with("hash", hash)
                .with("urls", join_list(urls, '\n')),
            ADD_TRACKERS,
        )
        .await?;
        Ok(())
    }

    /// Replaces a tracker URL of a torrent.
    pub async fn edit_tracker(
        &self,
        hash: &str,
        orig_url: &str,
        new_url: &str,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_EDIT_TRACKER,
            Params::new()
                .with("hash", hash)
                .with("origUrl", orig_url)
                .with("newUrl", new_url),
            EDIT_TRACKER,
        )
        .await?;
        Ok(())
    }

    /// Removes trackers from a torrent.
    pub async fn remove_trackers<S: AsRef<str>>(
        &self,
        hash: &str,
        urls: &[S],
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_REMOVE_TRACKERS,
            Params::new()
                .with("hash", hash)
                .with("urls", join_list(urls, '|')),
            REMOVE_TRACKERS,
        )
        .await?;
        Ok(())
    }

    /// Connects torrents to extra peers.
    pub async fn add_peers<S: AsRef<str>>(
        &self,
        hashes: &[S],
        peers: &[Peer],
    ) -> Result<(), QbtError> {
        let peers: Vec<String> = peers.iter().map(Peer::to_string).collect();
        self.post(
            endpoints::TORRENTS_ADD_PEERS,
            hash_params(hashes).with("peers", join_list(&peers, '|')),
            ADD_PEERS,
        )
        .await?;
        Ok(())
    }

    /// Moves torrents one step up the queue.
    pub async fn increase_priority<S: AsRef<str>>(&self, hashes: &[S]) -> Result<(), QbtError> {
        self.post_hashes(endpoints::TORRENTS_INCREASE_PRIO, hashes, INCREASE_PRIO)
            .await
    }

    /// Moves torrents one step down the queue.
    pub async fn decrease_priority<S: AsRef<str>>(&self, hashes: &[S]) -> Result<(), QbtError> {
        self.post_hashes(endpoints::TORRENTS_DECREASE_PRIO, hashes, DECREASE_PRIO)
            .await
    }

    /// Moves torrents to the top of the queue.
    pub async fn top_priority<S: AsRef<str>>(&self, hashes: &[S]) -> Result<(), QbtError> {
        self.post_hashes(endpoints::TORRENTS_TOP_PRIO, hashes, TOP_PRIO)
            .await
    }

    /// Moves torrents to the bottom of the queue.
    pub async fn bottom_priority<S: AsRef<str>>(&self, hashes: &[S]) -> Result<(), QbtError> {
        self.post_hashes(endpoints::TORRENTS_BOTTOM_PRIO, hashes, BOTTOM_PRIO)
            .await
    }

    /// Sets the priority of files, identified by [`TorrentContent::index`].
    pub async fn set_file_priority(
        &self,
        hash: &str,
        indexes: &[i64],
        priority: i64,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_FILE_PRIO,
            Params::new()
                .with("hash", hash)
                .with("id", index_list(indexes))
                .with("priority", priority),
            FILE_PRIO,
        )
        .await?;
        Ok(())
    }

    /// Download limits keyed by hash.
    pub async fn download_limits<S: AsRef<str>>(
        &self,
        hashes: &[S],
    ) -> Result<BTreeMap<String, i64>, QbtError> {
        self.post_json(endpoints::TORRENTS_DOWNLOAD_LIMIT, hash_params(hashes), DOWNLOAD_LIMIT)
            .await
    }

    /// Upload limits keyed by hash.
    pub async fn upload_limits<S: AsRef<str>>(
        &self,
        hashes: &[S],
    ) -> Result<BTreeMap<String, i64>, QbtError> {
        self.post_json(endpoints::TORRENTS_UPLOAD_LIMIT, hash_params(hashes), UPLOAD_LIMIT)
            .await
    }

    /// Sets the download limit of torrents in bytes per second.
    pub async fn set_download_limit<S: AsRef<str>>(
        &self,
        hashes: &[S],
        limit: i64,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_SET_DOWNLOAD_LIMIT,
            hash_params(hashes).with("limit", limit),
            SET_DOWNLOAD_LIMIT,
        )
        .await?;
        Ok(())
    }

    /// Sets the upload limit of torrents in bytes per second.
    pub async fn set_upload_limit<S: AsRef<str>>(
        &self,
        hashes: &[S],
        limit: i64,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_SET_UPLOAD_LIMIT,
            hash_params(hashes).with("limit", limit),
            SET_UPLOAD_LIMIT,
        )
        .await?;
        Ok(())
    }

    /// Sets share limits. `-2` uses the global limit, `-1` means no limit.
    pub async fn set_share_limits<S: AsRef<str>>(
        &self,
        hashes: &[S],
        ratio_limit: f64,
        seeding_time_limit: i64,
        inactive_seeding_time_limit: i64,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_SET_SHARE_LIMITS,
            hash_params(hashes)
                .with("ratioLimit", ratio_limit)
                .with("seedingTimeLimit", seeding_time_limit)
                .with("inactiveSeedingTimeLimit", inactive_seeding_time_limit),
            SHARE_LIMITS,
        )
        .await?;
        Ok(())
    }

    /// Moves torrent data to `location`.
    pub async fn set_location<S: AsRef<str>>(
        &self,
        hashes: &[S],
        location: &str,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_SET_LOCATION,
            hash_params(hashes).with("location", location),
            SET_LOCATION,
        )
        .await?;
        Ok(())
    }

    /// Renames a torrent.
    pub async fn rename(&self, hash: &str, name: &str) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_RENAME,
            Params::new().with("hash", hash).with("name", name),
            RENAME,
        )
        .await?;
        Ok(())
    }

    /// Assigns torrents to a category; an empty name clears it.
    pub async fn set_category<S: AsRef<str>>(
        &self,
        hashes: &[S],
        category: &str,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_SET_CATEGORY,
            hash_params(hashes).with("category", category),
            SET_CATEGORY,
        )
        .await?;
        Ok(())
    }

    /// Adds tags to torrents, creating missing tags.
    pub async fn add_tags<S: AsRef<str>, U: AsRef<str>>(
        &self,
        hashes: &[S],
        tags: &[U],
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_ADD_TAGS,
            hash_params(hashes).with("tags", join_list(tags, ',')),
            ADD_TAGS,
        )
        .await?;
        Ok(())
    }

    /// Removes tags from torrents; no tags removes every tag.
    pub async fn remove_tags<S: AsRef<str>, U: AsRef<str>>(
        &self,
        hashes: &[S],
        tags: &[U],
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_REMOVE_TAGS,
            hash_params(hashes).with("tags", join_list(tags, ',')),
            REMOVE_TAGS,
        )
        .await?;
        Ok(())
    }

    /// Every category.
    pub async fn categories(&self) -> Result<Vec<Category>, QbtError> {
        let response = self
            .get(endpoints::TORRENTS_CATEGORIES, Params::new(), CATEGORIES)
            .await?;
        Ok(keyed::from_slice(&response.body)?)
    }

    /// Creates a category.
    pub async fn create_category(&self, category: &Category) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_CREATE_CATEGORY,
            category_params(category),
            CREATE_CATEGORY,
        )
        .await?;
        Ok(())
    }

    /// Changes the save path of an existing category.
    pub async fn edit_category(&self, category: &Category) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_EDIT_CATEGORY,
            category_params(category),
            EDIT_CATEGORY,
        )
        .await?;
        Ok(())
    }

    /// Removes categories by name.
    pub async fn remove_categories<S: AsRef<str>>(&self, names: &[S]) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_REMOVE_CATEGORIES,
            Params::new().with("categories", join_list(names, '\n')),
            REMOVE_CATEGORIES,
        )
        .await?;
        Ok(())
    }

    /// Every tag.
    pub async fn tags(&self) -> Result<Vec<String>, QbtError> {
        self.get_json(endpoints::TORRENTS_TAGS, Params::new(), TAGS)
            .await
    }

    /// Creates tags.
    pub async fn create_tags<S: AsRef<str>>(&self, tags: &[S]) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_CREATE_TAGS,
            Params::new().with("tags", join_list(tags, ',')),
            CREATE_TAGS,
        )
        .await?;
        Ok(())
    }

    /// Deletes tags.
    pub async fn delete_tags<S: AsRef<str>>(&self, tags: &[S]) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_DELETE_TAGS,
            Params::new().with("tags", join_list(tags, ',')),
            DELETE_TAGS,
        )
        .await?;
        Ok(())
    }

    /// Enables or disables automatic torrent management.
    pub async fn set_auto_management<S: AsRef<str>>(
        &self,
        hashes: &[S],
        enable: bool,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_SET_AUTO_MANAGEMENT,
            hash_params(hashes).with("enable", enable),
            AUTO_MANAGEMENT,
        )
        .await?;
        Ok(())
    }

    /// Flips sequential download.
    pub async fn toggle_sequential_download<S: AsRef<str>>(
        &self,
        hashes: &[S],
    ) -> Result<(), QbtError> {
        self.post_hashes(endpoints::TORRENTS_TOGGLE_SEQUENTIAL_DOWNLOAD, hashes, SEQUENTIAL)
            .await
    }

    /// Flips first and last piece priority.
    pub async fn toggle_first_last_piece_prio<S: AsRef<str>>(
        &self,
        hashes: &[S],
    ) -> Result<(), QbtError> {
        self.post_hashes(
            endpoints::TORRENTS_TOGGLE_FIRST_LAST_PIECE_PRIO,
            hashes,
            FIRST_LAST_PRIO,
        )
        .await
    }

    /// Sets force start.
    pub async fn set_force_start<S: AsRef<str>>(
        &self,
        hashes: &[S],
        value: bool,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_SET_FORCE_START,
            hash_params(hashes).with("value", value),
            FORCE_START,
        )
        .await?;
        Ok(())
    }

    /// Sets super seeding.
    pub async fn set_super_seeding<S: AsRef<str>>(
        &self,
        hashes: &[S],
        value: bool,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_SET_SUPER_SEEDING,
            hash_params(hashes).with("value", value),
            SUPER_SEEDING,
        )
        .await?;
        Ok(())
    }

    /// Renames a file inside a torrent.
    pub async fn rename_file(
        &self,
        hash: &str,
        old_path: &str,
        new_path: &str,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_RENAME_FILE,
            rename_params(hash, old_path, new_path),
            RENAME_FILE,
        )
        .await?;
        Ok(())
    }

    /// Renames a folder inside a torrent.
    pub async fn rename_folder(
        &self,
        hash: &str,
        old_path: &str,
        new_path: &str,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::TORRENTS_RENAME_FOLDER,
            rename_params(hash, old_path, new_path),
            RENAME_FOLDER,
        )
        .await?;
        Ok(())
    }
}

fn category_params(category: &Category) -> Params {
    Params::new()
        .with("category", &category.name)
        .with("savePath", &category.save_path)
}

fn rename_params(hash: &str, old_path: &str, new_path: &str) -> Params {
    Params::new()
        .with("hash", hash)
        .with("oldPath", old_path)
        .with("newPath", new_path)
}
