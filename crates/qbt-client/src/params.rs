//! Request parameters and conversions from the typed parameter structs.

use std::path::Path;

use qbt_types::decode::join_list;
use qbt_types::{AddTorrentParams, QbtError, TorrentListParams};

use crate::transport::{FilePart, MultipartForm};

/// Ordered name/value pairs sent as a query string or form body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// No parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn with(mut self, name: &str, value: impl ToString) -> Self {
        self.push(name, value);
        self
    }

    /// Appends a parameter when `value` is set.
    pub fn with_opt<V: ToString>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    /// Appends a parameter.
    pub fn push(&mut self, name: &str, value: impl ToString) {
        self.0.push((name.to_owned(), value.to_string()));
    }

    /// First value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consumes the parameters into their pairs.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0
    }
}

/// Hash lists are pipe separated.
pub(crate) fn hashes<S: AsRef<str>>(hashes: &[S]) -> String {
    join_list(hashes, '|')
}

pub(crate) fn torrent_list(params: &TorrentListParams) -> Params {
    let mut out = Params::new()
        .with_opt("filter", params.filter.as_deref())
        .with_opt("sort", params.sort.as_deref());

    // An empty value selects torrents without a category or tag.
    if params.without_category {
        out.push("category", "");
    } else if let Some(category) = &params.category {
        out.push("category", category);
    }
    if params.without_tag {
        out.push("tag", "");
    } else if let Some(tag) = &params.tag {
        out.push("tag", tag);
    }

    if params.reverse {
        out.push("reverse", true);
    }
    if params.limit > 0 {
        out.push("limit", params.limit);
    }
    if params.offset != 0 {
        out.push("offset", params.offset);
    }
    if !params.hashes.is_empty() {
        out.push("hashes", hashes(&params.hashes));
    }
    out
}

/// Builds the `torrents/add` body, reading every torrent file up front.
pub(crate) async fn add_torrent_form(params: &AddTorrentParams) -> Result<MultipartForm, QbtError> {
    if !params.has_source() {
        return Err(QbtError::InvalidInput(
            "at least one url or torrent file is required".into(),
        ));
    }

    let mut files = Vec::with_capacity(params.files.len());
    for path in &params.files {
        files.push(read_torrent_file(path).await?);
    }

    let mut fields = Params::new();
    if !params.urls.is_empty() {
        fields.push("urls", params.urls.join("\r\n"));
    }
    let fields = fields
        .with_opt("savepath", params.save_path.as_deref())
        .with_opt("cookie", params.cookie.as_deref())
        .with_opt("category", params.category.as_deref())
        .with_opt(
            "tags",
            (!params.tags.is_empty()).then(|| join_list(&params.tags, ',')),
        )
        .with("skip_checking", params.skip_checking)
        .with("paused", params.paused)
        .with("stopped", params.paused)
        .with_opt("root_folder", params.root_folder)
        .with_opt("rename", params.rename.as_deref())
        .with_opt("upLimit", params.upload_limit)
        .with_opt("dlLimit", params.download_limit)
        .with_opt("ratioLimit", params.ratio_limit)
        .with_opt("seedingTimeLimit", params.seeding_time_limit)
        .with("autoTMM", params.auto_tmm)
        .with("sequentialDownload", params.sequential_download)
        .with("firstLastPiecePrio", params.first_last_piece_prio)
        .with("addToTopOfQueue", params.add_to_top_of_queue)
        .with_opt("stopCondition", params.stop_condition.as_deref())
        .with_opt("contentLayout", params.content_layout.map(|l| l.as_str()));

    Ok(MultipartForm { fields, files })
}

async fn read_torrent_file(path: &Path) -> Result<FilePart, QbtError> {
    let content = tokio::fs::read(path)
        .await
        .map_err(|e| QbtError::FileSystem(format!("{}: {e}", path.display())))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file.torrent".to_owned());
    Ok(FilePart {
        field: "torrents".into(),
        file_name,
        mime: "application/x-bittorrent".into(),
        content,
    })
}
