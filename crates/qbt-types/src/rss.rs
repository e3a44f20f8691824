//! RSS feeds, folders and auto-download rules.
//!
//! `rss/items` returns the whole RSS hierarchy as one untyped nested object:
//!
//! ```json
//! {"Folder1": {"Feed1": {"uid": "u1", "url": "http://x"}},
//!  "Feed2": {"uid": "u2", "url": "http://y"}}
//! ```
//!
//! [`RssRoot::from_slice`] turns it into a tree of [`RssNode`]s plus flat
//! indices of every feed and folder. The flat indices hold the same shared
//! records as the tree, so a change made through one view is visible through
//! the other.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::decode::Keyed;

/// Separator between the segments of an RSS item path.
///
/// The daemon addresses items as `Folder\Sub\Feed` on every platform.
pub const PATH_SEPARATOR: char = '\\';

/// A record shared between the RSS tree and the flat indices.
pub type Shared<T> = Arc<RwLock<T>>;

/// Joins path segments with [`PATH_SEPARATOR`].
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    crate::decode::join_list(segments, PATH_SEPARATOR)
}

/// Splits an item path into its segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split(PATH_SEPARATOR).filter(|s| !s.is_empty()).collect()
}

/// Read access that survives a poisoned lock; the records hold no invariants a
/// panicking writer could break.
pub fn read<T>(shared: &Shared<T>) -> RwLockReadGuard<'_, T> {
    shared.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write access, see [`read`].
pub fn write<T>(shared: &Shared<T>) -> RwLockWriteGuard<'_, T> {
    shared.write().unwrap_or_else(PoisonError::into_inner)
}

/// A feed and the articles fetched from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RssFeed {
    /// Item name, the last path segment.
    #[serde(skip)]
    pub name: String,
    /// Full item path joined with [`PATH_SEPARATOR`].
    #[serde(skip)]
    pub path: String,
    /// Daemon assigned identifier.
    #[serde(default)]
    pub uid: String,
    /// Feed URL.
    #[serde(default)]
    pub url: String,
    /// Channel title, only present when requested with data.
    #[serde(default)]
    pub title: String,
    /// Whether the last refresh failed.
    #[serde(rename = "hasError", default)]
    pub has_error: bool,
    /// Whether a refresh is in progress.
    #[serde(rename = "isLoading", default)]
    pub is_loading: bool,
    /// Raw `lastBuildDate` of the channel.
    #[serde(rename = "lastBuildDate", default)]
    pub last_build_date: String,
    /// Articles, only present when requested with data.
    #[serde(default)]
    pub articles: Vec<RssArticle>,
}

impl RssFeed {
    /// Parses `lastBuildDate`, which feeds publish in RFC 2822 form.
    pub fn last_build_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(self.last_build_date.trim()).ok()
    }
}

/// A folder grouping feeds and other folders.
#[derive(Debug, Default)]
pub struct RssFolder {
    /// Item name, the last path segment.
    pub name: String,
    /// Full item path joined with [`PATH_SEPARATOR`].
    pub path: String,
    /// Children in document order.
    pub children: Vec<RssNode>,
}

/// A node of the RSS tree.
#[derive(Debug, Clone)]
pub enum RssNode {
    /// A folder.
    Folder(Shared<RssFolder>),
    /// A feed.
    Feed(Shared<RssFeed>),
}

impl RssNode {
    /// Item name.
    pub fn name(&self) -> String {
        match self {
            Self::Folder(folder) => read(folder).name.clone(),
            Self::Feed(feed) => read(feed).name.clone(),
        }
    }

    /// Full item path.
    pub fn path(&self) -> String {
        match self {
            Self::Folder(folder) => read(folder).path.clone(),
            Self::Feed(feed) => read(feed).path.clone(),
        }
    }

    /// Whether this node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    /// The shared feed record, if this is a feed.
    pub fn as_feed(&self) -> Option<&Shared<RssFeed>> {
        match self {
            Self::Feed(feed) => Some(feed),
            Self::Folder(_) => None,
        }
    }

    /// The shared folder record, if this is a folder.
    pub fn as_folder(&self) -> Option<&Shared<RssFolder>> {
        match self {
            Self::Folder(folder) => Some(folder),
            Self::Feed(_) => None,
        }
    }
}

/// The decoded RSS hierarchy.
#[derive(Debug, Clone, Default)]
pub struct RssRoot {
    /// Top level items in document order.
    pub children: Vec<RssNode>,
    /// Every feed of the tree, in pre-order.
    pub feeds: Vec<Shared<RssFeed>>,
    /// Every folder of the tree, in pre-order.
    pub folders: Vec<Shared<RssFolder>>,
}

/// How a JSON value of the RSS hierarchy is interpreted.
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    /// An object with string `uid` and `url` fields.
    Feed(&'a Map<String, Value>),
    /// Any other object.
    Folder(&'a Map<String, Value>),
}

/// Classifies a value of the RSS hierarchy. Non-objects are not items.
pub fn classify(value: &Value) -> Option<NodeKind<'_>> {
    let object = value.as_object()?;
    let has_string = |key: &str| object.get(key).is_some_and(Value::is_string);
    if has_string("uid") && has_string("url") {
        Some(NodeKind::Feed(object))
    } else {
        Some(NodeKind::Folder(object))
    }
}

impl RssRoot {
    /// Decodes an `rss/items` response body.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let items: Map<String, Value> = serde_json::from_slice(bytes)?;
        Self::from_map(&items)
    }

    /// Builds the tree from an already decoded top level object.
    pub fn from_map(items: &Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut root = Self::default();
        build_tree(items, 0, &[], &mut root, None)?;
        Ok(root)
    }

    /// Every node reachable from the root, in pre-order.
    pub fn walk(&self) -> Vec<RssNode> {
        fn visit(nodes: &[RssNode], out: &mut Vec<RssNode>) {
            for node in nodes {
                out.push(node.clone());
                if let RssNode::Folder(folder) = node {
                    visit(&read(folder).children, out);
                }
            }
        }

        let mut out = Vec::new();
        visit(&self.children, &mut out);
        out
    }

    /// Finds the feed with the given full path.
    pub fn feed(&self, path: &str) -> Option<Shared<RssFeed>> {
        self.feeds.iter().find(|f| read(f).path == path).cloned()
    }

    /// Finds the folder with the given full path.
    pub fn folder(&self, path: &str) -> Option<Shared<RssFolder>> {
        self.folders.iter().find(|f| read(f).path == path).cloned()
    }
}

fn build_tree(
    items: &Map<String, Value>,
    depth: usize,
    path: &[String],
    root: &mut RssRoot,
    parent: Option<&Shared<RssFolder>>,
) -> Result<(), serde_json::Error> {
    for (key, value) in items {
        let mut item_path = path.to_vec();
        item_path.push(key.clone());

        let node = match classify(value) {
            Some(NodeKind::Feed(_)) => {
                let mut feed = RssFeed::deserialize(value)?;
                feed.name = key.clone();
                feed.path = join_path(&item_path);
                let feed = Arc::new(RwLock::new(feed));
                root.feeds.push(Arc::clone(&feed));
                RssNode::Feed(feed)
            }
            Some(NodeKind::Folder(contents)) => {
                let folder = Arc::new(RwLock::new(RssFolder {
                    name: key.clone(),
                    path: join_path(&item_path),
                    children: Vec::new(),
                }));
                root.folders.push(Arc::clone(&folder));
                build_tree(contents, depth + 1, &item_path, root, Some(&folder))?;
                RssNode::Folder(folder)
            }
            None => {
                debug!(%key, depth, "skipping RSS entry that is not an object");
                continue;
            }
        };

        match parent {
            Some(folder) => write(folder).children.push(node),
            None => root.children.push(node),
        }
    }
    Ok(())
}

/// An RSS article.
///
/// Feeds may carry keys beyond the well-known ones; they are kept in
/// [`RssArticle::extra`] and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RssArticle {
    /// Article identifier, used by `rss/markAsRead`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Article link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Article title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Torrent or magnet URL.
    #[serde(rename = "torrentURL", default, skip_serializing_if = "Option::is_none")]
    pub torrent_url: Option<String>,
    /// Author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publication date as published by the feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Every other key of the article.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An RSS auto-download rule.
///
/// The daemon keys rules by name; the name is hoisted into [`AutoDownloadRule::name`]
/// on decode and left out of the definition sent to `rss/setRule`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct AutoDownloadRule {
    /// Rule name.
    #[serde(skip)]
    pub name: String,
    pub enabled: bool,
    pub must_contain: String,
    pub must_not_contain: String,
    pub use_regex: bool,
    pub episode_filter: String,
    pub smart_filter: bool,
    pub previously_matched_episodes: Vec<String>,
    /// URLs of the feeds the rule applies to.
    pub affected_feeds: Vec<String>,
    pub ignore_days: i64,
    pub last_match: String,
    pub add_paused: Option<bool>,
    pub assigned_category: String,
    pub save_path: String,
}

impl Keyed for AutoDownloadRule {
    fn set_key(&mut self, key: String) {
        self.name = key;
    }
}
