//! `rss/*`: feeds, folders and auto-download rules.
//!
//! Item paths use a backslash between segments, e.g. `Folder1\Feed1`. Build
//! them with [`qbt_types::rss::join_path`].

use std::collections::BTreeMap;

use tracing::debug;

use qbt_types::decode::keyed;
use qbt_types::{AutoDownloadRule, QbtError, RssRoot};

use crate::client::Session;
use crate::endpoints;
use crate::params::Params;
use crate::status::StatusRule::{self, Is, Not};
use crate::transport::Transport;

const ADD_FOLDER: &[StatusRule] = &[
    Is(409, "failed to add RSS folder"),
    Not(200, "add RSS folder failed"),
];
const ADD_FEED: &[StatusRule] = &[
    Is(409, "failed to add RSS feed"),
    Not(200, "add RSS feed failed"),
];
const REMOVE_ITEM: &[StatusRule] = &[
    Is(409, "failed to remove RSS item"),
    Not(200, "remove RSS item failed"),
];
const MOVE_ITEM: &[StatusRule] = &[
    Is(409, "failed to move RSS item"),
    Not(200, "move RSS item failed"),
];
const ITEMS: &[StatusRule] = &[Not(200, "get RSS items failed")];
const MARK_AS_READ: &[StatusRule] = &[Not(200, "mark RSS item as read failed")];
const REFRESH_ITEM: &[StatusRule] = &[Not(200, "refresh RSS item failed")];
const SET_RULE: &[StatusRule] = &[Not(200, "set RSS rule failed")];
const RENAME_RULE: &[StatusRule] = &[Not(200, "rename RSS rule failed")];
const REMOVE_RULE: &[StatusRule] = &[Not(200, "remove RSS rule failed")];
const RULES: &[StatusRule] = &[Not(200, "get RSS rules failed")];
const MATCHING_ARTICLES: &[StatusRule] = &[Not(200, "get RSS matching articles failed")];

impl<T: Transport> Session<T> {
    /// Creates a folder at `path`.
    pub async fn add_rss_folder(&self, path: &str) -> Result<(), QbtError> {
        self.post(
            endpoints::RSS_ADD_FOLDER,
            Params::new().with("path", path),
            ADD_FOLDER,
        )
        .await?;
        Ok(())
    }

    /// Subscribes to a feed. The item is named after the feed when `path` is empty.
    pub async fn add_rss_feed(&self, url: &str, path: &str) -> Result<(), QbtError> {
        self.post(
            endpoints::RSS_ADD_FEED,
            Params::new().with("url", url).with("path", path),
            ADD_FEED,
        )
        .await?;
        Ok(())
    }

    /// Removes a feed or a folder with everything in it.
    pub async fn remove_rss_item(&self, path: &str) -> Result<(), QbtError> {
        self.post(
            endpoints::RSS_REMOVE_ITEM,
            Params::new().with("path", path),
            REMOVE_ITEM,
        )
        .await?;
        Ok(())
    }

    /// Moves or renames an item.
    pub async fn move_rss_item(&self, item_path: &str, dest_path: &str) -> Result<(), QbtError> {
        self.post(
            endpoints::RSS_MOVE_ITEM,
            Params::new()
                .with("itemPath", item_path)
                .with("destPath", dest_path),
            MOVE_ITEM,
        )
        .await?;
        Ok(())
    }

    /// The whole RSS tree. With `with_data` feeds carry their articles.
    pub async fn rss_items(&self, with_data: bool) -> Result<RssRoot, QbtError> {
        let response = self
            .get(
                endpoints::RSS_ITEMS,
                Params::new().with("withData", with_data),
                ITEMS,
            )
            .await?;
        let root = RssRoot::from_slice(&response.body)?;
        debug!(
            feeds = root.feeds.len(),
            folders = root.folders.len(),
            "RSS tree built"
        );
        Ok(root)
    }

    /// Marks a whole item, or one article of a feed, as read.
    pub async fn mark_rss_as_read(
        &self,
        item_path: &str,
        article_id: Option<&str>,
    ) -> Result<(), QbtError> {
        self.post(
            endpoints::RSS_MARK_AS_READ,
            Params::new()
                .with("itemPath", item_path)
                .with_opt("articleId", article_id),
            MARK_AS_READ,
        )
        .await?;
        Ok(())
    }

    /// Asks the daemon to fetch an item again.
    pub async fn refresh_rss_item(&self, item_path: &str) -> Result<(), QbtError> {
        self.post(
            endpoints::RSS_REFRESH_ITEM,
            Params::new().with("itemPath", item_path),
            REFRESH_ITEM,
        )
        .await?;
        Ok(())
    }

    /// Creates or replaces the rule named [`AutoDownloadRule::name`].
    pub async fn set_rss_rule(&self, rule: &AutoDownloadRule) -> Result<(), QbtError> {
        if rule.name.is_empty() {
            return Err(QbtError::InvalidInput("RSS rule name is empty".into()));
        }
        let definition = serde_json::to_string(rule)?;
        self.post(
            endpoints::RSS_SET_RULE,
            Params::new()
                .with("ruleName", &rule.name)
                .with("ruleDef", definition),
            SET_RULE,
        )
        .await?;
        Ok(())
    }

    /// Renames a rule.
    pub async fn rename_rss_rule(&self, name: &str, new_name: &str) -> Result<(), QbtError> {
        self.post(
            endpoints::RSS_RENAME_RULE,
            Params::new()
                .with("ruleName", name)
                .with("newRuleName", new_name),
            RENAME_RULE,
        )
        .await?;
        Ok(())
    }

    /// Deletes a rule.
    pub async fn remove_rss_rule(&self, name: &str) -> Result<(), QbtError> {
        self.post(
            endpoints::RSS_REMOVE_RULE,
            Params::new().with("ruleName", name),
            REMOVE_RULE,
        )
        .await?;
        Ok(())
    }

    /// Every auto-download rule, named after its key.
    pub async fn rss_rules(&self) -> Result<Vec<AutoDownloadRule>, QbtError> {
        let response = self
            .get(endpoints::RSS_RULES, Params::new(), RULES)
            .await?;
        Ok(keyed::from_slice(&response.body)?)
    }

    /// Titles of the articles a rule matches, keyed by feed name.
    pub async fn rss_matching_articles(
        &self,
        rule_name: &str,
    ) -> Result<BTreeMap<String, Vec<String>>, QbtError> {
        self.get_json(
            endpoints::RSS_MATCHING_ARTICLES,
            Params::new().with("ruleName", rule_name),
            MATCHING_ARTICLES,
        )
        .await
    }
}
