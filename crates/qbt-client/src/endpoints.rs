//! Endpoint paths below `/api/v2/`.

pub(crate) const AUTH_LOGIN: &str = "auth/login";
pub(crate) const AUTH_LOGOUT: &str = "auth/logout";

pub(crate) const APP_VERSION: &str = "app/version";
pub(crate) const APP_WEBAPI_VERSION: &str = "app/webapiVersion";
pub(crate) const APP_BUILD_INFO: &str = "app/buildInfo";
pub(crate) const APP_SHUTDOWN: &str = "app/shutdown";
pub(crate) const APP_PREFERENCES: &str = "app/preferences";
pub(crate) const APP_SET_PREFERENCES: &str = "app/setPreferences";
pub(crate) const APP_DEFAULT_SAVE_PATH: &str = "app/defaultSavePath";

pub(crate) const LOG_MAIN: &str = "log/main";
pub(crate) const LOG_PEERS: &str = "log/peers";

pub(crate) const SYNC_MAIN_DATA: &str = "sync/maindata";
pub(crate) const SYNC_TORRENT_PEERS: &str = "sync/torrentPeers";

pub(crate) const TRANSFER_INFO: &str = "transfer/info";
pub(crate) const TRANSFER_SPEED_LIMITS_MODE: &str = "transfer/speedLimitsMode";
pub(crate) const TRANSFER_TOGGLE_SPEED_LIMITS_MODE: &str = "transfer/toggleSpeedLimitsMode";
pub(crate) const TRANSFER_DOWNLOAD_LIMIT: &str = "transfer/downloadLimit";
pub(crate) const TRANSFER_SET_DOWNLOAD_LIMIT: &str = "transfer/setDownloadLimit";
pub(crate) const TRANSFER_UPLOAD_LIMIT: &str = "transfer/uploadLimit";
pub(crate) const TRANSFER_SET_UPLOAD_LIMIT: &str = "transfer/setUploadLimit";
pub(crate) const TRANSFER_BAN_PEERS: &str = "transfer/banPeers";

pub(crate) const TORRENTS_INFO: &str = "torrents/info";
pub(crate) const TORRENTS_PROPERTIES: &str = "torrents/properties";
pub(crate) const TORRENTS_TRACKERS: &str = "torrents/trackers";
pub(crate) const TORRENTS_WEBSEEDS: &str = "torrents/webseeds";
pub(crate) const TORRENTS_FILES: &str = "torrents/files";
pub(crate) const TORRENTS_PIECE_STATES: &str = "torrents/pieceStates";
pub(crate) const TORRENTS_PIECE_HASHES: &str = "torrents/pieceHashes";
pub(crate) const TORRENTS_PAUSE: &str = "torrents/pause";
pub(crate) const TORRENTS_RESUME: &str = "torrents/resume";
pub(crate) const TORRENTS_DELETE: &str = "torrents/delete";
pub(crate) const TORRENTS_RECHECK: &str = "torrents/recheck";
pub(crate) const TORRENTS_REANNOUNCE: &str = "torrents/reannounce";
pub(crate) const TORRENTS_EXPORT: &str = "torrents/export";
pub(crate) const TORRENTS_ADD: &str = "torrents/add";
pub(crate) const TORRENTS_ADD_TRACKERS: &str = "torrents/addTrackers";
pub(crate) const TORRENTS_EDIT_TRACKER: &str = "torrents/editTracker";
pub(crate) const TORRENTS_REMOVE_TRACKERS: &str = "torrents/removeTrackers";
pub(crate) const TORRENTS_ADD_PEERS: &str = "torrents/addPeers";
pub(crate) const TORRENTS_INCREASE_PRIO: &str = "torrents/increasePrio";
pub(crate) const TORRENTS_DECREASE_PRIO: &str = "torrents/decreasePrio";
pub(crate) const TORRENTS_TOP_PRIO: &str = "torrents/topPrio";
pub(crate) const TORRENTS_BOTTOM_PRIO: &str = "torrents/bottomPrio";
pub(crate) const TORRENTS_FILE_PRIO: &str = "torrents/filePrio";
pub(crate) const TORRENTS_DOWNLOAD_LIMIT: &str = "torrents/downloadLimit";
pub(crate) const TORRENTS_SET_DOWNLOAD_LIMIT: &str = "torrents/setDownloadLimit";
pub(crate) const TORRENTS_UPLOAD_LIMIT: &str = "torrents/uploadLimit";
pub(crate) const TORRENTS_SET_UPLOAD_LIMIT: &str = "torrents/setUploadLimit";
pub(crate) const TORRENTS_SET_SHARE_LIMITS: &str = "torrents/setShareLimits";
pub(crate) const TORRENTS_SET_LOCATION: &str = "torrents/setLocation";
pub(crate) const TORRENTS_RENAME: &str = "torrents/rename";
pub(crate) const TORRENTS_SET_CATEGORY: &str = "torrents/setCategory";
pub(crate) const TORRENTS_CATEGORIES: &str = "torrents/categories";
pub(crate) const TORRENTS_CREATE_CATEGORY: &str = "torrents/createCategory";
pub(crate) const TORRENTS_EDIT_CATEGORY: &str = "torrents/editCategory";
pub(crate) const TORRENTS_REMOVE_CATEGORIES: &str = "torrents/removeCategories";
pub(crate) const TORRENTS_ADD_TAGS: &str = "torrents/addTags";
pub(crate) const TORRENTS_REMOVE_TAGS: &str = "torrents/removeTags";
pub(crate) const TORRENTS_TAGS: &str = "torrents/tags";
pub(crate) const TORRENTS_CREATE_TAGS: &str = "torrents/createTags";
pub(crate) const TORRENTS_DELETE_TAGS: &str = "torrents/deleteTags";
pub(crate) const TORRENTS_SET_AUTO_MANAGEMENT: &str = "torrents/setAutoManagement";
pub(crate) const TORRENTS_TOGGLE_SEQUENTIAL_DOWNLOAD: &str = "torrents/toggleSequentialDownload";
pub(crate) const TORRENTS_TOGGLE_FIRST_LAST_PIECE_PRIO: &str = "torrents/toggleFirstLastPiecePrio";
pub(crate) const TORRENTS_SET_FORCE_START: &str = "torrents/setForceStart";
pub(crate) const TORRENTS_SET_SUPER_SEEDING: &str = "torrents/setSuperSeeding";
pub(crate) const TORRENTS_RENAME_FILE: &str = "torrents/renameFile";
pub(crate) const TORRENTS_RENAME_FOLDER: &str = "torrents/renameFolder";

pub(crate) const RSS_ADD_FOLDER: &str = "rss/addFolder";
pub(crate) const RSS_ADD_FEED: &str = "rss/addFeed";
pub(crate) const RSS_REMOVE_ITEM: &str = "rss/removeItem";
pub(crate) const RSS_MOVE_ITEM: &str = "rss/moveItem";
pub(crate) const RSS_ITEMS: &str = "rss/items";
pub(crate) const RSS_MARK_AS_READ: &str = "rss/markAsRead";
pub(crate) const RSS_REFRESH_ITEM: &str = "rss/refreshItem";
pub(crate) const RSS_SET_RULE: &str = "rss/setRule";
pub(crate) const RSS_RENAME_RULE: &str = "rss/renameRule";
pub(crate) const RSS_REMOVE_RULE: &str = "rss/removeRule";
pub(crate) const RSS_RULES: &str = "rss/rules";
pub(crate) const RSS_MATCHING_ARTICLES: &str = "rss/matchingArticles";

pub(crate) const SEARCH_START: &str = "search/start";
pub(crate) const SEARCH_STOP: &str = "search/stop";
pub(crate) const SEARCH_STATUS: &str = "search/status";
pub(crate) const SEARCH_RESULTS: &str = "search/results";
pub(crate) const SEARCH_DELETE: &str = "search/delete";
pub(crate) const SEARCH_PLUGINS: &str = "search/plugins";
pub(crate) const SEARCH_INSTALL_PLUGIN: &str = "search/installPlugin";
pub(crate) const SEARCH_UNINSTALL_PLUGIN: &str = "search/uninstallPlugin";
pub(crate) const SEARCH_ENABLE_PLUGIN: &str = "search/enablePlugin";
pub(crate) const SEARCH_UPDATE_PLUGINS: &str = "search/updatePlugins";
