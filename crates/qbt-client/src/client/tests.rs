//! Tests for the session and the endpoint bindings.

use std::collections::BTreeMap;

use qbt_types::rss::{self, join_path};
use qbt_types::{
    AddTorrentParams, AutoDownloadRule, Category, LogLevel, Peer, Preferences, QbtError,
    SpeedLimitsMode, SyncCursor, TorrentListParams,
};

use super::{Client, Session};
use crate::endpoints;
use crate::testutil::{
    MAIN_DATA_DELTA, MAIN_DATA_FULL, RSS_ITEMS, RSS_RULES, expect, ok, session, status,
};
use crate::transport::{ApiRequest, Method, MockTransport, RawResponse};

fn reason(err: &QbtError) -> &str {
    match err {
        QbtError::BadResponse { reason, .. } => reason,
        other => panic!("Expected BadResponse, got {other:?}"),
    }
}

// login / logout

#[tokio::test]
async fn test_login_success() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.method == Method::Post
                && req.endpoint == endpoints::AUTH_LOGIN
                && req.params.get("username") == Some("admin")
                && req.params.get("password") == Some("secret")
                && req
                    .headers
                    .contains(&("Referer".to_string(), "http://qbt:8080".to_string()))
                && req
                    .headers
                    .contains(&("Origin".to_string(), "http://qbt:8080".to_string()))
        })
        .times(1)
        .returning(|_| Ok(RawResponse::new(200, "Ok.").with_cookie("SID")));

    let client = Client::with_transport(mock, "http://qbt:8080/");
    let session = client.login("admin", "secret").await.unwrap();
    assert_eq!(session.base_url(), "http://qbt:8080");
}

#[tokio::test]
async fn test_login_without_cookie_fails() {
    let mut mock = MockTransport::new();
    expect(&mut mock, Method::Post, endpoints::AUTH_LOGIN, ok("Fails."));

    let err = Client::with_transport(mock, "http://qbt:8080")
        .login("admin", "wrong")
        .await
        .unwrap_err();
    assert_eq!(reason(&err), "login failed: no cookie returned");
}

#[tokio::test]
async fn test_login_banned() {
    let mut mock = MockTransport::new();
    expect(&mut mock, Method::Post, endpoints::AUTH_LOGIN, status(403));

    let err = Client::with_transport(mock, "http://qbt:8080")
        .login("admin", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(
        reason(&err),
        "user's IP is banned for too many failed login attempts"
    );
}

#[tokio::test]
async fn test_login_other_status() {
    let mut mock = MockTransport::new();
    expect(&mut mock, Method::Post, endpoints::AUTH_LOGIN, status(500));

    let err = Client::with_transport(mock, "http://qbt:8080")
        .login("admin", "secret")
        .await
        .unwrap_err();
    assert_eq!(reason(&err), "login failed");
}

#[tokio::test]
async fn test_login_network_error() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .returning(|_| Err(QbtError::Network("connection refused".into())));

    let err = Client::with_transport(mock, "http://qbt:8080")
        .login("admin", "secret")
        .await
        .unwrap_err();
    assert!(matches!(err, QbtError::Network(msg) if msg == "connection refused"));
}

#[tokio::test]
async fn test_logout_returns_client() {
    let mut mock = MockTransport::new();
    expect(&mut mock, Method::Post, endpoints::AUTH_LOGOUT, ok(""));

    let client = session(mock).logout().await.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

// status handling shared by every binding

#[tokio::test]
async fn test_rejected_cookie_is_unauthenticated() {
    let mut mock = MockTransport::new();
    expect(&mut mock, Method::Get, endpoints::APP_VERSION, status(403));

    let err = session(mock).version().await.unwrap_err();
    assert!(matches!(err, QbtError::Unauthenticated));
}

#[tokio::test]
async fn test_explicit_403_rule_wins() {
    let mut mock = MockTransport::new();
    expect(
        &mut mock,
        Method::Post,
        endpoints::TORRENTS_SET_LOCATION,
        status(403),
    );

    let err = session(mock)
        .set_location(&["abc"], "/readonly")
        .await
        .unwrap_err();
    assert_eq!(reason(&err), "user does not have write access to directory");
}

#[tokio::test]
async fn test_network_error_is_not_retried() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .times(1)
        .returning(|_| Err(QbtError::Network("timed out".into())));

    let err = session(mock).transfer_info().await.unwrap_err();
    assert!(matches!(err, QbtError::Network(_)));
}

#[tokio::test]
async fn test_decode_error_is_distinct() {
    let mut mock = MockTransport::new();
    expect(&mut mock, Method::Get, endpoints::SYNC_MAIN_DATA, ok("<html>"));

    let err = session(mock).sync_main_data(0).await.unwrap_err();
    assert!(matches!(err, QbtError::Decode(_)));
}

// sync

#[tokio::test]
async fn test_sync_full_then_delta() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::SYNC_MAIN_DATA && req.params.get("rid") == Some("0")
        })
        .times(1)
        .returning(|_| Ok(ok(MAIN_DATA_FULL)));
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::SYNC_MAIN_DATA && req.params.get("rid") == Some("1")
        })
        .times(1)
        .returning(|_| Ok(ok(MAIN_DATA_DELTA)));

    let session = session(mock);
    let mut cursor = SyncCursor::new();

    let full = session.sync_main_data(cursor.rid()).await.unwrap();
    assert!(full.full_update);
    assert_eq!(full.categories, vec![Category::new("Linux", "/data/linux")]);
    cursor.advance_main(&full);

    let delta = session.sync_main_data(cursor.rid()).await.unwrap();
    assert!(!delta.full_update);
    assert_eq!(delta.torrents_removed, vec!["deadbeef"]);
    let changed = &delta.torrents["8c212779b4abde7c6bc608063a0d008b7e40ce32"];
    assert!(changed.contains("progress"));
    assert!(!changed.contains("name"));

    let mut mirror = BTreeMap::new();
    full.merge_torrents(&mut mirror).unwrap();
    delta.merge_torrents(&mut mirror).unwrap();
    let torrent = &mirror["8c212779b4abde7c6bc608063a0d008b7e40ce32"];
    assert_eq!(torrent.progress, 0.5);
    assert_eq!(torrent.name, "debian-12.iso");
    cursor.advance_main(&delta);
    assert_eq!(cursor.rid(), 2);
}

#[tokio::test]
async fn test_sync_same_rid_twice_is_equal() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .times(2)
        .returning(|_| Ok(ok(MAIN_DATA_FULL)));

    let session = session(mock);
    let first = session.sync_main_data(0).await.unwrap();
    let second = session.sync_main_data(0).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_sync_torrent_peers() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::SYNC_TORRENT_PEERS
                && req.params.get("hash") == Some("abc")
                && req.params.get("rid") == Some("0")
        })
        .returning(|_| {
            Ok(ok(
                r#"{"rid": 4, "full_update": true, "peers": {"1.2.3.4:6881": {"client": "x"}}}"#,
            ))
        });

    let data = session(mock).sync_torrent_peers("abc", 0).await.unwrap();
    assert_eq!(data.rid, 4);
    assert!(data.peers.contains_key("1.2.3.4:6881"));
}

#[tokio::test]
async fn test_sync_torrent_peers_unknown_hash() {
    let mut mock = MockTransport::new();
    expect(
        &mut mock,
        Method::Get,
        endpoints::SYNC_TORRENT_PEERS,
        status(404),
    );

    let err = session(mock).sync_torrent_peers("nope", 0).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(reason(&err), "torrent hash was not found");
}

// app

#[tokio::test]
async fn test_version_is_trimmed_text() {
    let mut mock = MockTransport::new();
    expect(&mut mock, Method::Get, endpoints::APP_VERSION, ok("v4.6.4\n"));

    assert_eq!(session(mock).version().await.unwrap(), "v4.6.4");
}

#[tokio::test]
async fn test_version_failure() {
    let mut mock = MockTransport::new();
    expect(&mut mock, Method::Get, endpoints::APP_VERSION, status(500));

    let err = session(mock).version().await.unwrap_err();
    assert_eq!(reason(&err), "get qbittorrent version failed");
}

#[tokio::test]
async fn test_set_preferences_posts_json() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::APP_SET_PREFERENCES
                && req.params.get("json") == Some(r#"{"save_path":"/data","dl_limit":0}"#)
        })
        .times(1)
        .returning(|_| Ok(ok("")));

    let mut prefs = Preferences::new();
    prefs.insert("save_path".into(), "/data".into());
    prefs.insert("dl_limit".into(), 0.into());
    session(mock).set_preferences(&prefs).await.unwrap();
}

#[tokio::test]
async fn test_shutdown_consumes_session() {
    let mut mock = MockTransport::new();
    expect(&mut mock, Method::Post, endpoints::APP_SHUTDOWN, ok(""));

    session(mock).shutdown().await.unwrap();
}

#[tokio::test]
async fn test_build_info() {
    let mut mock = MockTransport::new();
    expect(
        &mut mock,
        Method::Get,
        endpoints::APP_BUILD_INFO,
        ok(r#"{"qt": "6.5", "libtorrent": "2.0.9", "bitness": 64}"#),
    );

    let info = session(mock).build_info().await.unwrap();
    assert_eq!(info.libtorrent, "2.0.9");
    assert_eq!(info.bitness, 64);
}

// log

#[tokio::test]
async fn test_main_log_level_flags() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::LOG_MAIN
                && req.params.get("normal") == Some("false")
                && req.params.get("info") == Some("false")
                && req.params.get("warning") == Some("true")
                && req.params.get("critical") == Some("true")
                && req.params.get("last_known_id") == Some("-1")
        })
        .returning(|_| {
            Ok(ok(
                r#"[{"id": 1, "message": "disk full", "timestamp": 1700000000, "type": 8}]"#,
            ))
        });

    let logs = session(mock)
        .main_log(LogLevel::WARNING | LogLevel::CRITICAL, -1)
        .await
        .unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].kind, 8);
}

#[tokio::test]
async fn test_peer_log_bad_timestamp_is_decode_error() {
    let mut mock = MockTransport::new();
    expect(
        &mut mock,
        Method::Get,
        endpoints::LOG_PEERS,
        ok(r#"[{"id": 1, "ip": "1.2.3.4", "timestamp": "abc", "blocked": true}]"#),
    );

    let err = session(mock).peer_log(-1).await.unwrap_err();
    assert!(matches!(err, QbtError::Decode(_)));
}

// transfer

#[tokio::test]
async fn test_speed_limits_mode() {
    let mut mock = MockTransport::new();
    expect(
        &mut mock,
        Method::Get,
        endpoints::TRANSFER_SPEED_LIMITS_MODE,
        ok("1"),
    );

    assert_eq!(
        session(mock).speed_limits_mode().await.unwrap(),
        SpeedLimitsMode::Alternative
    );
}

#[tokio::test]
async fn test_ban_peers_joins_with_pipe() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::TRANSFER_BAN_PEERS
                && req.params.get("peers") == Some("1.2.3.4:6881|[::1]:51413")
        })
        .times(1)
        .returning(|_| Ok(ok("")));

    session(mock)
        .ban_peers(&[Peer::new("1.2.3.4", 6881), Peer::new("::1", 51413)])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_global_download_limit() {
    let mut mock = MockTransport::new();
    expect(
        &mut mock,
        Method::Get,
        endpoints::TRANSFER_DOWNLOAD_LIMIT,
        ok("1048576"),
    );

    assert_eq!(session(mock).global_download_limit().await.unwrap(), 1_048_576);
}

// torrents

#[tokio::test]
async fn test_torrents_list_params() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.method == Method::Get
                && req.endpoint == endpoints::TORRENTS_INFO
                && req.params.get("filter") == Some("completed")
                && req.params.get("category") == Some("")
        })
        .returning(|_| Ok(ok(r#"[{"hash": "abc", "name": "x", "tags": ""}]"#)));

    let torrents = session(mock)
        .torrents(&TorrentListParams {
            filter: Some("completed".into()),
            category: Some("ignored".into()),
            without_category: true,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(torrents.len(), 1);
    assert!(torrents[0].tags.is_empty());
}

#[tokio::test]
async fn test_pause_joins_hashes() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.method == Method::Post
                && req.endpoint == endpoints::TORRENTS_PAUSE
                && req.params.get("hashes") == Some("a|b")
        })
        .times(1)
        .returning(|_| Ok(ok("")));

    session(mock).pause(&["a", "b"]).await.unwrap();
}

#[tokio::test]
async fn test_properties_invalid_hash() {
    let mut mock = MockTransport::new();
    expect(
        &mut mock,
        Method::Get,
        endpoints::TORRENTS_PROPERTIES,
        status(404),
    );

    let err = session(mock).properties("nope").await.unwrap_err();
    assert_eq!(reason(&err), "hash is invalid");
}

#[tokio::test]
async fn test_web_seeds_are_flattened() {
    let mut mock = MockTransport::new();
    expect(
        &mut mock,
        Method::Get,
        endpoints::TORRENTS_WEBSEEDS,
        ok(r#"[{"url": "http://a"}, {"url": "http://b"}]"#),
    );

    assert_eq!(
        session(mock).web_seeds("abc").await.unwrap(),
        vec!["http://a", "http://b"]
    );
}

#[tokio::test]
async fn test_add_without_source_sends_nothing() {
    let mut mock = MockTransport::new();
    mock.expect_send().never();

    let err = session(mock)
        .add(&AddTorrentParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, QbtError::InvalidInput(_)));
}

#[tokio::test]
async fn test_add_sends_multipart() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::TORRENTS_ADD
                && req
                    .multipart
                    .as_ref()
                    .is_some_and(|form| form.fields.get("urls") == Some("magnet:?xt=urn:btih:abc"))
        })
        .times(1)
        .returning(|_| Ok(ok("Ok.")));

    session(mock)
        .add(&AddTorrentParams::from_urls(["magnet:?xt=urn:btih:abc"]))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_add_invalid_torrent_file() {
    let mut mock = MockTransport::new();
    expect(&mut mock, Method::Post, endpoints::TORRENTS_ADD, status(415));

    let err = session(mock)
        .add(&AddTorrentParams::from_urls(["http://x/bad.torrent"]))
        .await
        .unwrap_err();
    assert_eq!(reason(&err), "torrent file is not valid");
}

#[tokio::test]
async fn test_queue_priority_disabled() {
    let mut mock = MockTransport::new();
    expect(
        &mut mock,
        Method::Post,
        endpoints::TORRENTS_TOP_PRIO,
        status(409),
    );

    let err = session(mock).top_priority(&["abc"]).await.unwrap_err();
    assert_eq!(reason(&err), "torrent queueing is not enabled");
}

#[tokio::test]
async fn test_edit_tracker_rules() {
    for (code, expected) in [
        (400, "newUrl is not a valid URL"),
        (404, "torrent hash was not found"),
        (409, "newUrl already exists for the torrent or origUrl was not found"),
        (500, "edit trackers to torrent failed"),
    ] {
        let mut mock = MockTransport::new();
        expect(
            &mut mock,
            Method::Post,
            endpoints::TORRENTS_EDIT_TRACKER,
            status(code),
        );
        let err = session(mock)
            .edit_tracker("abc", "http://old", "http://new")
            .await
            .unwrap_err();
        assert_eq!(reason(&err), expected);
    }
}

#[tokio::test]
async fn test_export_to_file_respects_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("x.torrent");
    std::fs::write(&target, b"old").unwrap();

    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| req.endpoint == endpoints::TORRENTS_EXPORT)
        .times(2)
        .returning(|_| Ok(ok("d4:infoe")));
    let session = session(mock);

    let err = session
        .export_to_file("abc", &target, false)
        .await
        .unwrap_err();
    assert!(matches!(err, QbtError::FileSystem(_)));
    assert_eq!(std::fs::read(&target).unwrap(), b"old");

    session.export_to_file("abc", &target, true).await.unwrap();
    assert_eq!(std::fs::read(&target).unwrap(), b"d4:infoe");
}

#[tokio::test]
async fn test_categories_object_form() {
    let mut mock = MockTransport::new();
    expect(
        &mut mock,
        Method::Get,
        endpoints::TORRENTS_CATEGORIES,
        ok(r#"{"Movies": {"name": "Movies", "savePath": "/m"}, "Linux": {"savePath": "/l"}}"#),
    );

    let categories = session(mock).categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert!(categories.contains(&Category::new("Linux", "/l")));
    assert!(categories.contains(&Category::new("Movies", "/m")));
}

#[tokio::test]
async fn test_create_category_invalid_name() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::TORRENTS_CREATE_CATEGORY
                && req.params.get("category") == Some("a/b")
                && req.params.get("savePath") == Some("/x")
        })
        .returning(|_| Ok(status(409)));

    let err = session(mock)
        .create_category(&Category::new("a/b", "/x"))
        .await
        .unwrap_err();
    assert_eq!(reason(&err), "category name is invalid");
}

#[tokio::test]
async fn test_add_tags_joins_with_comma() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::TORRENTS_ADD_TAGS
                && req.params.get("hashes") == Some("abc")
                && req.params.get("tags") == Some("linux,iso")
        })
        .times(1)
        .returning(|_| Ok(ok("")));

    session(mock)
        .add_tags(&["abc"], &["linux", "iso"])
        .await
        .unwrap();
}

// rss

#[tokio::test]
async fn test_rss_items_tree() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::RSS_ITEMS && req.params.get("withData") == Some("true")
        })
        .returning(|_| Ok(ok(RSS_ITEMS)));

    let root = session(mock).rss_items(true).await.unwrap();
    assert_eq!(root.feeds.len(), 2);
    assert_eq!(root.folders.len(), 1);
    assert_eq!(root.children.len(), 2);

    let nested = root.feed(&join_path(&["Folder1", "Feed1"])).unwrap();
    assert_eq!(rss::read(&nested).path, "Folder1\\Feed1");
    assert_eq!(rss::read(&root.feeds[1]).path, "Feed2");
}

#[tokio::test]
async fn test_rss_add_feed_conflict() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::RSS_ADD_FEED
                && req.params.get("url") == Some("http://a/rss")
                && req.params.get("path") == Some("Folder1\\Feed1")
        })
        .returning(|_| Ok(status(409)));

    let err = session(mock)
        .add_rss_feed("http://a/rss", "Folder1\\Feed1")
        .await
        .unwrap_err();
    assert_eq!(reason(&err), "failed to add RSS feed");
}

#[tokio::test]
async fn test_rss_rules_hoist_names() {
    let mut mock = MockTransport::new();
    expect(&mut mock, Method::Get, endpoints::RSS_RULES, ok(RSS_RULES));

    let rules = session(mock).rss_rules().await.unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].name, "Debian");
    assert!(rules[0].enabled);
    assert_eq!(rules[0].affected_feeds, vec!["http://a/rss"]);
}

#[tokio::test]
async fn test_set_rss_rule() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::RSS_SET_RULE
                && req.params.get("ruleName") == Some("Debian")
                && req
                    .params
                    .get("ruleDef")
                    .is_some_and(|def| {
                        def.contains(r#""mustContain":"debian""#) && !def.contains("Debian")
                    })
        })
        .times(1)
        .returning(|_| Ok(ok("")));

    let rule = AutoDownloadRule {
        name: "Debian".into(),
        must_contain: "debian".into(),
        ..Default::default()
    };
    session(mock).set_rss_rule(&rule).await.unwrap();
}

#[tokio::test]
async fn test_set_rss_rule_requires_name() {
    let mut mock = MockTransport::new();
    mock.expect_send().never();

    let err = session(mock)
        .set_rss_rule(&AutoDownloadRule::default())
        .await
        .unwrap_err();
    assert!(matches!(err, QbtError::InvalidInput(_)));
}

// search

#[tokio::test]
async fn test_start_search_returns_id() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::SEARCH_START
                && req.params.get("pattern") == Some("debian")
                && req.params.get("plugins") == Some("legittorrents|piratebay")
                && req.params.get("category") == Some("all")
        })
        .returning(|_| Ok(ok(r#"{"id": 12345}"#)));

    let id = session(mock)
        .start_search("debian", &["legittorrents", "piratebay"], "all")
        .await
        .unwrap();
    assert_eq!(id, 12345);
}

#[tokio::test]
async fn test_start_search_limit_reached() {
    let mut mock = MockTransport::new();
    expect(&mut mock, Method::Post, endpoints::SEARCH_START, status(409));

    let err = session(mock)
        .start_search("debian", &["all"], "all")
        .await
        .unwrap_err();
    assert_eq!(
        reason(&err),
        "user has reached the limit of max running searches"
    );
}

#[tokio::test]
async fn test_search_results_bad_offset() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::SEARCH_RESULTS
                && req.params.get("id") == Some("7")
                && req.params.get("limit") == Some("10")
                && req.params.get("offset") == Some("1000")
        })
        .returning(|_| Ok(status(409)));

    let err = session(mock)
        .search_results(7, Some(10), Some(1000))
        .await
        .unwrap_err();
    assert_eq!(reason(&err), "offset is too large, or too small");
}

#[tokio::test]
async fn test_search_status_all_jobs() {
    let mut mock = MockTransport::new();
    mock.expect_send()
        .withf(|req: &ApiRequest| {
            req.endpoint == endpoints::SEARCH_STATUS && req.params.get("id").is_none()
        })
        .returning(|_| {
            Ok(ok(r#"[
                {"id": 1, "status": "Running", "total": 3},
                {"id": 2, "status": "Stopped", "total": 0}
            ]"#))
        });

    let jobs = session(mock).search_status(None).await.unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[1].status, "Stopped");
}

#[test]
fn test_session_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
    assert_send_sync::<Client>();
}
