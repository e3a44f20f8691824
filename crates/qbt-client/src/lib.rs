//! # qBittorrent WebUI API client.
//!
//! usage:
//!
//! ```rust,ignore
//! use qbt_client::Client;
//! use qbt_types::SyncCursor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Client::new("http://localhost:8080")?
//!         .login("admin", "adminadmin")
//!         .await?;
//!
//!     let mut cursor = SyncCursor::new();
//!     let data = session.sync_main_data(cursor.rid()).await?;
//!     cursor.advance_main(&data);
//!     println!("{} torrents", data.torrents.len());
//!
//!     let rss = session.rss_items(false).await?;
//!     for feed in &rss.feeds {
//!         println!("{}", qbt_types::rss::read(feed).path);
//!     }
//!
//!     session.logout().await?;
//!     Ok(())
//! }
//! ```
//!

mod api;
mod client;
mod config;
mod endpoints;
mod params;
pub mod status;
mod transport;

#[cfg(test)]
mod testutil;

pub use client::{Client, Session};
pub use config::{ClientConfig, USER_AGENT};
pub use params::Params;
pub use transport::{
    ApiRequest, FilePart, HttpTransport, Method, MultipartForm, RawResponse, Transport,
};

// Used by the integration tests only.
#[cfg(test)]
use test_log as _;
#[cfg(test)]
use tracing_subscriber as _;
#[cfg(test)]
use wiremock as _;
