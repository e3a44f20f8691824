//! Endpoint bindings, one `impl Session` block per API family.

mod app;
mod log;
mod rss;
mod search;
mod sync;
mod torrents;
mod transfer;
