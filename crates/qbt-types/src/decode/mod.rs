//! Decoders for the irregular encodings used by the WebUI API.
//!
//! The daemon is not consistent about how it shapes its payloads:
//!
//! - timestamps are bare Unix epoch seconds ([`Timestamp`]),
//! - lists are sometimes a single delimited string ([`comma_list`], [`pipe_list`]),
//! - keyed collections arrive either as an object keyed by name or as an array
//!   with the name embedded ([`keyed`]).
//!
//! Each helper is usable from `#[serde(with = ...)]` attributes so the wire types
//! can stay plain structs.

mod delimited;
pub mod keyed;
mod timestamp;

pub use delimited::{comma_list, join_list, pipe_list, split_list};
pub use keyed::Keyed;
pub use timestamp::Timestamp;
