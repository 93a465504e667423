//! RHMZ observed-conditions feed client.
//!
//! This module retrieves and decodes the Republic Hydrometeorological
//! Service RSS bulletin into raw entries. Key characteristics of the
//! bulletin:
//! - one RSS item per weather station
//! - the item title carries the station name (`Station: <name>`)
//! - the item description carries the readings as a semicolon-separated
//!   run of `Label: value` segments, a versionless positional
//!   micro-format with no escaping
//!
//! Decoding stops at the `title`/`summary` text level; interpreting the
//! segment text is the job of [`crate::extract`].

mod client;
mod entry;
mod error;
pub mod mock;

pub use client::{FeedClient, FeedConfig, parse_feed};
pub use entry::RawEntry;
pub use error::FeedError;
