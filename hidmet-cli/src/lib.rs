//! Current weather conditions for Serbia.
//!
//! Retrieves the Republic Hydrometeorological Service of Serbia
//! observed-conditions RSS bulletin and turns each entry's free-text
//! readings into typed, queryable station observations.

pub mod cli;
pub mod extract;
pub mod feed;
pub mod index;
pub mod observation;
pub mod render;
