//! Gamehash: Game Version Resolution from Content Hashes
//!
//! Resolves an installed game's on-disk files to a human-readable version
//! string by hashing a defined file set and looking the digest up in a
//! remotely published hash table, with a local cache fallback.

pub mod authoring;
pub mod config;
pub mod error;
pub mod fetch;
pub mod hasher;
pub mod logging;
pub mod resolver;
pub mod session;
pub mod source;
pub mod store;
pub mod types;
