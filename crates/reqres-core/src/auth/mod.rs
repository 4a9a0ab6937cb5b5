//! Token storage for the reqres demo client.
//!
//! This module provides:
//! - `TokenStore`: the key/value interface the request executor reads
//!   its bearer token through
//! - `KeyringTokenStore`: durable storage in the OS keychain
//! - `MemoryTokenStore`: in-process storage for tests and ephemeral runs
//!
//! The session token lives under the single `bearerToken` key. It is
//! written by the login flow and never explicitly cleared.

pub mod store;

pub use store::{KeyringTokenStore, MemoryTokenStore, TokenStore, BEARER_TOKEN_KEY};
