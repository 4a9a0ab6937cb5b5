//! REST API client module for the ReqRes demo service.
//!
//! This module provides the `ApiClient` for issuing JSON requests
//! against the ReqRes API, and `CallState` for tracking the outcome
//! of the most recent call for display.
//!
//! The API uses bearer token authentication; the token is read from
//! the durable store before every request.

pub mod client;
pub mod error;
pub mod state;

pub use client::ApiClient;
pub use error::ApiError;
pub use state::CallState;
