//! Core library for the reqres demo client.
//!
//! Provides the request executor for talking to the ReqRes REST API,
//! the per-call result/failure/pending state it produces, and the
//! durable token store the executor reads its bearer credential from.

pub mod api;
pub mod auth;
pub mod models;
