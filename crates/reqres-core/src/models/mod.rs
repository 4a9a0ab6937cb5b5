//! Typed shapes for the ReqRes API payloads the client displays.
//!
//! The request executor itself stays `serde_json::Value`-typed; these
//! models are parsed out of the returned value where the caller wants
//! structured fields.

pub mod session;
pub mod user;

pub use session::{LoginRequest, LoginResponse};
pub use user::{User, UserPage};
