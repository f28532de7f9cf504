//! Auth feature module covering the credential exchange, session lifecycle,
//! token persistence, and route guarding. It keeps authentication logic out
//! of the UI and must avoid logging credentials or token material.
//!
//! Flow overview: login exchanges credentials (plus an optional TOTP code)
//! for a bearer token, persists it, and hydrates the profile. On reload the
//! persisted token is revalidated through the profile fetch; a stale token is
//! dropped. Logout is purely local.

pub(crate) mod client;
mod guards;
pub(crate) mod state;
mod storage;
pub(crate) mod token;
pub(crate) mod types;

pub(crate) use guards::{RequireAdmin, RequireAuth};
