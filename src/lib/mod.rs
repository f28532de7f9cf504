//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! All outbound traffic goes through [`api`], which applies a uniform timeout
//! and maps server rejections and transport failures onto [`AppError`].
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. The helpers do not persist tokens;
//! the session feature owns credential storage.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::{get_json, post_empty, post_form, post_json};
pub(crate) use errors::{AppError, SecondFactorSignal};
