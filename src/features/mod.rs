//! Feature modules: API clients and domain logic, one directory per concern.

pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod captcha;
pub(crate) mod downloads;
