//! Admin feature: user listing and the per-row moderation actions.

pub(crate) mod client;
pub(crate) mod rules;
