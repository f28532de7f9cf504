//! CAPTCHA feature: fetching short-lived challenges for the forms that are
//! open to anonymous visitors.

pub(crate) mod client;
pub(crate) mod types;
