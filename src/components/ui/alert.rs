//! Alert banners for success and error messages. Messages must be safe to
//! render and should never include secrets or tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-lg border border-red-800 bg-red-900/40 px-4 py-3 text-sm text-red-200"
        }
        AlertKind::Success => {
            "rounded-lg border border-emerald-800 bg-emerald-900/40 px-4 py-3 text-sm text-emerald-200"
        }
        AlertKind::Info => {
            "rounded-lg border border-amber-700 bg-amber-900/30 px-4 py-3 text-sm text-amber-100"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
