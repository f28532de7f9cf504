//! Route guards over the session state. Both are pure views of the current
//! [`SessionState`], re-evaluated on every change: loading shows a
//! placeholder, Anonymous redirects before any protected content renders.
//! These gates are UX-only; real access control lives on the API.

use crate::components::Spinner;
use crate::features::auth::state::{SessionState, use_auth};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Login target carrying the originally requested location so the login page
/// can return there afterwards. Internal paths contain no query metacharacters.
fn login_redirect(requested: &str) -> String {
    if requested.is_empty() || requested == paths::LOGIN {
        paths::LOGIN.to_string()
    } else {
        format!("{}?next={requested}", paths::LOGIN)
    }
}

/// Landing target for authenticated accounts that lack the admin flag; the
/// dashboard shows the denial notice.
fn denied_redirect() -> String {
    format!("{}?denied=1", paths::DASHBOARD)
}

#[component]
fn GuardPlaceholder() -> impl IntoView {
    view! {
        <div class="flex justify-center py-16">
            <Spinner />
        </div>
    }
}

/// Renders children only for an established session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move |_| {
        if matches!(auth.session(), SessionState::Anonymous) {
            let target = login_redirect(&location.pathname.get_untracked());
            navigate(&target, Default::default());
        }
    });

    view! {
        {move || match auth.session() {
            SessionState::Uninitialized | SessionState::Loading => {
                view! { <GuardPlaceholder /> }.into_any()
            }
            SessionState::Anonymous => ().into_any(),
            SessionState::Authenticated { .. } => children().into_any(),
        }}
    }
}

/// Renders children only for an established session whose profile carries the
/// admin flag; signed-in non-admins land back on the dashboard.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move |_| match auth.session() {
        SessionState::Anonymous => {
            let target = login_redirect(&location.pathname.get_untracked());
            navigate(&target, Default::default());
        }
        SessionState::Authenticated { profile, .. } if !profile.is_admin => {
            navigate(&denied_redirect(), Default::default());
        }
        _ => {}
    });

    view! {
        {move || match auth.session() {
            SessionState::Uninitialized | SessionState::Loading => {
                view! { <GuardPlaceholder /> }.into_any()
            }
            SessionState::Authenticated { profile, .. } if profile.is_admin => {
                children().into_any()
            }
            _ => ().into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_redirect_preserves_requested_location() {
        assert_eq!(login_redirect("/downloads"), "/login?next=/downloads");
        assert_eq!(login_redirect("/admin/users"), "/login?next=/admin/users");
    }

    #[test]
    fn login_redirect_avoids_self_reference() {
        assert_eq!(login_redirect("/login"), "/login");
        assert_eq!(login_redirect(""), "/login");
    }

    #[test]
    fn denied_redirect_targets_dashboard() {
        assert_eq!(denied_redirect(), "/dashboard?denied=1");
    }
}
