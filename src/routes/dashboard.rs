//! Authenticated landing page: account summary, session expiry, and quick
//! actions. Also the target of the admin-guard denial redirect, which arrives
//! as a query parameter.

use crate::components::{Alert, AlertKind, AppShell};
use crate::features::auth::state::use_auth;
use crate::features::auth::{RequireAuth, token};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

const PANEL: &str = "rounded-xl border border-stone-700 bg-stone-800/70 p-4 shadow";
const ACTION_LINK: &str = "text-amber-300 hover:underline";

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <DashboardContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = use_auth();
    let query = use_query_map();
    let denied = move || query.get().get("denied").is_some();
    let expiry = move || {
        auth.session()
            .token()
            .and_then(token::decode_claims)
            .as_ref()
            .and_then(token::expiry_label)
    };

    view! {
        <div class="space-y-6">
            <Show when=denied>
                <Alert
                    kind=AlertKind::Error
                    message="You do not have permission to access this page.".to_string()
                />
            </Show>
            {move || {
                auth.profile()
                    .map(|profile| {
                        let verified = if profile.email_verified { "Yes" } else { "No" };
                        view! {
                            <h1 class="text-3xl text-amber-300 font-semibold">
                                {format!("Welcome, {}!", profile.username)}
                            </h1>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                <div class=PANEL>
                                    <h2 class="text-xl text-amber-200 mb-3">"Account Information"</h2>
                                    <p class="text-stone-200">
                                        <strong>"Username: "</strong>
                                        {profile.username.clone()}
                                    </p>
                                    <p class="text-stone-200">
                                        <strong>"Email: "</strong>
                                        {profile.email.clone()}
                                    </p>
                                    <p class="text-stone-200">
                                        <strong>"Account ID: "</strong>
                                        {profile.id}
                                    </p>
                                    <p class="text-stone-200">
                                        <strong>"Email verified: "</strong>
                                        {verified}
                                    </p>
                                    {move || {
                                        expiry()
                                            .map(|label| {
                                                view! {
                                                    <p class="text-stone-200">
                                                        <strong>"Session expires: "</strong>
                                                        {label}
                                                    </p>
                                                }
                                            })
                                    }}
                                </div>
                                <div class=PANEL>
                                    <h2 class="text-xl text-amber-200 mb-3">"Quick Actions"</h2>
                                    <ul class="space-y-2">
                                        <li>
                                            <A href={paths::CHANGE_PASSWORD} {..} class=ACTION_LINK>
                                                "Change your password"
                                            </A>
                                        </li>
                                        <li>
                                            <A href={paths::TWO_FACTOR} {..} class=ACTION_LINK>
                                                "Set up two-factor authentication"
                                            </A>
                                        </li>
                                        <li>
                                            <A href={paths::DOWNLOADS} {..} class=ACTION_LINK>
                                                "Download the game client"
                                            </A>
                                        </li>
                                        <Show when=move || profile.is_admin>
                                            <li>
                                                <A href={paths::ADMIN_USERS} {..} class=ACTION_LINK>
                                                    "Manage users"
                                                </A>
                                            </li>
                                        </Show>
                                    </ul>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
