//! Email verification landing page. The token arrives in the link's query
//! string and is submitted automatically on mount; the page only renders the
//! outcome.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::{client, types::VerifyEmailRequest};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[derive(Clone, Debug, PartialEq)]
enum VerifyStatus {
    Idle,
    MissingToken,
    Pending,
    Success,
    Error(String),
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();
    let (status, set_status) = signal(VerifyStatus::Idle);

    let verify_action = Action::new_local(move |token_value: &String| {
        let token_value = token_value.clone();
        async move {
            let request = VerifyEmailRequest { token: token_value };
            client::verify_email(&request).await
        }
    });

    Effect::new(move |_| {
        if status.get() != VerifyStatus::Idle {
            return;
        }

        match query.get_untracked().get("token") {
            Some(token) if !token.trim().is_empty() => {
                set_status.set(VerifyStatus::Pending);
                verify_action.dispatch(token.trim().to_string());
            }
            _ => set_status.set(VerifyStatus::MissingToken),
        }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(_confirmation) => set_status.set(VerifyStatus::Success),
                Err(err) => set_status.set(VerifyStatus::Error(err.to_string())),
            }
        }
    });

    view! {
        <AppShell>
            <div class="max-w-md mx-auto rounded-xl border border-stone-700 bg-stone-900/80 p-6 shadow-lg text-center">
                <h1 class="text-2xl font-semibold text-amber-300 mb-6">"Email Verification"</h1>
                {move || match status.get() {
                    VerifyStatus::Idle | VerifyStatus::Pending => view! {
                        <div class="space-y-4">
                            <p class="text-stone-300">"Verifying your email, please wait..."</p>
                            <Spinner />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Success => view! {
                        <div class="space-y-4">
                            <Alert
                                kind=AlertKind::Success
                                message="Your email has been successfully verified! You can now log in."
                                    .to_string()
                            />
                            <p>
                                <a href=paths::LOGIN class="text-amber-300 hover:underline">
                                    "Proceed to Login"
                                </a>
                            </p>
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::MissingToken => view! {
                        <div class="space-y-4">
                            <Alert
                                kind=AlertKind::Error
                                message="Verification token not found. Please check the link or contact support."
                                    .to_string()
                            />
                            <RetryLinks />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Error(message) => view! {
                        <div class="space-y-4">
                            <Alert kind=AlertKind::Error message=message />
                            <RetryLinks />
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </AppShell>
    }
}

#[component]
fn RetryLinks() -> impl IntoView {
    view! {
        <p class="text-sm text-stone-400">
            <a href=paths::REGISTER class="text-amber-300 hover:underline">"Register again"</a>
            " or "
            <a href=paths::LOGIN class="text-amber-300 hover:underline">"try logging in"</a>
            "."
        </p>
    }
}
