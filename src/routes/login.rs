//! Login route. Exchanges credentials for a bearer token and establishes the
//! session. Accounts protected by a second factor are recognized from the
//! rejection message, which reveals the TOTP input without any protocol-level
//! state change.

use crate::app_lib::{AppError, SecondFactorSignal};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

const INPUT: &str = "w-full rounded-lg border border-stone-600 bg-stone-800 px-3 py-2.5 text-sm text-stone-100 focus:border-amber-400 focus:ring-2 focus:ring-amber-300/30";
const LABEL: &str = "block mb-2 text-sm font-medium text-stone-200";

#[derive(Clone)]
struct LoginInput {
    username: String,
    password: String,
    totp_code: Option<String>,
}

/// Picks the post-login location, honoring a `next` parameter only when it is
/// a local path.
fn resolve_next(next: Option<String>) -> String {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => paths::DASHBOARD.to_string(),
    }
}

fn second_factor_notice(signal: SecondFactorSignal) -> &'static str {
    match signal {
        SecondFactorSignal::Required => {
            "This account is protected by two-factor authentication. Enter the code from your authenticator app."
        }
        SecondFactorSignal::Invalid => {
            "The two-factor code was not accepted. Enter a fresh code and try again."
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (totp_code, set_totp_code) = signal(String::new());
    let (show_totp, set_show_totp) = signal(false);
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (totp_notice, set_totp_notice) = signal::<Option<&'static str>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move {
            let response =
                client::login_token(&input.username, &input.password, input.totp_code.as_deref())
                    .await?;
            auth.login(response.access_token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_profile) => {
                    let next = resolve_next(query.get_untracked().get("next"));
                    navigate(&next, Default::default());
                }
                Err(err) => {
                    if let Some(signal) = err.second_factor_signal() {
                        set_show_totp.set(true);
                        set_totp_notice.set(Some(second_factor_notice(signal)));
                        set_totp_code.set(String::new());
                    } else {
                        set_error.set(Some(err));
                    }
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_totp_notice.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if username_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Validation(
                "Username and password are required.".to_string(),
            )));
            return;
        }

        let code = totp_code.get_untracked().trim().to_string();
        let totp_value = if show_totp.get_untracked() && !code.is_empty() {
            Some(code)
        } else {
            None
        };

        login_action.dispatch(LoginInput {
            username: username_value,
            password: password_value,
            totp_code: totp_value,
        });
    };

    // The submit control stays disabled during the credential exchange and the
    // initial session hydration; that is what keeps login attempts serialized.
    let form_disabled =
        Signal::derive(move || login_action.pending().get() || auth.is_loading.get());

    view! {
        <AppShell>
            <form class="max-w-md mx-auto rounded-xl border border-stone-700 bg-stone-900/80 p-6 shadow-lg" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-amber-300 text-center mb-6">
                    "Account Login"
                </h1>
                <div class="mb-5">
                    <label class=LABEL for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        class=INPUT
                        autocomplete="username"
                        placeholder="Enter your username"
                        required
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=LABEL for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class=INPUT
                        autocomplete="current-password"
                        placeholder="Enter your password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Show when=move || show_totp.get()>
                    <div class="mb-5">
                        <label class=LABEL for="totp_code">"Two-factor code"</label>
                        <input
                            id="totp_code"
                            type="text"
                            class=INPUT
                            autocomplete="one-time-code"
                            inputmode="numeric"
                            placeholder="6-digit code"
                            prop:value=move || totp_code.get()
                            on:input=move |event| set_totp_code.set(event_target_value(&event))
                        />
                    </div>
                </Show>
                <Button button_type="submit" disabled=form_disabled>
                    {move || if auth.is_loading.get() { "Verifying..." } else { "Login" }}
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    totp_notice
                        .get()
                        .map(|notice| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Info message=notice.to_string() />
                                </div>
                            }
                        })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                </div>
                            }
                        })
                }}
                <p class="text-center mt-6 text-sm text-stone-400">
                    "Don't have an account? "
                    <a href=paths::REGISTER class="text-amber-300 hover:underline">"Register here"</a>
                    "."
                </p>
                <p class="text-center mt-2 text-sm text-stone-400">
                    "Forgot your password? "
                    <a href=paths::RESET_PASSWORD class="text-amber-300 hover:underline">"Reset it"</a>
                    "."
                </p>
            </form>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_must_be_a_local_path() {
        assert_eq!(
            resolve_next(Some("/downloads".to_string())),
            "/downloads"
        );
        assert_eq!(resolve_next(None), "/dashboard");
        assert_eq!(
            resolve_next(Some("https://evil.example".to_string())),
            "/dashboard"
        );
        assert_eq!(
            resolve_next(Some("//evil.example".to_string())),
            "/dashboard"
        );
    }

    #[test]
    fn notices_distinguish_required_from_invalid() {
        assert!(second_factor_notice(SecondFactorSignal::Required).contains("protected"));
        assert!(second_factor_notice(SecondFactorSignal::Invalid).contains("not accepted"));
    }
}
