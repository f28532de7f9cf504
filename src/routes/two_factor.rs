//! Two-factor authentication management. Setup provisions a fresh secret and
//! shows the QR code plus manual key; enabling requires the first code from
//! the authenticator, disabling requires a current one. The server is the
//! only authority on whether 2FA is active.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::auth::{
    RequireAuth, client,
    types::{TotpCodeRequest, TotpSetupResponse},
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const INPUT: &str = "w-full rounded-lg border border-stone-600 bg-stone-800 px-3 py-2.5 text-sm text-stone-100 focus:border-amber-400 focus:ring-2 focus:ring-amber-300/30";
const LABEL: &str = "block mb-2 text-sm font-medium text-stone-200";
const PANEL: &str = "rounded-xl border border-stone-700 bg-stone-900/80 p-6 shadow-lg";

fn missing_session() -> AppError {
    AppError::Validation("Your session has expired. Log in again.".to_string())
}

#[component]
pub fn TwoFactorPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <div class="max-w-md mx-auto space-y-8">
                    <div class="text-center">
                        <h1 class="text-2xl font-semibold text-amber-300">
                            "Two-Factor Authentication"
                        </h1>
                        <p class="mt-2 text-stone-400">
                            "Protect your account with a code from an authenticator app."
                        </p>
                    </div>
                    <SetupSection />
                    <DisableSection />
                </div>
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn SetupSection() -> impl IntoView {
    let auth = use_auth();
    let (code, set_code) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (enabled, set_enabled) = signal(false);

    let setup_action = Action::new_local(move |_: &()| async move {
        let token = auth.token().ok_or_else(missing_session)?;
        client::totp_setup(&token).await
    });

    let enable_action = Action::new_local(move |code_value: &String| {
        let code_value = code_value.clone();
        async move {
            let token = auth.token().ok_or_else(missing_session)?;
            let request = TotpCodeRequest {
                totp_code: code_value,
            };
            client::totp_enable(&request, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = enable_action.value().get() {
            match result {
                Ok(_confirmation) => {
                    set_enabled.set(true);
                    set_code.set(String::new());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = setup_action.value().get() {
            set_error.set(Some(err));
        }
    });

    let on_enable = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let code_value = code.get_untracked().trim().to_string();
        if code_value.is_empty() {
            set_error.set(Some(AppError::Validation(
                "Enter the code from your authenticator app.".to_string(),
            )));
            return;
        }
        enable_action.dispatch(code_value);
    };

    view! {
        <div class=PANEL>
            <h2 class="text-xl text-amber-200 mb-3">"Enable 2FA"</h2>
            {move || {
                if enabled.get() {
                    return view! {
                        <Alert
                            kind=AlertKind::Success
                            message="Two-factor authentication is now enabled. You will need a code at every login."
                                .to_string()
                        />
                    }
                    .into_any();
                }
                match setup_action.value().get() {
                    Some(Ok(setup)) => view! {
                        <SetupDetails setup=setup />
                        <form class="mt-4" on:submit=on_enable>
                            <div class="mb-4">
                                <label class=LABEL for="enable_code">"Verification Code"</label>
                                <input
                                    id="enable_code"
                                    type="text"
                                    class=INPUT
                                    autocomplete="one-time-code"
                                    inputmode="numeric"
                                    placeholder="6-digit code"
                                    required
                                    prop:value=move || code.get()
                                    on:input=move |event| set_code.set(event_target_value(&event))
                                />
                            </div>
                            <Button button_type="submit" disabled=enable_action.pending()>
                                "Verify and Enable"
                            </Button>
                        </form>
                    }
                    .into_any(),
                    _ => view! {
                        <p class="text-sm text-stone-300 mb-4">
                            "Generate a secret, scan the QR code with your authenticator, then confirm with the first code."
                        </p>
                        <Button disabled=setup_action.pending() on:click=move |_| {
                            set_error.set(None);
                            setup_action.dispatch(());
                        }>
                            "Begin Setup"
                        </Button>
                    }
                    .into_any(),
                }
            }}
            {move || {
                (setup_action.pending().get() || enable_action.pending().get())
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
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
        </div>
    }
}

#[component]
fn SetupDetails(setup: TotpSetupResponse) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div class="flex justify-center bg-white p-4 rounded-lg">
                <img src=setup.qr_code_data_uri alt="2FA QR code" class="w-56 h-56" />
            </div>
            <div class="text-center space-y-1">
                <p class="text-sm text-stone-300">
                    "Scan this QR code with your authenticator app"
                </p>
                <p class="text-xs font-mono text-stone-400 break-all pt-2">
                    "Secret: " {setup.secret_key}
                </p>
            </div>
        </div>
    }
}

#[component]
fn DisableSection() -> impl IntoView {
    let auth = use_auth();
    let (code, set_code) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (disabled_message, set_disabled_message) = signal::<Option<String>>(None);

    let disable_action = Action::new_local(move |code_value: &String| {
        let code_value = code_value.clone();
        async move {
            let token = auth.token().ok_or_else(missing_session)?;
            let request = TotpCodeRequest {
                totp_code: code_value,
            };
            client::totp_disable(&request, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = disable_action.value().get() {
            match result {
                Ok(confirmation) => {
                    set_disabled_message.set(Some(confirmation.message));
                    set_code.set(String::new());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_disable = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_disabled_message.set(None);

        let code_value = code.get_untracked().trim().to_string();
        if code_value.is_empty() {
            set_error.set(Some(AppError::Validation(
                "Enter a current code to disable 2FA.".to_string(),
            )));
            return;
        }
        disable_action.dispatch(code_value);
    };

    view! {
        <div class=PANEL>
            <h2 class="text-xl text-amber-200 mb-3">"Disable 2FA"</h2>
            <form on:submit=on_disable>
                <div class="mb-4">
                    <label class=LABEL for="disable_code">"Current Code"</label>
                    <input
                        id="disable_code"
                        type="text"
                        class=INPUT
                        autocomplete="one-time-code"
                        inputmode="numeric"
                        placeholder="6-digit code"
                        required
                        prop:value=move || code.get()
                        on:input=move |event| set_code.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=disable_action.pending()>
                    "Disable"
                </Button>
            </form>
            {move || {
                disable_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                disabled_message
                    .get()
                    .map(|text| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Success message=text />
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
        </div>
    }
}
