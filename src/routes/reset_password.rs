//! Password reset route with two independent forms: requesting a reset for a
//! username (CAPTCHA-gated) and confirming one with the token the user
//! received. The request response is display-only and deliberately does not
//! reveal whether the account exists.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, CaptchaField, Spinner};
use crate::features::auth::{
    client,
    types::{PasswordResetConfirmRequest, PasswordResetRequest},
};
use crate::features::captcha;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const INPUT: &str = "w-full rounded-lg border border-stone-600 bg-stone-800 px-3 py-2.5 text-sm text-stone-100 focus:border-amber-400 focus:ring-2 focus:ring-amber-300/30";
const LABEL: &str = "block mb-2 text-sm font-medium text-stone-200";

const MIN_PASSWORD_LENGTH: usize = 6;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-md mx-auto rounded-xl border border-stone-700 bg-stone-900/80 p-6 shadow-lg">
                <h1 class="text-2xl font-semibold text-amber-300 text-center mb-6">
                    "Reset Your Password"
                </h1>
                <RequestResetForm />
                <hr class="my-8 border-stone-700" />
                <ConfirmResetForm />
            </div>
        </AppShell>
    }
}

#[component]
fn RequestResetForm() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let captcha_solution = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (message, set_message) = signal::<Option<String>>(None);

    let challenge =
        LocalResource::new(move || async move { captcha::client::fetch_challenge().await });

    let request_action = Action::new_local(move |request: &PasswordResetRequest| {
        let request = request.clone();
        async move { client::request_password_reset(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = request_action.value().get() {
            match result {
                Ok(response) => set_message.set(Some(response.message)),
                Err(err) => {
                    if err.is_captcha_rejection() {
                        captcha_solution.set(String::new());
                        challenge.refetch();
                    }
                    set_error.set(Some(err));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_message.set(None);

        let username_value = username.get_untracked().trim().to_string();
        if username_value.is_empty() {
            set_error.set(Some(AppError::Validation(
                "Username is required.".to_string(),
            )));
            return;
        }
        let solution = captcha_solution.get_untracked().trim().to_string();
        if solution.is_empty() {
            set_error.set(Some(AppError::Validation(
                "Answer the security question.".to_string(),
            )));
            return;
        }
        let Some(Ok(current_challenge)) = challenge.get() else {
            set_error.set(Some(AppError::Validation(
                "The security question is still loading. Try again in a moment.".to_string(),
            )));
            return;
        };

        request_action.dispatch(PasswordResetRequest {
            username: username_value,
            captcha_id: current_challenge.id,
            captcha_solution: solution,
        });
    };

    view! {
        <form on:submit=on_submit>
            <p class="text-sm mb-4 text-center text-stone-300">
                "Forgot your password? Enter your username below and answer the security question."
            </p>
            <div class="mb-4">
                <label class=LABEL for="reset_username">"Username"</label>
                <input
                    id="reset_username"
                    type="text"
                    class=INPUT
                    autocomplete="username"
                    placeholder="Enter your username"
                    required
                    on:input=move |event| set_username.set(event_target_value(&event))
                />
            </div>
            <CaptchaField challenge=challenge solution=captcha_solution />
            <Button button_type="submit" disabled=request_action.pending()>
                "Request Password Reset"
            </Button>
            {move || {
                request_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                message
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
        </form>
    }
}

#[component]
fn ConfirmResetForm() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (reset_token, set_reset_token) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (message, set_message) = signal::<Option<String>>(None);

    let confirm_action = Action::new_local(move |request: &PasswordResetConfirmRequest| {
        let request = request.clone();
        async move { client::confirm_password_reset(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = confirm_action.value().get() {
            match result {
                Ok(response) => set_message.set(Some(response.message)),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_message.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let token_value = reset_token.get_untracked().trim().to_string();
        let password_value = new_password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        if username_value.is_empty() || token_value.is_empty() {
            set_error.set(Some(AppError::Validation(
                "Username and reset token are required.".to_string(),
            )));
            return;
        }
        if password_value != confirm_value {
            set_error.set(Some(AppError::Validation(
                "New passwords do not match.".to_string(),
            )));
            return;
        }
        if password_value.chars().count() < MIN_PASSWORD_LENGTH {
            set_error.set(Some(AppError::Validation(format!(
                "New password must be at least {MIN_PASSWORD_LENGTH} characters long."
            ))));
            return;
        }

        confirm_action.dispatch(PasswordResetConfirmRequest {
            username: username_value,
            token: token_value,
            new_password: password_value,
        });
    };

    view! {
        <form on:submit=on_submit>
            <h2 class="text-xl text-amber-200 text-center mb-4">"Confirm Reset"</h2>
            <div class="mb-4">
                <label class=LABEL for="confirm_username">"Username"</label>
                <input
                    id="confirm_username"
                    type="text"
                    class=INPUT
                    autocomplete="username"
                    placeholder="Your username"
                    required
                    on:input=move |event| set_username.set(event_target_value(&event))
                />
            </div>
            <div class="mb-4">
                <label class=LABEL for="reset_token">"Reset Token"</label>
                <input
                    id="reset_token"
                    type="text"
                    class=INPUT
                    autocomplete="off"
                    placeholder="Enter the reset token you received"
                    required
                    on:input=move |event| set_reset_token.set(event_target_value(&event))
                />
            </div>
            <div class="mb-4">
                <label class=LABEL for="reset_new_password">"New Password"</label>
                <input
                    id="reset_new_password"
                    type="password"
                    class=INPUT
                    autocomplete="new-password"
                    placeholder="Enter your new password"
                    required
                    minlength="6"
                    on:input=move |event| set_new_password.set(event_target_value(&event))
                />
            </div>
            <div class="mb-6">
                <label class=LABEL for="reset_confirm_password">"Confirm New Password"</label>
                <input
                    id="reset_confirm_password"
                    type="password"
                    class=INPUT
                    autocomplete="new-password"
                    placeholder="Confirm new password"
                    required
                    minlength="6"
                    on:input=move |event| set_confirm_password.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" disabled=confirm_action.pending()>
                "Set New Password"
            </Button>
            {move || {
                confirm_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                message
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
        </form>
    }
}
