//! Password change for the signed-in account. New-password checks run
//! locally; the current password is only ever verified by the server.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::auth::{RequireAuth, client, types::ChangePasswordRequest};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const INPUT: &str = "w-full rounded-lg border border-stone-600 bg-stone-800 px-3 py-2.5 text-sm text-stone-100 focus:border-amber-400 focus:ring-2 focus:ring-amber-300/30";
const LABEL: &str = "block mb-2 text-sm font-medium text-stone-200";

const MIN_PASSWORD_LENGTH: usize = 6;

fn validate_new_password(new_password: &str, confirm: &str) -> Result<(), AppError> {
    if new_password != confirm {
        return Err(AppError::Validation(
            "New passwords do not match.".to_string(),
        ));
    }
    if new_password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "New password must be at least {MIN_PASSWORD_LENGTH} characters long."
        )));
    }
    Ok(())
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <ChangePasswordForm />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn ChangePasswordForm() -> impl IntoView {
    let auth = use_auth();
    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (success, set_success) = signal(false);

    let change_action = Action::new_local(move |input: &(String, String)| {
        let (current, new) = input.clone();
        async move {
            let token = auth.token().ok_or_else(|| {
                AppError::Validation("Your session has expired. Log in again.".to_string())
            })?;
            let request = ChangePasswordRequest {
                current_password: current,
                new_password: new,
            };
            client::change_password(&request, &token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = change_action.value().get() {
            match result {
                Ok(_profile) => set_success.set(true),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_success.set(false);

        let current = current_password.get_untracked();
        let new = new_password.get_untracked();
        let confirm = confirm_password.get_untracked();

        if current.trim().is_empty() {
            set_error.set(Some(AppError::Validation(
                "Current password is required.".to_string(),
            )));
            return;
        }
        if let Err(err) = validate_new_password(&new, &confirm) {
            set_error.set(Some(err));
            return;
        }

        change_action.dispatch((current, new));
    };

    view! {
        <form class="max-w-md mx-auto rounded-xl border border-stone-700 bg-stone-900/80 p-6 shadow-lg" on:submit=on_submit>
            <h1 class="text-2xl font-semibold text-amber-300 text-center mb-6">
                "Change Your Password"
            </h1>
            <div class="mb-4">
                <label class=LABEL for="current_password">"Current Password"</label>
                <input
                    id="current_password"
                    type="password"
                    class=INPUT
                    autocomplete="current-password"
                    placeholder="Enter your current password"
                    required
                    on:input=move |event| set_current_password.set(event_target_value(&event))
                />
            </div>
            <div class="mb-4">
                <label class=LABEL for="new_password">"New Password"</label>
                <input
                    id="new_password"
                    type="password"
                    class=INPUT
                    autocomplete="new-password"
                    placeholder="Enter your new password (min. 6 chars)"
                    required
                    minlength="6"
                    on:input=move |event| set_new_password.set(event_target_value(&event))
                />
            </div>
            <div class="mb-6">
                <label class=LABEL for="confirm_new_password">"Confirm New Password"</label>
                <input
                    id="confirm_new_password"
                    type="password"
                    class=INPUT
                    autocomplete="new-password"
                    placeholder="Confirm your new password"
                    required
                    minlength="6"
                    on:input=move |event| set_confirm_password.set(event_target_value(&event))
                />
            </div>
            <Button button_type="submit" disabled=change_action.pending()>
                {move || if change_action.pending().get() { "Updating..." } else { "Update Password" }}
            </Button>
            {move || {
                change_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                success
                    .get()
                    .then_some(view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Success
                                message="Password changed successfully!".to_string()
                            />
                        </div>
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

#[cfg(test)]
mod tests {
    use super::validate_new_password;

    #[test]
    fn mismatch_is_rejected() {
        let err = validate_new_password("frostmourne", "frostmourn").expect_err("must fail");
        assert_eq!(err.to_string(), "New passwords do not match.");
    }

    #[test]
    fn short_new_password_is_rejected() {
        let err = validate_new_password("abc", "abc").expect_err("must fail");
        assert!(err.to_string().contains("at least 6 characters"));
    }

    #[test]
    fn valid_new_password_passes() {
        assert!(validate_new_password("frostmourne", "frostmourne").is_ok());
    }
}
