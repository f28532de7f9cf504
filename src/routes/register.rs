//! Registration route. Validates inputs locally before anything touches the
//! network, forwards the CAPTCHA solution untouched, and sends the user to
//! the login page once the account exists. A rejection that names the CAPTCHA
//! consumed the challenge, so a fresh one is fetched automatically.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, CaptchaField, Spinner};
use crate::features::auth::{client, types::RegisterRequest};
use crate::features::captcha;
use crate::routes::paths;
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const INPUT: &str = "w-full rounded-lg border border-stone-600 bg-stone-800 px-3 py-2.5 text-sm text-stone-100 focus:border-amber-400 focus:ring-2 focus:ring-amber-300/30";
const LABEL: &str = "block mb-2 text-sm font-medium text-stone-200";

/// Minimum password length enforced by the client for early UX feedback.
const MIN_PASSWORD_LENGTH: usize = 6;
/// Delay before the post-registration redirect to the login page.
const REDIRECT_DELAY_MS: u32 = 2_000;

#[derive(Clone)]
struct RegisterInput {
    username: String,
    email: String,
    password: String,
    captcha_id: String,
    captcha_solution: String,
}

fn is_valid_username(username: &str) -> bool {
    (3..=16).contains(&username.len())
        && username
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .split_once('.')
        .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
}

/// Client-side checks; nothing here reaches the server.
fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), AppError> {
    if username.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(AppError::Validation("All fields are required.".to_string()));
    }
    if password != confirm {
        return Err(AppError::Validation("Passwords do not match.".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long."
        )));
    }
    if !is_valid_username(username) {
        return Err(AppError::Validation(
            "Username must be 3-16 characters long and contain only letters, numbers, and underscores."
                .to_string(),
        ));
    }
    if !is_plausible_email(email) {
        return Err(AppError::Validation(
            "Please enter a valid email address.".to_string(),
        ));
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let captcha_solution = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (success, set_success) = signal(false);

    let challenge =
        LocalResource::new(move || async move { captcha::client::fetch_challenge().await });

    let register_action = Action::new_local(move |input: &RegisterInput| {
        let input = input.clone();
        async move {
            let request = RegisterRequest {
                username: input.username,
                email: input.email,
                password: input.password,
                captcha_id: input.captcha_id,
                captcha_solution: input.captcha_solution,
            };
            client::register(&request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_created) => {
                    set_success.set(true);
                    let navigate = navigate.clone();
                    Timeout::new(REDIRECT_DELAY_MS, move || {
                        navigate(paths::LOGIN, Default::default());
                    })
                    .forget();
                }
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
        set_success.set(false);

        let username_value = username.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        if let Err(err) = validate_registration(
            &username_value,
            &email_value,
            &password_value,
            &confirm_value,
        ) {
            set_error.set(Some(err));
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

        register_action.dispatch(RegisterInput {
            username: username_value,
            email: email_value,
            password: password_value,
            captcha_id: current_challenge.id,
            captcha_solution: solution,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-md mx-auto rounded-xl border border-stone-700 bg-stone-900/80 p-6 shadow-lg" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-amber-300 text-center mb-6">
                    "Create Account"
                </h1>
                <div class="mb-4">
                    <label class=LABEL for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        class=INPUT
                        autocomplete="username"
                        placeholder="Choose a username"
                        required
                        minlength="3"
                        maxlength="16"
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-4">
                    <label class=LABEL for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        class=INPUT
                        autocomplete="email"
                        placeholder="Enter your email"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-4">
                    <label class=LABEL for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class=INPUT
                        autocomplete="new-password"
                        placeholder="Create a password (min. 6 chars)"
                        required
                        minlength="6"
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-4">
                    <label class=LABEL for="confirm_password">"Confirm Password"</label>
                    <input
                        id="confirm_password"
                        type="password"
                        class=INPUT
                        autocomplete="new-password"
                        placeholder="Confirm your password"
                        required
                        minlength="6"
                        on:input=move |event| set_confirm_password.set(event_target_value(&event))
                    />
                </div>
                <CaptchaField challenge=challenge solution=captcha_solution />
                <Button button_type="submit" disabled=register_action.pending()>
                    "Register Account"
                </Button>
                {move || {
                    register_action
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
                                    message="Registration successful! Check your email to verify the account, then log in."
                                        .to_string()
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
                <p class="text-center mt-6 text-sm text-stone-400">
                    "Already have an account? "
                    <a href=paths::LOGIN class="text-amber-300 hover:underline">"Login here"</a>
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
    fn short_password_is_rejected_locally() {
        let err = validate_registration("ARTHAS", "arthas@northrend.example", "abc", "abc")
            .expect_err("short password must fail");
        assert!(err.to_string().contains("at least 6 characters"));
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let err = validate_registration(
            "ARTHAS",
            "arthas@northrend.example",
            "frostmourne",
            "frostmourn",
        )
        .expect_err("mismatch must fail");
        assert_eq!(err.to_string(), "Passwords do not match.");
    }

    #[test]
    fn username_charset_and_length_are_enforced() {
        assert!(is_valid_username("ARTHAS_99"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("a".repeat(17).as_str()));
        assert!(!is_valid_username("bad name"));
        assert!(!is_valid_username("bäd"));
    }

    #[test]
    fn email_plausibility() {
        assert!(is_plausible_email("jaina@theramore.example"));
        assert!(!is_plausible_email("jaina"));
        assert!(!is_plausible_email("jaina@theramore"));
        assert!(!is_plausible_email("jaina @theramore.example"));
        assert!(!is_plausible_email("@theramore.example"));
    }

    #[test]
    fn valid_input_passes() {
        assert!(
            validate_registration(
                "ARTHAS",
                "arthas@northrend.example",
                "frostmourne",
                "frostmourne",
            )
            .is_ok()
        );
    }
}
