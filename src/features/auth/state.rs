//! Session state and context for the console. The session service is
//! constructed once by [`AuthProvider`] and shared through Leptos context;
//! every state change funnels through a single transition function so the
//! lifecycle stays testable. Only the bearer token is persisted; the profile
//! is rebuilt from the API on every load.

use crate::app_lib::AppError;
use crate::features::auth::{client, storage, types::UserProfile};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Debug, PartialEq)]
/// Authentication lifecycle. `Authenticated` is the only state carrying a
/// token and profile, so a half-set session cannot be represented.
pub enum SessionState {
    Uninitialized,
    Loading,
    Authenticated { token: String, profile: UserProfile },
    Anonymous,
}

impl SessionState {
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated { profile, .. } => Some(profile),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Everything that can advance the session lifecycle.
pub enum SessionEvent {
    HydrationStarted,
    NoStoredToken,
    LoginStarted,
    ProfileLoaded { token: String, profile: UserProfile },
    ProfileRejected,
    LoggedOut,
}

/// The one place session state advances. A profile can only land while the
/// session is Loading; stray events leave the state untouched.
fn transition(state: &SessionState, event: SessionEvent) -> SessionState {
    use SessionEvent::*;
    use SessionState::*;

    match (state, event) {
        (Uninitialized, HydrationStarted) => Loading,
        (Uninitialized, NoStoredToken) => Anonymous,
        (_, LoginStarted) => Loading,
        (Loading, ProfileLoaded { token, profile }) => Authenticated { token, profile },
        (Loading, ProfileRejected) => Anonymous,
        (_, LoggedOut) => Anonymous,
        (current, _) => current.clone(),
    }
}

#[derive(Clone, Copy)]
/// Session service shared through Leptos context.
pub struct AuthContext {
    state: RwSignal<SessionState>,
    pub is_loading: Signal<bool>,
    pub is_authenticated: Signal<bool>,
    pub is_admin: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided state signal.
    fn new(state: RwSignal<SessionState>) -> Self {
        let is_loading = Signal::derive(move || {
            matches!(
                state.get(),
                SessionState::Uninitialized | SessionState::Loading
            )
        });
        let is_authenticated =
            Signal::derive(move || matches!(state.get(), SessionState::Authenticated { .. }));
        let is_admin = Signal::derive(move || {
            state
                .get()
                .profile()
                .is_some_and(|profile| profile.is_admin)
        });
        Self {
            state,
            is_loading,
            is_authenticated,
            is_admin,
        }
    }

    /// Current state, tracked; guards and views re-evaluate on change.
    pub fn session(&self) -> SessionState {
        self.state.get()
    }

    /// Cached profile of the signed-in account, tracked.
    pub fn profile(&self) -> Option<UserProfile> {
        self.state.get().profile().cloned()
    }

    /// Bearer token for outgoing calls, untracked; request helpers should not
    /// re-run on session changes.
    pub fn token(&self) -> Option<String> {
        self.state.get_untracked().token().map(str::to_string)
    }

    /// Single mutation entry point.
    fn apply(&self, event: SessionEvent) {
        self.state
            .update(|state| *state = transition(state, event));
    }

    /// Persists the freshly issued token and establishes the session by
    /// fetching the profile it belongs to. On failure the persisted token is
    /// cleared and the session ends up Anonymous with the error propagated.
    pub async fn login(&self, token: String) -> Result<UserProfile, AppError> {
        storage::store_token(&token);
        self.apply(SessionEvent::LoginStarted);
        match client::fetch_current_user(&token).await {
            Ok(profile) => {
                self.apply(SessionEvent::ProfileLoaded {
                    token,
                    profile: profile.clone(),
                });
                Ok(profile)
            }
            Err(err) => {
                storage::clear_token();
                self.apply(SessionEvent::ProfileRejected);
                Err(err)
            }
        }
    }

    /// Clears the persisted token and the in-memory session. Idempotent and
    /// purely local; no network call is made.
    pub fn logout(&self) {
        storage::clear_token();
        self.apply(SessionEvent::LoggedOut);
    }

    /// Restores the session from the persisted token, if any. A token that no
    /// longer validates is dropped from storage.
    fn hydrate(&self) {
        match storage::load_token() {
            Some(token) => {
                self.apply(SessionEvent::HydrationStarted);
                let this = *self;
                spawn_local(async move {
                    match client::fetch_current_user(&token).await {
                        Ok(profile) => this.apply(SessionEvent::ProfileLoaded { token, profile }),
                        Err(_) => {
                            storage::clear_token();
                            this.apply(SessionEvent::ProfileRejected);
                        }
                    }
                });
            }
            None => self.apply(SessionEvent::NoStoredToken),
        }
    }
}

/// Provides the session context and hydrates it once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(RwSignal::new(SessionState::Uninitialized));
    provide_context(auth);
    auth.hydrate();

    view! { {children()} }
}

/// Returns the current session context or a fallback anonymous context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(SessionState::Anonymous)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: 1,
            username: "SYLVANAS".to_string(),
            email: "sylvanas@undercity.example".to_string(),
            email_verified: true,
            is_admin: false,
            locked: false,
        }
    }

    #[test]
    fn login_walks_anonymous_loading_authenticated() {
        let state = transition(&SessionState::Anonymous, SessionEvent::LoginStarted);
        assert_eq!(state, SessionState::Loading);

        let state = transition(
            &state,
            SessionEvent::ProfileLoaded {
                token: "issued-token".to_string(),
                profile: profile(),
            },
        );
        match state {
            SessionState::Authenticated { token, profile } => {
                assert_eq!(token, "issued-token");
                assert_eq!(profile.username, "SYLVANAS");
            }
            other => panic!("expected Authenticated, got {other:?}"),
        }
    }

    #[test]
    fn rejected_profile_ends_anonymous() {
        let state = transition(&SessionState::Loading, SessionEvent::ProfileRejected);
        assert_eq!(state, SessionState::Anonymous);
    }

    #[test]
    fn hydration_without_token_is_anonymous() {
        let state = transition(&SessionState::Uninitialized, SessionEvent::NoStoredToken);
        assert_eq!(state, SessionState::Anonymous);
    }

    #[test]
    fn hydration_with_token_loads_then_authenticates() {
        let state = transition(&SessionState::Uninitialized, SessionEvent::HydrationStarted);
        assert_eq!(state, SessionState::Loading);

        let state = transition(
            &state,
            SessionEvent::ProfileLoaded {
                token: "stored-token".to_string(),
                profile: profile(),
            },
        );
        assert_eq!(state.token(), Some("stored-token"));
    }

    #[test]
    fn logout_is_idempotent() {
        let authenticated = SessionState::Authenticated {
            token: "issued-token".to_string(),
            profile: profile(),
        };
        let state = transition(&authenticated, SessionEvent::LoggedOut);
        assert_eq!(state, SessionState::Anonymous);

        let state = transition(&state, SessionEvent::LoggedOut);
        assert_eq!(state, SessionState::Anonymous);
    }

    #[test]
    fn profile_cannot_land_outside_loading() {
        let event = SessionEvent::ProfileLoaded {
            token: "issued-token".to_string(),
            profile: profile(),
        };
        assert_eq!(
            transition(&SessionState::Anonymous, event.clone()),
            SessionState::Anonymous
        );
        assert_eq!(
            transition(&SessionState::Uninitialized, event),
            SessionState::Uninitialized
        );
    }
}
