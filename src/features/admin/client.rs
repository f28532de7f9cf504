//! Client helpers for the admin endpoints. Paths stay centralized here; the
//! backend enforces authorization on every call.

use crate::{
    app_lib::{AppError, get_json, post_empty},
    features::auth::types::UserProfile,
};

/// Moderation verbs exposed by the user table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    Ban,
    Unban,
    Promote,
    Demote,
}

impl UserAction {
    fn path_segment(self) -> &'static str {
        match self {
            UserAction::Ban => "ban",
            UserAction::Unban => "unban",
            UserAction::Promote => "promote",
            UserAction::Demote => "demote",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            UserAction::Ban => "User banned successfully.",
            UserAction::Unban => "User unbanned successfully.",
            UserAction::Promote => "User promoted successfully.",
            UserAction::Demote => "User demoted successfully.",
        }
    }

    pub fn failure_label(self) -> &'static str {
        match self {
            UserAction::Ban => "Failed to ban user",
            UserAction::Unban => "Failed to unban user",
            UserAction::Promote => "Failed to promote user",
            UserAction::Demote => "Failed to demote user",
        }
    }
}

/// Fetches every registered account.
pub async fn list_users(token: &str) -> Result<Vec<UserProfile>, AppError> {
    get_json("/admin/users", Some(token)).await
}

/// Applies a moderation action to one account and returns its new profile.
pub async fn apply_user_action(
    action: UserAction,
    user_id: u32,
    token: &str,
) -> Result<UserProfile, AppError> {
    let path = format!("/admin/users/{user_id}/{}", action.path_segment());
    post_empty(&path, Some(token)).await
}

#[cfg(test)]
mod tests {
    use super::UserAction;

    #[test]
    fn path_segments_match_the_api() {
        assert_eq!(UserAction::Ban.path_segment(), "ban");
        assert_eq!(UserAction::Unban.path_segment(), "unban");
        assert_eq!(UserAction::Promote.path_segment(), "promote");
        assert_eq!(UserAction::Demote.path_segment(), "demote");
    }
}
