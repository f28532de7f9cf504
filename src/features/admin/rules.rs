//! Client-side safeguards for the moderation table. These only disable
//! controls in the UI; the backend re-checks every action.

use crate::features::admin::client::UserAction;
use crate::features::auth::types::UserProfile;

/// Whether the signed-in admin may apply `action` to `target`. Admins cannot
/// ban or demote themselves, cannot ban fellow admins, and promoting an admin
/// (or demoting a regular account) is meaningless.
pub fn action_allowed(action: UserAction, actor: &UserProfile, target: &UserProfile) -> bool {
    let is_self = actor.id == target.id;
    match action {
        UserAction::Ban => !is_self && !target.is_admin,
        UserAction::Unban => true,
        UserAction::Promote => !is_self && !target.is_admin,
        UserAction::Demote => !is_self && target.is_admin,
    }
}

/// Tooltip shown on a disabled control, if any.
pub fn disabled_reason(
    action: UserAction,
    actor: &UserProfile,
    target: &UserProfile,
) -> Option<&'static str> {
    let is_self = actor.id == target.id;
    match action {
        UserAction::Ban if is_self => Some("Cannot ban self"),
        UserAction::Ban if target.is_admin => Some("Cannot ban other admins"),
        UserAction::Demote if is_self => Some("Cannot demote self"),
        UserAction::Promote if is_self => Some("Cannot self-promote"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: u32, is_admin: bool) -> UserProfile {
        UserProfile {
            id,
            username: format!("USER{id}"),
            email: format!("user{id}@realms.example"),
            email_verified: true,
            is_admin,
            locked: false,
        }
    }

    #[test]
    fn admins_cannot_ban_themselves() {
        let admin = profile(1, true);
        assert!(!action_allowed(UserAction::Ban, &admin, &admin));
        assert_eq!(
            disabled_reason(UserAction::Ban, &admin, &admin),
            Some("Cannot ban self")
        );
    }

    #[test]
    fn admins_cannot_ban_other_admins() {
        let admin = profile(1, true);
        let peer = profile(2, true);
        assert!(!action_allowed(UserAction::Ban, &admin, &peer));
        assert_eq!(
            disabled_reason(UserAction::Ban, &admin, &peer),
            Some("Cannot ban other admins")
        );
    }

    #[test]
    fn regular_accounts_can_be_banned() {
        let admin = profile(1, true);
        let target = profile(2, false);
        assert!(action_allowed(UserAction::Ban, &admin, &target));
        assert_eq!(disabled_reason(UserAction::Ban, &admin, &target), None);
    }

    #[test]
    fn unban_is_unrestricted() {
        let admin = profile(1, true);
        let peer = profile(2, true);
        assert!(action_allowed(UserAction::Unban, &admin, &peer));
        assert!(action_allowed(UserAction::Unban, &admin, &admin));
    }

    #[test]
    fn admins_cannot_demote_themselves() {
        let admin = profile(1, true);
        assert!(!action_allowed(UserAction::Demote, &admin, &admin));
        let peer = profile(2, true);
        assert!(action_allowed(UserAction::Demote, &admin, &peer));
    }

    #[test]
    fn promote_applies_only_to_regular_accounts() {
        let admin = profile(1, true);
        assert!(action_allowed(UserAction::Promote, &admin, &profile(2, false)));
        assert!(!action_allowed(UserAction::Promote, &admin, &profile(2, true)));
        assert!(!action_allowed(UserAction::Promote, &admin, &admin));
    }
}
