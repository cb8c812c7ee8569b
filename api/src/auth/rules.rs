//! Named authorization predicates, one per endpoint rule.
//!
//! The superadmin bypass is evaluated first everywhere, and self-update
//! beats the role-3-target restriction in [`can_manage_user`].

use db::models::user::Role;

/// Create-user rule: an admin may not create superadmins or other admins.
/// Superadmins and instructors pass here; the global create-gate flag is
/// checked separately by the handler.
pub fn can_create_user(requester: Role, target: Role) -> bool {
    !(requester == Role::Admin && matches!(target, Role::SuperAdmin | Role::Admin))
}

/// Shared rule for update and status-toggle:
/// - superadmins may manage anyone;
/// - anyone may manage their own record, regardless of role;
/// - admins may manage users whose *stored* role is instructor.
///
/// `target_stored_role` is `None` when the target row is absent, which fails
/// the admin branch.
pub fn can_manage_user(
    requester: Role,
    requester_id: i64,
    target_id: i64,
    target_stored_role: Option<Role>,
) -> bool {
    if requester == Role::SuperAdmin {
        return true;
    }
    if requester_id == target_id {
        return true;
    }
    match requester {
        Role::Admin => target_stored_role == Some(Role::Instructor),
        _ => false,
    }
}

/// Staff rule for listings and group aggregates: superadmin or admin only.
pub fn is_staff(role: Role) -> bool {
    matches!(role, Role::SuperAdmin | Role::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_cannot_create_privileged_users() {
        assert!(!can_create_user(Role::Admin, Role::SuperAdmin));
        assert!(!can_create_user(Role::Admin, Role::Admin));
        assert!(can_create_user(Role::Admin, Role::Instructor));
    }

    #[test]
    fn superadmin_can_create_anyone() {
        assert!(can_create_user(Role::SuperAdmin, Role::SuperAdmin));
        assert!(can_create_user(Role::SuperAdmin, Role::Admin));
        assert!(can_create_user(Role::SuperAdmin, Role::Instructor));
    }

    #[test]
    fn superadmin_manages_anyone() {
        assert!(can_manage_user(Role::SuperAdmin, 1, 99, None));
        assert!(can_manage_user(Role::SuperAdmin, 1, 99, Some(Role::Admin)));
    }

    #[test]
    fn self_update_bypasses_role_checks() {
        assert!(can_manage_user(Role::Instructor, 7, 7, None));
        assert!(can_manage_user(Role::Admin, 7, 7, None));
    }

    #[test]
    fn admin_manages_instructors_only() {
        assert!(can_manage_user(Role::Admin, 1, 2, Some(Role::Instructor)));
        assert!(!can_manage_user(Role::Admin, 1, 2, Some(Role::Admin)));
        assert!(!can_manage_user(Role::Admin, 1, 2, Some(Role::SuperAdmin)));
        // Absent target cannot satisfy the stored-role condition.
        assert!(!can_manage_user(Role::Admin, 1, 2, None));
    }

    #[test]
    fn instructor_never_manages_others() {
        assert!(!can_manage_user(Role::Instructor, 1, 2, Some(Role::Instructor)));
    }

    #[test]
    fn staff_is_superadmin_or_admin() {
        assert!(is_staff(Role::SuperAdmin));
        assert!(is_staff(Role::Admin));
        assert!(!is_staff(Role::Instructor));
    }
}
