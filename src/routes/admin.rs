use super::{GuardKind, RouteId, RouteTable};

/// Admin Route Tree
///
/// The user-management surface for the 'admin' role. The host wraps the tree
/// in [`super::AdminGuard`] before rendering.
///
/// Every path this table does not know, inside or outside `/admin`, lands on
/// the user list: an admin session has no shopping pages, so there is
/// nowhere else to send it.
pub fn admin_routes() -> RouteTable {
    RouteTable {
        guard: Some(GuardKind::Admin),
        // /admin bare is an index, not a page.
        index: Some(("/admin", "/admin/users")),
        entries: &[
            // /admin/users
            // The user list, also the fallback target for this tree.
            ("/admin/users", RouteId::AdminUsers),
            // /admin/users/:id/edit
            // Per-user editor (profile fields and role).
            ("/admin/users/:id/edit", RouteId::AdminUserEdit),
        ],
        fallback: "/admin/users",
    }
}
