use super::{RouteId, RouteTable};

/// Guest Route Tree
///
/// The paths a visitor can reach before signing in: the credential flows and
/// nothing else. Mounted whenever `is_authenticated` is false, regardless of
/// any role the session might still claim from a previous login.
///
/// There is no index redirect; the root path falls through to the catch-all
/// like every other unknown path and lands on the login page.
pub fn guest_routes() -> RouteTable {
    RouteTable {
        guard: None,
        index: None,
        entries: &[
            // /login
            // The sign-in form, also the fallback target for this tree.
            ("/login", RouteId::Login),
            // /register
            // New account creation.
            ("/register", RouteId::Register),
            // /forgot-password
            // Requests a reset link by email.
            ("/forgot-password", RouteId::ForgotPassword),
            // /reset-password
            // Redeems the mailed token; the token itself arrives in the query
            // string, which path matching ignores.
            ("/reset-password", RouteId::ResetPassword),
        ],
        fallback: "/login",
    }
}
