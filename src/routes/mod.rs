/// Route Policy Module Index
///
/// Organizes the client-side navigation policy into role-segregated modules.
/// Exactly one tree is mounted per session state, so a path that exists for
/// one role simply does not exist for another; cross-role navigation lands on
/// the mounted tree's fallback redirect instead.
///
/// The three modules map directly to the defined access roles.

/// Routes shown to visitors who have not signed in.
pub mod guest;

/// Routes for a signed-in shopper, wrapped in the user guard.
pub mod user;

/// Routes restricted to the 'admin' role, wrapped in the admin guard.
pub mod admin;

use crate::session::{Role, Session};

// --- Selection ---

/// The three mutually exclusive route trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    Guest,
    User,
    Admin,
}

impl TreeKind {
    /// The table for this tree.
    pub fn routes(self) -> RouteTable {
        match self {
            TreeKind::Guest => guest::guest_routes(),
            TreeKind::User => user::user_routes(),
            TreeKind::Admin => admin::admin_routes(),
        }
    }
}

/// What to mount for a given session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeSelection {
    Mount(TreeKind),
    /// The session is authenticated but its role fits no tree. Defined
    /// behavior, not an error: the caller navigates back to the login page.
    RedirectToLogin,
}

/// Selects the route tree for a session.
///
/// Pure and stateless: the decision is re-evaluated from the live session on
/// every navigation, first match wins.
///
/// 1. Not authenticated, mount the guest tree (whatever the role claims).
/// 2. Role admin, mount the admin tree.
/// 3. Role user, mount the user tree.
/// 4. Anything else, back to login.
pub fn select_tree(session: &Session) -> TreeSelection {
    if !session.is_authenticated {
        return TreeSelection::Mount(TreeKind::Guest);
    }
    match session.role() {
        Some(Role::Admin) => TreeSelection::Mount(TreeKind::Admin),
        Some(Role::User) => TreeSelection::Mount(TreeKind::User),
        Some(Role::Unrecognized) | None => TreeSelection::RedirectToLogin,
    }
}

/// Resolves a browser path for a session in one step: tree selection, then
/// path lookup inside the selected tree.
pub fn resolve(session: &Session, path: &str) -> RouteDecision {
    match select_tree(session) {
        TreeSelection::Mount(kind) => kind.routes().resolve(path),
        TreeSelection::RedirectToLogin => RouteDecision::Redirect("/login"),
    }
}

// --- Route Tables ---

/// Every navigable page across all three trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteId {
    // Guest
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    // Admin
    AdminUsers,
    AdminUserEdit,
    // User
    Products,
    ProductDetails,
    Dashboard,
    Wishlist,
    Orders,
    OrderDetails,
    Addresses,
    AddressNew,
    AddressEdit,
    PaymentMethods,
    PaymentNewCard,
    PaymentNewPaypal,
    Checkout,
    Profile,
    LegalPrivacy,
    LegalTerms,
    LegalContact,
}

/// A matched route plus the values bound to its path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: RouteId,
    params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    /// The value bound to a `:name` segment, e.g. `param("productId")`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, value)| value.as_str())
    }
}

/// The outcome of resolving one browser path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Render(RouteMatch),
    Redirect(&'static str),
}

/// RouteTable
///
/// One tree's navigable paths plus its redirects. Tables are fixed at
/// compile time; resolution walks the entries in declaration order, literal
/// segments before parameterized ones where they could overlap.
#[derive(Debug, Clone)]
pub struct RouteTable {
    /// Guard the host must consult before rendering anything from this tree.
    guard: Option<GuardKind>,
    /// Index path and where it redirects.
    index: Option<(&'static str, &'static str)>,
    entries: &'static [(&'static str, RouteId)],
    /// Where every unmatched path lands.
    fallback: &'static str,
}

impl RouteTable {
    pub fn guard(&self) -> Option<GuardKind> {
        self.guard
    }

    /// Resolves a path against this table. Query strings, fragments, and
    /// trailing slashes are ignored; segment comparison is case-sensitive.
    pub fn resolve(&self, path: &str) -> RouteDecision {
        if let Some((pattern, target)) = self.index {
            if match_pattern(pattern, path).is_some() {
                return RouteDecision::Redirect(target);
            }
        }
        for (pattern, route) in self.entries {
            if let Some(params) = match_pattern(pattern, path) {
                return RouteDecision::Render(RouteMatch {
                    route: *route,
                    params,
                });
            }
        }
        RouteDecision::Redirect(self.fallback)
    }
}

/// Splits a path into its non-empty segments, dropping any query string or
/// fragment. Doubled and trailing slashes disappear here, which is the whole
/// normalization story.
fn segments_of(path: &str) -> impl Iterator<Item = &str> {
    path.split(['?', '#'])
        .next()
        .unwrap_or("")
        .split('/')
        .filter(|segment| !segment.is_empty())
}

/// Matches a path against a pattern segment by segment. `:name` segments
/// bind the corresponding path segment; everything else must match exactly.
fn match_pattern(pattern: &'static str, path: &str) -> Option<Vec<(&'static str, String)>> {
    let pattern_segments: Vec<&'static str> = segments_of(pattern).collect();
    let path_segments: Vec<&str> = segments_of(path).collect();
    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (pattern_segment, path_segment) in pattern_segments
        .iter()
        .copied()
        .zip(path_segments.iter().copied())
    {
        if let Some(name) = pattern_segment.strip_prefix(':') {
            params.push((name, path_segment.to_string()));
        } else if pattern_segment != path_segment {
            return None;
        }
    }
    Some(params)
}

// --- Guards ---

/// The guard a tree is wrapped in, named so the host can build or look up
/// the matching [`RouteGuard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    Admin,
    User,
}

impl GuardKind {
    pub fn guard(self) -> &'static dyn RouteGuard {
        match self {
            GuardKind::Admin => &AdminGuard,
            GuardKind::User => &UserGuard,
        }
    }
}

/// RouteGuard
///
/// Re-checks the session immediately before a guarded tree renders. Tree
/// selection already filtered by role, but the session can change between
/// selection and render; the guard is the second look.
pub trait RouteGuard: Send + Sync {
    fn admit(&self, session: &Session) -> bool;
}

/// Admits authenticated sessions carrying the admin role.
pub struct AdminGuard;

impl RouteGuard for AdminGuard {
    fn admit(&self, session: &Session) -> bool {
        session.is_authenticated && session.role() == Some(Role::Admin)
    }
}

/// Admits authenticated sessions carrying the user role.
pub struct UserGuard;

impl RouteGuard for UserGuard {
    fn admit(&self, session: &Session) -> bool {
        session.is_authenticated && session.role() == Some(Role::User)
    }
}
