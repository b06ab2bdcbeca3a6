use serde::{Deserialize, Serialize};

/// Role
///
/// The role carried by an authenticated session. Only `admin` and `user` are
/// given dedicated route trees; anything else the host reports (a future
/// role, a typo, stale storage) lands on `Unrecognized` and is sent back to
/// the login screen rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    #[serde(other)]
    Unrecognized,
}

impl Role {
    /// Maps a raw role string to the closed set. Matching is exact, so
    /// `"Admin"` is unrecognized while `"admin"` is not.
    pub fn parse(raw: &str) -> Role {
        match raw {
            "admin" => Role::Admin,
            "user" => Role::User,
            _ => Role::Unrecognized,
        }
    }
}

/// SessionUser
///
/// The slice of the signed-in user the routing layer cares about. The full
/// profile record lives in [`crate::models::User`]; this is only what the
/// host application resolved at login time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUser {
    pub role: Role,
}

/// Session
///
/// A snapshot of the caller's authentication state, owned and kept current by
/// the host application. Route selection is a pure function of this value:
/// it never refreshes tokens, never talks to the network, and treats an
/// authenticated session without a user record as not signed in at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub user: Option<SessionUser>,
}

impl Session {
    /// A session for a visitor who has not signed in.
    pub fn guest() -> Session {
        Session {
            is_authenticated: false,
            user: None,
        }
    }

    /// A signed-in session carrying the given role.
    pub fn signed_in(role: Role) -> Session {
        Session {
            is_authenticated: true,
            user: Some(SessionUser { role }),
        }
    }

    /// The session role, if the session is authenticated and carries one.
    pub fn role(&self) -> Option<Role> {
        if !self.is_authenticated {
            return None;
        }
        self.user.as_ref().map(|user| user.role)
    }
}
