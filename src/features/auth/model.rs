use serde::{Deserialize, Serialize};

use crate::shared::constants::{ROLE_ADMIN, ROLE_SUPER};

/// Identity of the logged-in user as the backend reports it at login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN || self.role == ROLE_SUPER
    }
}

/// An authenticated session: bearer token plus the user it belongs to.
///
/// The `admin` flag comes straight from the login response; the role check
/// is kept as a fallback for tokens restored from persisted storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: AuthenticatedUser,
    pub admin: bool,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.admin || self.user.is_admin()
    }
}
