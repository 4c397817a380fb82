//! Admin accounts and the identity of a signed-in admin.

use serde::{Deserialize, Serialize};

/// The identity returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    /// The admin's email address.
    pub email: String,
}

/// A stored admin credential row.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AdminAccount {
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: String,
}

impl std::fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccount")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
