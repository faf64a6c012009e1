use serde::{Deserialize, Serialize};

/// Authorization level carried by a visitor's server-side session.
///
/// An enum rather than a raw "is admin" boolean so further roles can be
/// introduced without changing handler call sites. `Anonymous` is the
/// default for sessions that never logged in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Anonymous,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}
