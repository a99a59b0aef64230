//! Caller roles and the identity attached to each request.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{ROLE_ADMIN, ROLE_CUSTOMER, ROLE_MERCHANT};
use crate::errors::AppError;

/// User roles enumeration
///
/// Closed set: every authorization decision matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Merchant,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Merchant => ROLE_MERCHANT,
            Role::Customer => ROLE_CUSTOMER,
        }
    }

    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Admins and merchants may author FAQs
    pub fn is_staff(&self) -> bool {
        match self {
            Role::Admin | Role::Merchant => true,
            Role::Customer => false,
        }
    }

    /// Roles a user may pick for themselves at registration
    pub fn is_self_registrable(&self) -> bool {
        match self {
            Role::Merchant | Role::Customer => true,
            Role::Admin => false,
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_MERCHANT => Ok(Role::Merchant),
            ROLE_CUSTOMER => Ok(Role::Customer),
            _ => Err(AppError::UnsupportedRole),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated caller, resolved from the bearer token at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub role: Role,
}

impl Identity {
    pub fn new(user_id: i32, role: Role) -> Self {
        Self { user_id, role }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [Role::Admin, Role::Merchant, Role::Customer] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role_is_unsupported() {
        assert!(matches!("superuser".parse::<Role>(), Err(AppError::UnsupportedRole)));
        assert!(matches!("Admin".parse::<Role>(), Err(AppError::UnsupportedRole)));
    }

    #[test]
    fn test_admin_cannot_self_register() {
        assert!(!Role::Admin.is_self_registrable());
        assert!(Role::Merchant.is_self_registrable());
        assert!(Role::Customer.is_self_registrable());
    }
}
