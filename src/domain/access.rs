//! FAQ access policy.
//!
//! Pure decisions from (role, scope). Merchant decisions that depend on
//! store ownership come back as [`Decision::RequireOwnership`] and are
//! settled by [`authorize`] through a [`StoreOwnership`] lookup, so the
//! single-item checks and the list predicate share one table.

use async_trait::async_trait;

use super::faq::Scope;
use super::role::{Identity, Role};
use crate::errors::{AppError, AppResult};

/// Outcome of a policy check before any store lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
    /// Allowed only if the caller's own store has this id
    RequireOwnership(i32),
}

/// May `role` read an FAQ with this scope?
pub fn view_decision(role: Role, scope: &Scope) -> Decision {
    match (role, scope) {
        (Role::Admin, _) => Decision::Allow,
        (Role::Merchant, Scope::Global) => Decision::Allow,
        (Role::Merchant, Scope::Store(id)) => Decision::RequireOwnership(*id),
        (Role::Customer, Scope::Global) => Decision::Allow,
        (Role::Customer, Scope::Store(_)) => Decision::Deny,
    }
}

/// May `role` update or delete an FAQ with this scope?
pub fn manage_decision(role: Role, scope: &Scope) -> Decision {
    match (role, scope) {
        (Role::Admin, _) => Decision::Allow,
        (Role::Merchant, Scope::Global) => Decision::Deny,
        (Role::Merchant, Scope::Store(id)) => Decision::RequireOwnership(*id),
        (Role::Customer, _) => Decision::Deny,
    }
}

/// Resolves a merchant to the store they own.
#[async_trait]
pub trait StoreOwnership: Send + Sync {
    async fn merchant_store_id(&self, merchant_id: i32) -> AppResult<Option<i32>>;
}

/// Store owned by `merchant_id`, failing with `StoreNotFound` if none.
pub async fn resolve_merchant_store<O>(ownership: &O, merchant_id: i32) -> AppResult<i32>
where
    O: StoreOwnership + ?Sized,
{
    ownership
        .merchant_store_id(merchant_id)
        .await?
        .ok_or(AppError::StoreNotFound)
}

/// Settle a decision for `identity`, looking up their store only when needed.
pub async fn authorize<O>(decision: Decision, identity: &Identity, ownership: &O) -> AppResult<()>
where
    O: StoreOwnership + ?Sized,
{
    match decision {
        Decision::Allow => Ok(()),
        Decision::Deny => Err(AppError::UnauthorizedFaq),
        Decision::RequireOwnership(store_id) => {
            let own = resolve_merchant_store(ownership, identity.user_id).await?;
            if own == store_id {
                Ok(())
            } else {
                Err(AppError::UnauthorizedFaq)
            }
        }
    }
}

/// Row filter applied to FAQ listings, the set form of [`view_decision`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityFilter {
    All,
    GlobalOnly,
    /// Global FAQs plus those of any store owned by this merchant
    GlobalOrMerchantStores(i32),
}

impl VisibilityFilter {
    pub fn for_identity(identity: &Identity) -> Self {
        match identity.role {
            Role::Admin => VisibilityFilter::All,
            Role::Merchant => VisibilityFilter::GlobalOrMerchantStores(identity.user_id),
            Role::Customer => VisibilityFilter::GlobalOnly,
        }
    }

    /// In-memory evaluation; `owned_store` is the merchant's store, if any.
    pub fn admits(&self, scope: &Scope, owned_store: Option<i32>) -> bool {
        match (self, scope) {
            (VisibilityFilter::All, _) => true,
            (_, Scope::Global) => true,
            (VisibilityFilter::GlobalOnly, Scope::Store(_)) => false,
            (VisibilityFilter::GlobalOrMerchantStores(_), Scope::Store(id)) => {
                owned_store == Some(*id)
            }
        }
    }
}
