//! Store owned by a merchant.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::faq::FaqResponse;
use crate::config::STORE_NAME_SUFFIX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    pub id: i32,
    pub name: String,
    pub merchant_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Store {
    /// Name given to the store created at merchant registration
    pub fn default_name(merchant_name: &str) -> String {
        format!("{}{}", merchant_name, STORE_NAME_SUFFIX)
    }
}

/// Store as listed publicly
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StoreSummary {
    #[schema(example = 3)]
    pub id: i32,
    #[schema(example = "Jane's Store")]
    pub name: String,
    pub merchant_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Store> for StoreSummary {
    fn from(store: Store) -> Self {
        Self {
            id: store.id,
            name: store.name,
            merchant_id: store.merchant_id,
            created_at: store.created_at,
        }
    }
}

/// Public store page: the store plus its own and all global FAQs, localized
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StoreWithFaqs {
    #[serde(flatten)]
    pub store: StoreSummary,
    pub faqs: Vec<FaqResponse>,
}
