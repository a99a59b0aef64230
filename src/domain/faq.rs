//! FAQ entity, its ownership scope and its translations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::category::Category;
use crate::errors::{AppError, AppResult};

/// Who owns an FAQ.
///
/// Persisted as the `is_global` / `store_id` column pair; this is the only
/// shape the rest of the crate sees, so a row that is both or neither
/// cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Global,
    Store(i32),
}

impl Scope {
    pub fn from_columns(is_global: bool, store_id: Option<i32>) -> AppResult<Self> {
        match (is_global, store_id) {
            (true, None) => Ok(Scope::Global),
            (false, Some(id)) => Ok(Scope::Store(id)),
            (is_global, store_id) => Err(AppError::internal(format!(
                "inconsistent FAQ scope: is_global={} store_id={:?}",
                is_global, store_id
            ))),
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Scope::Global)
    }

    pub fn store_id(&self) -> Option<i32> {
        match self {
            Scope::Global => None,
            Scope::Store(id) => Some(*id),
        }
    }
}

/// Stored translation row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub id: i32,
    pub faq_id: i32,
    pub language: String,
    pub question: String,
    pub answer: String,
}

/// Desired translation content, keyed by language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct TranslationInput {
    #[validate(length(min = 1, message = "Language is required"))]
    #[schema(example = "en")]
    pub language: String,
    #[validate(length(min = 1, message = "Question is required"))]
    #[schema(example = "How long does shipping take?")]
    pub question: String,
    #[validate(length(min = 1, message = "Answer is required"))]
    #[schema(example = "Three to five business days.")]
    pub answer: String,
}

/// FAQ with its category and translations loaded
#[derive(Debug, Clone)]
pub struct Faq {
    pub id: i32,
    pub category_id: i32,
    pub scope: Scope,
    /// `None` when the referenced category has since been deleted
    pub category: Option<Category>,
    /// Ordered by id, i.e. insertion order
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TranslationResponse {
    pub id: i32,
    pub faq_id: i32,
    pub language: String,
    pub question: String,
    pub answer: String,
}

impl From<Translation> for TranslationResponse {
    fn from(t: Translation) -> Self {
        Self {
            id: t.id,
            faq_id: t.faq_id,
            language: t.language,
            question: t.question,
            answer: t.answer,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FaqResponse {
    pub id: i32,
    pub category_id: i32,
    pub store_id: Option<i32>,
    pub is_global: bool,
    pub category: Option<Category>,
    pub translations: Vec<TranslationResponse>,
}

impl From<Faq> for FaqResponse {
    fn from(faq: Faq) -> Self {
        Self {
            id: faq.id,
            category_id: faq.category_id,
            store_id: faq.scope.store_id(),
            is_global: faq.scope.is_global(),
            category: faq.category,
            translations: faq.translations.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_from_consistent_columns() {
        assert_eq!(Scope::from_columns(true, None).unwrap(), Scope::Global);
        assert_eq!(Scope::from_columns(false, Some(7)).unwrap(), Scope::Store(7));
    }

    #[test]
    fn test_scope_rejects_inconsistent_columns() {
        assert!(Scope::from_columns(true, Some(7)).is_err());
        assert!(Scope::from_columns(false, None).is_err());
    }

    #[test]
    fn test_response_exposes_both_columns() {
        let faq = Faq {
            id: 1,
            category_id: 2,
            scope: Scope::Store(9),
            category: None,
            translations: vec![],
        };
        let response = FaqResponse::from(faq);
        assert_eq!(response.store_id, Some(9));
        assert!(!response.is_global);
    }
}
