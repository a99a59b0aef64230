//! Translation-set reconciliation.
//!
//! Diffs the stored translations of an FAQ against the full desired set,
//! keyed by language. Nothing here touches the database.

use super::faq::{Translation, TranslationInput};

/// Row changes that turn the existing set into the desired one
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// (translation id, new content) for languages kept but changed
    pub to_update: Vec<(i32, TranslationInput)>,
    pub to_insert: Vec<TranslationInput>,
    /// Ids of rows whose language is no longer wanted
    pub to_delete: Vec<i32>,
}

impl ReconcilePlan {
    pub fn is_empty(&self) -> bool {
        self.to_update.is_empty() && self.to_insert.is_empty() && self.to_delete.is_empty()
    }
}

/// Collapse repeated languages; the last entry for a language wins,
/// positioned where that language first appeared.
pub fn dedup_by_language(inputs: &[TranslationInput]) -> Vec<TranslationInput> {
    let mut out: Vec<TranslationInput> = Vec::with_capacity(inputs.len());
    for input in inputs {
        match out.iter_mut().find(|t| t.language == input.language) {
            Some(slot) => *slot = input.clone(),
            None => out.push(input.clone()),
        }
    }
    out
}

/// Plan the changes needed so that `existing` ends up matching `desired`.
///
/// Rows whose content already matches are left alone. If `existing` holds
/// several rows for one language, the lowest id is kept and the rest are
/// deleted.
pub fn reconcile(existing: &[Translation], desired: &[TranslationInput]) -> ReconcilePlan {
    let desired = dedup_by_language(desired);

    let mut by_id: Vec<&Translation> = existing.iter().collect();
    by_id.sort_by_key(|t| t.id);

    let mut plan = ReconcilePlan::default();
    let mut kept: Vec<&str> = Vec::new();

    for row in by_id {
        let already_kept = kept.contains(&row.language.as_str());
        match desired.iter().find(|d| d.language == row.language) {
            Some(want) if !already_kept => {
                kept.push(row.language.as_str());
                if want.question != row.question || want.answer != row.answer {
                    plan.to_update.push((row.id, want.clone()));
                }
            }
            _ => plan.to_delete.push(row.id),
        }
    }

    plan.to_insert = desired
        .into_iter()
        .filter(|d| !kept.contains(&d.language.as_str()))
        .collect();

    plan
}
