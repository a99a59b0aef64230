//! Language selection for the public store page.

use super::faq::{Faq, Translation};
use crate::config::{DEFAULT_LANGUAGE, FALLBACK_LANGUAGE};

/// Requested language, then the fallback language, then the oldest row.
pub fn select_translation<'a>(translations: &'a [Translation], language: &str) -> Option<&'a Translation> {
    let oldest_in = |lang: &str| {
        translations
            .iter()
            .filter(|t| t.language.eq_ignore_ascii_case(lang))
            .min_by_key(|t| t.id)
    };

    oldest_in(language)
        .or_else(|| oldest_in(FALLBACK_LANGUAGE))
        .or_else(|| translations.iter().min_by_key(|t| t.id))
}

/// Reduce the FAQ's translations to the single winning entry (or none).
pub fn localize(mut faq: Faq, language: &str) -> Faq {
    let winner = select_translation(&faq.translations, language).cloned();
    faq.translations = winner.into_iter().collect();
    faq
}

/// First language tag of an `Accept-Language` value, quality stripped.
pub fn preferred_language(header: Option<&str>) -> String {
    header
        .and_then(|h| h.split(',').next())
        .and_then(|tag| tag.split(';').next())
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && *tag != "*")
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Scope;

    fn tr(id: i32, language: &str) -> Translation {
        Translation {
            id,
            faq_id: 1,
            language: language.to_string(),
            question: format!("q-{language}"),
            answer: format!("a-{language}"),
        }
    }

    fn faq(translations: Vec<Translation>) -> Faq {
        Faq {
            id: 1,
            category_id: 1,
            scope: Scope::Global,
            category: None,
            translations,
        }
    }

    #[test]
    fn test_exact_match_wins() {
        let rows = vec![tr(1, "en"), tr(2, "fr")];
        assert_eq!(select_translation(&rows, "fr").map(|t| t.id), Some(2));
    }

    #[test]
    fn test_falls_back_to_english() {
        let rows = vec![tr(1, "fr"), tr(2, "en")];
        assert_eq!(select_translation(&rows, "de").map(|t| t.id), Some(2));
    }

    #[test]
    fn test_falls_back_to_oldest_row() {
        let rows = vec![tr(9, "it"), tr(4, "es")];
        assert_eq!(select_translation(&rows, "de").map(|t| t.language.as_str()), Some("es"));
    }

    #[test]
    fn test_localize_keeps_one_or_none() {
        assert_eq!(localize(faq(vec![tr(1, "en"), tr(2, "fr")]), "fr").translations.len(), 1);
        assert!(localize(faq(vec![]), "fr").translations.is_empty());
    }

    #[test]
    fn test_preferred_language_from_header() {
        assert_eq!(preferred_language(None), "en");
        assert_eq!(preferred_language(Some("")), "en");
        assert_eq!(preferred_language(Some("*")), "en");
        assert_eq!(preferred_language(Some("fr")), "fr");
        assert_eq!(preferred_language(Some("fr-CH, fr;q=0.9, en;q=0.8")), "fr-CH");
        assert_eq!(preferred_language(Some("de;q=0.7")), "de");
    }
}
