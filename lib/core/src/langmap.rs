//! Bilingual substance-name normalization
//!
//! A fixed, hand-curated table of known substance-name translations per
//! supported language, keyed by language tag. Built once, never mutated,
//! safe to share across threads without locking.
//!
//! This is intentionally not a translation service: unmapped terms pass
//! through unchanged so the substring search can still try a literal match.

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::warn;

/// The language the product database is authored in; the normalization target
pub const REFERENCE_LANGUAGE: &str = "italiano";

type TermMap = HashMap<&'static str, &'static str>;

static LANGUAGE_TABLE: LazyLock<HashMap<&'static str, TermMap>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    // Reference language: terms are already canonical, nothing to map
    table.insert(REFERENCE_LANGUAGE, TermMap::new());
    table.insert(
        "english",
        HashMap::from([
            ("glyphosate", "glifosato"),
            ("acetamiprid", "acetamiprid"),
            ("imidacloprid", "imidacloprid"),
        ]),
    );
    table.insert("français", HashMap::from([("glyphosate", "glifosate")]));
    table.insert("deutsch", HashMap::from([("glyphosat", "glifosato")]));
    table.insert("nederlands", HashMap::from([("glyphosaat", "glifosato")]));
    table.insert("dutch", HashMap::from([("glyphosaat", "glifosato")]));
    table.insert("srpski", HashMap::from([("глифосат", "glifosato")]));
    table.insert("español", HashMap::from([("glifosato", "glifosato")]));
    table
});

/// Normalize a substance name from `language` to the reference language
///
/// The language tag is trimmed and matched case-insensitively. An
/// unrecognized tag falls back to the reference language; this is a
/// recovered condition (logged), never an error. Terms without a table
/// entry come back unchanged.
pub fn normalize(term: &str, language: &str) -> String {
    let tag = language.trim().to_lowercase();
    let mapping = match LANGUAGE_TABLE.get(tag.as_str()) {
        Some(mapping) => mapping,
        None => {
            warn!(
                language = %tag,
                "input language not recognized, using {REFERENCE_LANGUAGE}"
            );
            &LANGUAGE_TABLE[REFERENCE_LANGUAGE]
        }
    };
    match mapping.get(term.to_lowercase().as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => term.to_string(),
    }
}

/// Whether a language tag has an entry in the table
pub fn is_supported(language: &str) -> bool {
    LANGUAGE_TABLE.contains_key(language.trim().to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_term_is_translated() {
        assert_eq!(normalize("Glyphosate", "english"), "glifosato");
        assert_eq!(normalize("glyphosat", "deutsch"), "glifosato");
        assert_eq!(normalize("глифосат", "srpski"), "glifosato");
    }

    #[test]
    fn test_unmapped_term_passes_through() {
        assert_eq!(normalize("Copper sulfate", "english"), "Copper sulfate");
        assert_eq!(normalize("glifosato", "italiano"), "glifosato");
    }

    #[test]
    fn test_language_tag_is_trimmed_and_lowercased() {
        assert_eq!(normalize("glyphosate", "  English "), "glifosato");
    }

    #[test]
    fn test_unknown_language_falls_back_to_reference() {
        assert_eq!(
            normalize("Glifosato", "klingon"),
            normalize("Glifosato", REFERENCE_LANGUAGE)
        );
        assert!(!is_supported("klingon"));
        assert!(is_supported("dutch"));
    }

    #[test]
    fn test_idempotent_on_canonical_form() {
        for term in ["glyphosate", "acetamiprid", "imidacloprid"] {
            let canonical = normalize(term, "english");
            assert_eq!(normalize(&canonical, REFERENCE_LANGUAGE), canonical);
        }
    }
}
