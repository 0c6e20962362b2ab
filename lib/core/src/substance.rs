//! Cross-language substring matching of substance names against products
//!
//! Fan-out matcher: every product whose composition field contains the
//! normalized query term contributes one output row. O(queries × products)
//! containment tests; no inverted index.

use crate::error::Result;
use crate::langmap;
use crate::record::{SubstanceMatch, TableId};
use crate::table::Table;

/// Column holding the user's substance names
pub const SUBSTANCE_COLUMN: &str = "ACTIVE_SUBSTANCES";

/// Product database column holding product names
pub const PRODUCT_COLUMN: &str = "PRODOTTO";

/// Product database column holding the substance-composition string
pub const COMPOSITION_COLUMN: &str = "SOSTANZE_ATTIVE";

/// Match user substance queries against the product database
///
/// Each query term is normalized from `input_language` to the reference
/// language via the static mapping table, then tested for case-insensitive
/// substring containment in every product's composition field. Empty cells
/// on either side never match and never raise. A query with no hits
/// contributes nothing to the output.
pub fn match_substances(
    queries: &Table,
    products: &Table,
    input_language: &str,
    db_language: &str,
) -> Result<Vec<SubstanceMatch>> {
    let substance_col = queries.require_column(TableId::ActiveSubstances, SUBSTANCE_COLUMN)?;
    let product_col = products.require_column(TableId::PesticidesDataset, PRODUCT_COLUMN)?;
    let composition_col = products.require_column(TableId::PesticidesDataset, COMPOSITION_COLUMN)?;

    let input_tag = input_language.trim().to_lowercase();
    let mut matches = Vec::new();

    for row in queries.rows() {
        let raw = row[substance_col].trim();
        let needle = langmap::normalize(raw, input_language).to_lowercase();
        if needle.is_empty() {
            // An empty needle would be contained in every composition
            continue;
        }
        for product in products.rows() {
            let composition = &product[composition_col];
            if composition.is_empty() {
                continue;
            }
            if composition.to_lowercase().contains(&needle) {
                matches.push(SubstanceMatch {
                    input_substance: raw.to_string(),
                    product: product[product_col].clone(),
                    substances: composition.clone(),
                    input_language: input_tag.clone(),
                    db_language: db_language.to_string(),
                });
            }
        }
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn queries(substances: &[&str]) -> Table {
        Table::from_rows(
            vec![SUBSTANCE_COLUMN.into()],
            substances.iter().map(|s| vec![s.to_string()]).collect(),
        )
    }

    fn products(rows: &[(&str, &str)]) -> Table {
        Table::from_rows(
            vec![PRODUCT_COLUMN.into(), COMPOSITION_COLUMN.into()],
            rows.iter()
                .map(|(name, composition)| vec![name.to_string(), composition.to_string()])
                .collect(),
        )
    }

    #[test]
    fn test_translated_query_matches_reference_language_product() {
        let db = products(&[
            ("X", "contains glifosato and other agents"),
            ("Y", "no match here"),
        ]);
        let matches =
            match_substances(&queries(&["Glyphosate"]), &db, "english", "italiano").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].product, "X");
        assert_eq!(matches[0].input_substance, "Glyphosate");
        assert_eq!(matches[0].substances, "contains glifosato and other agents");
        assert_eq!(matches[0].input_language, "english");
        assert_eq!(matches[0].db_language, "italiano");
    }

    #[test]
    fn test_fan_out_one_row_per_containing_product() {
        let db = products(&[
            ("A", "GLIFOSATO 30%"),
            ("B", "rame, glifosato"),
            ("C", "acetamiprid"),
        ]);
        let matches =
            match_substances(&queries(&["glyphosate"]), &db, "english", "italiano").unwrap();
        assert_eq!(matches.len(), 2);
        let names: Vec<&str> = matches.iter().map(|m| m.product.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_unknown_language_falls_back_to_verbatim_match() {
        let db = products(&[("X", "glifosato puro")]);
        let matches =
            match_substances(&queries(&["Glifosato"]), &db, "klingon", "italiano").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].input_language, "klingon");
    }

    #[test]
    fn test_cyrillic_query_is_translated() {
        let db = products(&[("X", "Glifosato 360 g/l")]);
        let matches = match_substances(&queries(&["глифосат"]), &db, "srpski", "italiano").unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_empty_composition_never_matches() {
        let db = products(&[("X", ""), ("Y", "glifosato")]);
        let matches =
            match_substances(&queries(&["glifosato"]), &db, "italiano", "italiano").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].product, "Y");
    }

    #[test]
    fn test_no_hits_yield_empty_output() {
        let db = products(&[("X", "solfato di rame")]);
        let matches =
            match_substances(&queries(&["glyphosate"]), &db, "english", "italiano").unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_missing_columns_name_the_right_table() {
        let bad_queries = Table::from_rows(vec!["SUBSTANCE".into()], vec![vec!["x".into()]]);
        let db = products(&[("X", "glifosato")]);
        match match_substances(&bad_queries, &db, "italiano", "italiano") {
            Err(Error::MissingColumn { table, column }) => {
                assert_eq!(table, TableId::ActiveSubstances);
                assert_eq!(column, SUBSTANCE_COLUMN);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let bad_db = Table::from_rows(
            vec![PRODUCT_COLUMN.into()],
            vec![vec!["X".into()]],
        );
        match match_substances(&queries(&["x"]), &bad_db, "italiano", "italiano") {
            Err(Error::MissingColumn { table, column }) => {
                assert_eq!(table, TableId::PesticidesDataset);
                assert_eq!(column, COMPOSITION_COLUMN);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
