//! Nearest-neighbor matching of composition triples
//!
//! Brute-force minimum-distance scan, O(users × references). Expected
//! dataset sizes are tens to low thousands of rows, so no index is built.

use crate::error::{Error, Result};
use crate::record::{MatchedComposition, ReferenceComposition, TableId};
use crate::table::Table;
use crate::triple::NpkTriple;

/// The numeric columns both composition tables must expose
pub const REQUIRED_COLUMNS: [&str; 3] = ["N", "P", "K"];

/// Column holding the reference display names
pub const NAME_COLUMN: &str = "Nome";

/// Column appended to the user table with the matched reference name
pub const MATCH_COLUMN: &str = "Fertilizzante";

/// Find the reference composition nearest to `user` by Euclidean distance
///
/// Ties break toward the first reference at the minimum in iteration
/// order, so the result is deterministic for a fixed reference ordering.
pub fn nearest<'a>(
    user: &NpkTriple,
    references: &'a [ReferenceComposition],
) -> Result<&'a ReferenceComposition> {
    let mut best: Option<(&ReferenceComposition, f64)> = None;
    for reference in references {
        let distance = user.distance(&reference.npk);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((reference, distance)),
        }
    }
    best.map(|(reference, _)| reference)
        .ok_or(Error::EmptyReferenceSet)
}

/// Annotate every user triple with its nearest reference
///
/// Preserves input order and cardinality: one output record per input
/// triple. An empty user slice yields an empty output without consulting
/// the reference set; a non-empty one against an empty reference set is
/// `Error::EmptyReferenceSet`.
pub fn nearest_matches(
    users: &[NpkTriple],
    references: &[ReferenceComposition],
) -> Result<Vec<MatchedComposition>> {
    users
        .iter()
        .map(|user| {
            let reference = nearest(user, references)?;
            Ok(MatchedComposition {
                npk: *user,
                fertilizer: reference.name.clone(),
            })
        })
        .collect()
}

/// Match a user composition table against a reference table
///
/// Returns the user table with a [`MATCH_COLUMN`] appended naming the
/// nearest reference for each row; pass-through columns are untouched.
/// Both tables must expose the `N`/`P`/`K` columns and the reference
/// table must also carry [`NAME_COLUMN`].
pub fn match_compositions(users: &Table, references: &Table) -> Result<Table> {
    let user_cols = npk_columns(users, TableId::NpkValues)?;
    let reference_cols = npk_columns(references, TableId::FertilizerDataset)?;
    let name_col = references.require_column(TableId::FertilizerDataset, NAME_COLUMN)?;

    let user_triples = extract_triples(users, TableId::NpkValues, user_cols)?;
    let reference_set: Vec<ReferenceComposition> =
        extract_triples(references, TableId::FertilizerDataset, reference_cols)?
            .into_iter()
            .zip(references.rows())
            .map(|(npk, row)| ReferenceComposition::new(row[name_col].clone(), npk))
            .collect();

    let matches = nearest_matches(&user_triples, &reference_set)?;

    let mut headers = users.headers().to_vec();
    headers.push(MATCH_COLUMN.to_string());
    let mut annotated = Table::new(headers);
    for (row, matched) in users.rows().iter().zip(&matches) {
        let mut row = row.clone();
        row.push(matched.fertilizer.clone());
        annotated.push_row(row);
    }
    Ok(annotated)
}

fn npk_columns(table: &Table, id: TableId) -> Result<[usize; 3]> {
    let mut cols = [0usize; 3];
    for (slot, name) in cols.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = table.require_column(id, name)?;
    }
    Ok(cols)
}

fn extract_triples(table: &Table, id: TableId, cols: [usize; 3]) -> Result<Vec<NpkTriple>> {
    table
        .rows()
        .iter()
        .map(|row| {
            let mut values = [0f64; 3];
            for (value, (&col, name)) in values
                .iter_mut()
                .zip(cols.iter().zip(REQUIRED_COLUMNS))
            {
                let cell = row[col].trim();
                *value = cell.parse().map_err(|_| Error::InvalidNumber {
                    table: id,
                    column: name.to_string(),
                    value: cell.to_string(),
                })?;
            }
            Ok(NpkTriple::new(values[0], values[1], values[2]))
        })
        .collect()
}
