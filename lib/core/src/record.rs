use crate::triple::NpkTriple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which input table a schema error refers to
///
/// The names match the input keys of the request document, so a
/// `MissingColumn` message points straight at the offending upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    NpkValues,
    FertilizerDataset,
    ActiveSubstances,
    PesticidesDataset,
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableId::NpkValues => "npk_values",
            TableId::FertilizerDataset => "fertilizer_dataset",
            TableId::ActiveSubstances => "active_substances",
            TableId::PesticidesDataset => "pesticides_dataset",
        };
        f.write_str(name)
    }
}

/// One row of the fertilizer reference set: a display name plus its composition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceComposition {
    pub name: String,
    pub npk: NpkTriple,
}

impl ReferenceComposition {
    pub fn new(name: impl Into<String>, npk: NpkTriple) -> Self {
        Self {
            name: name.into(),
            npk,
        }
    }
}

/// A user triple annotated with the name of its nearest reference
///
/// The association is fixed at creation; the matcher never revisits it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchedComposition {
    pub npk: NpkTriple,
    pub fertilizer: String,
}

/// One query-product pairing produced by the substance matcher
///
/// A single query may yield zero, one, or many of these (fan-out).
/// Serializes directly to the output table columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubstanceMatch {
    /// The substance name exactly as the user entered it
    #[serde(rename = "INPUT_SUBSTANCE")]
    pub input_substance: String,
    /// Name of the matched product
    #[serde(rename = "PRODOTTO")]
    pub product: String,
    /// The product's full substance-composition string
    #[serde(rename = "SOSTANZE_ATTIVE")]
    pub substances: String,
    /// Declared input language tag, trimmed and lowercased
    #[serde(rename = "INPUT_LANG")]
    pub input_language: String,
    /// Declared database language tag
    #[serde(rename = "DB_LANG")]
    pub db_language: String,
}
