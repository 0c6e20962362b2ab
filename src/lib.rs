//! # agromatch
//!
//! Batch matcher for agricultural product data.
//!
//! agromatch matches user-supplied records against reference datasets with
//! two independent strategies:
//!
//! - **Fertilizers**: nearest-neighbor matching of N-P-K composition
//!   triples by Euclidean distance, annotating each user row with the
//!   closest reference fertilizer.
//! - **Pesticides**: multilingual substance lookup — user substance names
//!   are normalized to the product database's language through a fixed
//!   bilingual table, then matched by case-insensitive substring
//!   containment, fanning out one row per containing product.
//!
//! ## Quick Start
//!
//! ### As a Tool
//!
//! ```bash
//! agromatch request.json response.json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use agromatch::prelude::*;
//!
//! let users = Table::from_rows(
//!     vec!["N".into(), "P".into(), "K".into()],
//!     vec![vec!["10".into(), "10".into(), "10".into()]],
//! );
//! let references = Table::from_rows(
//!     vec!["Nome".into(), "N".into(), "P".into(), "K".into()],
//!     vec![
//!         vec!["A".into(), "10".into(), "10".into(), "10".into()],
//!         vec!["B".into(), "0".into(), "0".into(), "0".into()],
//!     ],
//! );
//! let annotated = match_compositions(&users, &references).unwrap();
//! assert_eq!(annotated.rows()[0].last().unwrap(), "A");
//! ```
//!
//! ## Crate Structure
//!
//! agromatch is composed of several crates:
//!
//! - `agromatch-core` - The matching engine (triples, tables, language
//!   table, both matchers, typed errors)
//! - `agromatch-storage` - CSV I/O with per-file encodings and
//!   object-store transfer
//! - `agromatch-api` - The request/response envelope and mode dispatcher

// Re-export core types
pub use agromatch_core::{
    match_compositions, match_substances, nearest, nearest_matches, normalize, Error,
    MatchedComposition, NpkTriple, ReferenceComposition, Result, SubstanceMatch, Table, TableId,
    REFERENCE_LANGUAGE,
};

// Re-export storage
pub use agromatch_storage::{
    CsvFormat, HttpObjectStore, LocalObjectStore, ObjectStore, StoreConfig, TextEncoding,
};

// Re-export API
pub use agromatch_api::{run, run_with_store, Request, Response, Status};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        match_compositions, match_substances, nearest, nearest_matches, normalize, Error,
        MatchedComposition, NpkTriple, ObjectStore, ReferenceComposition, Request, Response,
        Result, Status, SubstanceMatch, Table, TableId, REFERENCE_LANGUAGE,
    };
}
