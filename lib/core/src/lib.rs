//! # agromatch Core
//!
//! Core matching engine for agromatch.
//!
//! Two independent pipelines share this crate and no state:
//!
//! - **Composition matching**: annotate every user N-P-K triple with the
//!   reference fertilizer minimizing Euclidean distance
//!   ([`composition::match_compositions`]).
//! - **Substance matching**: normalize a substance name through the static
//!   bilingual table ([`langmap`]) and fan out one row per product whose
//!   composition field contains it ([`substance::match_substances`]).
//!
//! Both matchers are pure functions of in-memory [`Table`] inputs: they
//! either return a complete result or raise a typed [`Error`], never a
//! partial output.
//!
//! ## Example
//!
//! ```rust
//! use agromatch_core::{match_compositions, Table};
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
//!
//! let annotated = match_compositions(&users, &references).unwrap();
//! assert_eq!(annotated.rows()[0].last().unwrap(), "A");
//! ```

pub mod composition;
pub mod error;
pub mod langmap;
pub mod record;
pub mod substance;
pub mod table;
pub mod triple;

pub use composition::{match_compositions, nearest, nearest_matches};
pub use error::{Error, Result};
pub use langmap::{normalize, REFERENCE_LANGUAGE};
pub use record::{MatchedComposition, ReferenceComposition, SubstanceMatch, TableId};
pub use substance::match_substances;
pub use table::Table;
pub use triple::NpkTriple;
