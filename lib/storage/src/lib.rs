//! # agromatch Storage
//!
//! Storage layer for agromatch: CSV table I/O with per-file delimiters and
//! text encodings, and object-store transfer behind the [`ObjectStore`]
//! trait.

pub mod object_store;
pub mod tables;

pub use object_store::{HttpObjectStore, LocalObjectStore, ObjectStore, StoreConfig};
pub use tables::{formats, read_table, write_records, write_table, CsvFormat, TextEncoding};
