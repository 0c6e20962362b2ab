use crate::record::TableId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing column '{column}' in {table} table")]
    MissingColumn { table: TableId, column: String },

    #[error("Invalid numeric value '{value}' in column '{column}' of {table} table")]
    InvalidNumber {
        table: TableId,
        column: String,
        value: String,
    },

    #[error("Reference set is empty: no composition to match against")]
    EmptyReferenceSet,
}
