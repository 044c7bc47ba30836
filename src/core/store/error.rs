//! Store error type

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::core::coffee::CoffeeId;

/// Errors raised by [`super::CoffeeStore`]
#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("storage error while {context}: {source}")]
    #[diagnostic(
        code(coffee::store::sqlite),
        help("check that the database file is readable, writable and not locked by another program")
    )]
    Sqlite {
        context: &'static str,
        source: rusqlite::Error,
    },

    #[error("row holds an invalid {column}: {message}")]
    #[diagnostic(code(coffee::store::invalid_row))]
    InvalidRow { column: String, message: String },

    #[error("could not create database directory {path:?}: {source}")]
    #[diagnostic(code(coffee::store::io))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("refusing to store {field} {value}: it must be a number greater than zero")]
    #[diagnostic(code(coffee::store::invalid_value))]
    InvalidValue { field: &'static str, value: f64 },

    #[error("no coffee with id {0}")]
    #[diagnostic(code(coffee::store::not_found), help("run `coffee list` to see the current ids"))]
    NotFound(CoffeeId),
}

impl StoreError {
    /// Build a mapper that attaches `context` to a rusqlite failure
    ///
    /// Conversion failures on enum columns become [`StoreError::InvalidRow`].
    pub(crate) fn sqlite(context: &'static str) -> impl Fn(rusqlite::Error) -> StoreError {
        move |source| match source {
            rusqlite::Error::FromSqlConversionFailure(idx, _, err) => StoreError::InvalidRow {
                column: column_name(idx).to_string(),
                message: err.to_string(),
            },
            source => StoreError::Sqlite { context, source },
        }
    }

    /// True for the not-found case
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

fn column_name(idx: usize) -> &'static str {
    match idx {
        0 => "id",
        1 => "name",
        2 => "roast_degree",
        3 => "type",
        4 => "description",
        5 => "price",
        6 => "volume",
        _ => "column",
    }
}
