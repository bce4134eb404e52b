use thiserror::Error;

/// Errors produced by type construction and parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    #[error("invalid scalar literal for {data_type}: {literal:?}")]
    InvalidLiteral { data_type: String, literal: String },
}
