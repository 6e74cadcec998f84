use thiserror::Error;

/// Errors that reject a listing query outright.
///
/// Both variants are caller mistakes. Irregular item data never produces one
/// of these; it just fails to match.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid query: page size must be a positive integer")]
    InvalidPageSize,
    #[error("Invalid query: unknown sort key '{0}'")]
    UnknownSortKey(String),
}

/// Error returned when a string names no member of a closed enumeration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseVariantError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseVariantError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
