//! Style lookup and validation errors.

/// Error returned by catalog lookups and name parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// No style with this id is registered.
    #[error("unknown style '{id}'. Available: {}", .available.join(", "))]
    NotFound { id: String, available: Vec<String> },
    /// A category name did not parse.
    #[error("unknown category '{name}'. Expected one of: basic, serif, script, fancy, decoration")]
    UnknownCategory { name: String },
    /// A decoration mark name did not parse.
    #[error(
        "unknown decoration '{name}'. Expected one of: underline, double_underline, strikethrough, wave"
    )]
    UnknownMark { name: String },
    /// Two catalog entries share an id.
    #[error("style id '{id}' is registered more than once")]
    DuplicateId { id: String },
}
