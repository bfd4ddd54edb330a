use thiserror::Error;

pub type HgResult<T> = Result<T, HgError>;

/// Shared error taxonomy for every calculation in the workspace.
///
/// `NonFinite` is the non-finite refinement of an invalid input: callers
/// that only care about "bad argument" can match both variants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HgError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },
}
