/// Expression errors.
///
/// Defines every structural and semantic failure that can occur while
/// splitting, tokenizing, converting or evaluating an expression, as well as
/// name collisions detected at registration time.
pub mod expression_error;
/// Usage errors.
///
/// Raised when a caller breaks the contract of the API itself, for instance by
/// passing an empty expression or registering an operator without a name.
pub mod usage_error;

pub use expression_error::{CallableKind, ExpressionError};
pub use usage_error::UsageError;

/// Any error produced by the library.
///
/// Callers that only care whether an expression is valid can match on
/// [`Error::Expression`]; [`Error::Usage`] signals a bug on the calling side.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The API was used incorrectly.
    #[error(transparent)]
    Usage(#[from] UsageError),
    /// The expression (or a registration) is invalid.
    #[error(transparent)]
    Expression(#[from] ExpressionError),
}

/// Result type returned by the public entry points.
pub type Result<T> = std::result::Result<T, Error>;
