#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all contract violations on the caller's side.
pub enum UsageError {
    /// Tried to evaluate an empty expression.
    #[error("Attempt to evaluate an empty expression.")]
    EmptyExpression,
    /// Tried to register an operator or function without a name.
    #[error("Attempt to add an operator or function without a name to {component}.")]
    EmptyName {
        /// The component the registration was addressed to.
        component: &'static str,
    },
    /// Tried to convert an empty token sequence.
    #[error("Attempt to convert an empty token sequence.")]
    EmptyInput,
}
