/// Runtime value representation.
///
/// Defines the `Value` enum flowing through the evaluation stack together
/// with the accessors operators and functions use to validate their
/// arguments.
pub mod core;
