/// The `Operator` trait, priority tiers and the standard operator set.
pub mod core;
/// `==`, `!=`, `<`, `<=`, `>`, `>=`.
pub mod comparison;
/// `+`, string concatenation with null absorption.
pub mod concat;
/// `&&`, `||` and `!`.
pub mod logic;
