/// The `Function` trait and the standard function set.
pub mod core;
/// `IF(condition, then, else)`.
pub mod condition;
/// `ADD_DAYS`, `FORMAT_DATE` and `NOW`.
pub mod date;
/// `REPLACE(source, regex, replacement)`.
pub mod replace;
