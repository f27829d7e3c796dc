/// Operator dispatch.
pub mod core;
/// Arithmetic and string concatenation.
pub mod scalar;
/// Equality and ordering comparisons.
pub mod comparison;
/// Short-circuiting `&&` and `||`.
pub mod logic;
