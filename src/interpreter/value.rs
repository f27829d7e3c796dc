/// Runtime values and their conversions.
///
/// Defines the `Value` enum along with truthiness, numeric coercion and the
/// text rendering used by `print`, string concatenation and string equality.
pub mod core;
