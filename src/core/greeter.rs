//! The greeting itself.

/// The fixed greeting returned by [`hello`].
pub const GREETING: &str = "Hello, World!";

/// Returns `"Hello, World!"`.
///
/// Pure and total: no input, no side effects, same value on every call.
pub const fn hello() -> &'static str {
    GREETING
}
