/// Runtime numbers.
///
/// Defines `Number`, the value of every evaluated expression: an `INTEGER`
/// or a `REAL`. Mixed operands are promoted to real with a precision check.
pub mod number;

/// The runtime store.
///
/// Defines `GlobalMemory`, the single flat name → number mapping written by
/// assignments and read back by the caller once the program has run.
pub mod memory;

pub use memory::GlobalMemory;
pub use number::Number;
