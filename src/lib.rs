//! Loopless mixed-radix Gray code enumeration and the fixed-length sequence
//! assembler built on top of it.
//!
//! Memory use of the eager entry points grows as `O(n * ∏ radix)`; the
//! iterator types in [`cs::combinatorial`] produce the same output one
//! vector at a time.

pub mod cs;
pub mod error;

pub use cs::combinatorial;
pub use error::{Error, Result};
