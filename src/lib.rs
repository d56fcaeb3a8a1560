//! # SRPN
//!
//! An emulation of SRPN, a reverse polish notation calculator with
//! saturating 32-bit integer arithmetic.
//!
//! Begin by opening a terminal and running the executable, then type
//! expressions in postfix form. `=` prints the top of the stack, `d`
//! dumps the whole stack, and `r` pushes the next value of the
//! calculator's famously fixed "random" sequence.
//! ```text
//! 10 2 ^ =
//! 100
//! ```
//!
//! The quirks of the original are reproduced faithfully: a 23-element
//! stack limit, arithmetic that clamps at the `i32` rails instead of
//! wrapping, and the `^=` idiom that echoes the preceding digit.

pub mod lang;
pub mod mach;
pub mod term;
