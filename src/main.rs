//! # SRPN
//!
//! The saturating reverse polish notation calculator.

fn main() {
    srpn::term::main()
}
