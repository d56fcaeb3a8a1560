/*!
# SRPN Language Module

This Rust module provides lexical analysis of SRPN input lines.

*/

mod error;
mod lex;

pub use error::Error;
pub use lex::lex;

pub mod token;
