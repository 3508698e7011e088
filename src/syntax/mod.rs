//! A small syntax for parsing and printing formulas.
//!
//! The parser accepts Unicode connectives and their ASCII synonyms; the
//! printer always emits the canonical Unicode form. `parse(show(f))` is
//! structurally equal to `f` for every formula `parse` can produce.

pub mod lexer;
pub mod parser;
pub mod printer;

pub use parser::parse;
pub use printer::show;
