//! The Parser, split across one file per concern, mirroring
//! `nexus-lex::lexer`'s (and `faxc-par`'s) layout: a core cursor/error
//! module plus one module per production family.

mod core;
mod expr;
mod include;
mod stmt;

pub use core::{IncludeResolver, NoIncludeResolver, Parser};
