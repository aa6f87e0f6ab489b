//! Parser: turns a Nexus token stream into a sequence of top-level
//! statements.
//!
//! Grounded on `faxc-par`'s crate layout (one module per production
//! family, explicit precedence climbing rather than a Pratt table)
//! generalized to Nexus's grammar, including its faithfully reproduced
//! grammar anomalies (see `DESIGN.md`).

mod ast;
mod error;
mod parser;
pub mod testing;

pub use ast::{Expr, FunctionDecl, LiteralValue, Stmt};
pub use error::ParseError;
pub use parser::{IncludeResolver, NoIncludeResolver, Parser};

use nexus_diag::Handler;
use nexus_lex::Token;

/// `parse(tokens) → [Statement]`, using a resolver that fails any
/// `incluir` it encounters. Convenience wrapper for the common case of a
/// source file with no include directives; see [`Parser::new`] to supply
/// a real [`IncludeResolver`].
pub fn parse(tokens: Vec<Token>, handler: &Handler) -> Vec<Stmt> {
    let mut resolver = NoIncludeResolver;
    Parser::new(tokens, handler, &mut resolver).parse()
}
