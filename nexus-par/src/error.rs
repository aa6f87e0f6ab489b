//! The Parser's local error sentinel.
//!
//! Grounded on `faxc-util/src/error.rs`'s per-crate `thiserror` enum shape.
//! Unlike a compile error consumers inspect after the fact, `ParseError`
//! is thrown-and-caught entirely within a single parse: the diagnostic it
//! carries has already been emitted to the `Handler` by the time it is
//! constructed (see `Parser::error`), so `Parser::parse` only needs the
//! sentinel to unwind out of the failing production and into `synchronize`.

use nexus_lex::Token;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl ParseError {
    /// Constructed by `NoIncludeResolver` when a Parser encounters
    /// `incluir` without a real resolver configured.
    pub fn resolver_unavailable(path: &str) -> Self {
        Self {
            token: Token::eof(0, nexus_diag::Span::DUMMY),
            message: format!("nenhum resolvedor de inclusao configurado para '{}'", path),
        }
    }
}
