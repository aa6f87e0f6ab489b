//! Parser construction, token-stream cursor helpers, and error/recovery
//! machinery. Grounded on `faxc-par`'s `Parser` (`peek`/`advance`/`expect`/
//! `match_token`/`error`) generalized to Nexus's token set and to a
//! multi-error-per-pass recovery loop.

use std::collections::HashSet;

use nexus_diag::{Diagnostic, Handler};
use nexus_lex::{Token, TokenKind};

use crate::error::ParseError;

/// The external include-resolver collaborator, expressed as a trait so
/// the Parser can be exercised without file I/O.
///
/// Collapses a `scanFile`-then-`getTokens` two-call shape into one call
/// returning the resolved token stream directly: that split only exists
/// when the resolver is a static/global singleton, a pattern with no
/// idiomatic Rust equivalent in an embeddable library.
pub trait IncludeResolver {
    fn resolve(&mut self, path: &str) -> Result<Vec<Token>, ParseError>;
}

/// An `IncludeResolver` that always fails. The default for a `Parser` that
/// is not expected to encounter `incluir` directives.
#[derive(Debug, Default)]
pub struct NoIncludeResolver;

impl IncludeResolver for NoIncludeResolver {
    fn resolve(&mut self, path: &str) -> Result<Vec<Token>, ParseError> {
        Err(ParseError::resolver_unavailable(path))
    }
}

/// Recursive-descent parser over a flat token stream.
pub struct Parser<'a> {
    pub(crate) tokens: Vec<Token>,
    pub(crate) current: usize,
    pub(crate) handler: &'a Handler,
    pub(crate) resolver: &'a mut dyn IncludeResolver,
    pub(crate) included_paths: HashSet<String>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, handler: &'a Handler, resolver: &'a mut dyn IncludeResolver) -> Self {
        Self { tokens, current: 0, handler, resolver, included_paths: HashSet::new() }
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    pub(crate) fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous().clone()
    }

    /// Consumes the current token if it is `kind`.
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if its kind is any of `kinds`.
    pub(crate) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// Consumes the current token if it is `kind`, else reports and returns
    /// a `ParseError`.
    pub(crate) fn consume(&mut self, kind: TokenKind, message: impl Into<String>) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let token = self.peek().clone();
            Err(self.error(token, message))
        }
    }

    /// Builds and emits a token-anchored diagnostic, returning the
    /// `ParseError` sentinel the caller propagates with `?`.
    pub(crate) fn error(&self, token: Token, message: impl Into<String>) -> ParseError {
        let message = message.into();
        let lexeme = if token.is_eof() { None } else { Some(token.lexeme.as_str()) };
        self.handler.emit(Diagnostic::parse_error(token.span, lexeme, message.clone()));
        ParseError { token, message }
    }

    /// Reports a diagnostic without aborting the current production (used
    /// for soft limits like the 255-parameter/argument/element cap, which
    /// are reportable but non-fatal).
    pub(crate) fn error_at(&self, token: &Token, message: impl Into<String>) {
        let message = message.into();
        let lexeme = if token.is_eof() { None } else { Some(token.lexeme.as_str()) };
        self.handler.emit(Diagnostic::parse_error(token.span, lexeme, message));
    }

    /// Discards tokens to recover from a `ParseError`.
    ///
    /// A faithfully reproduced dead switch: the keyword-case labels
    /// (`classe`, `definir`, `var`, `por`, `se`, `enquanto`, `said`,
    /// `saida`, `retorne`) have no statement before the trailing
    /// `default: return`, so C++ fallthrough means every one of them — and
    /// any other token kind — hits `return` unconditionally on the very
    /// first loop iteration. This does not actually scan forward to a
    /// statement boundary; it advances exactly one token and stops. Kept
    /// as-is: "fixing" it would change which tokens downstream
    /// diagnostics see after a syntax error.
    pub(crate) fn synchronize(&mut self) {
        self.advance();
        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Pontoevirgula {
                return;
            }
            // The lexer never produces a `"\n"`-lexeme token (newlines are
            // consumed as whitespace), so this check is dead in practice.
            if self.previous().lexeme == "\n" {
                return;
            }
            match self.peek().kind {
                TokenKind::Classe
                | TokenKind::Definir
                | TokenKind::Var
                | TokenKind::Por
                | TokenKind::Se
                | TokenKind::Enquanto
                | TokenKind::Said
                | TokenKind::Saida
                | TokenKind::Retorne => return,
                _ => return,
            }
        }
    }
}
