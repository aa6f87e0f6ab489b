//! Diagnostic data types and the per-run diagnostics sink.
//!
//! `Diagnostic`/`Level` are the data types an external diagnostics
//! consumer expects to receive; `Handler` is a minimal owned context a
//! Scanner/Parser run threads through instead of a process-wide mutable
//! flag (see `DESIGN.md` on global diagnostics state).

use std::cell::RefCell;
use std::fmt;

use crate::span::Span;

/// Severity of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
        };
        f.write_str(s)
    }
}

/// The two diagnostic categories, distinguished by rendering: lex/parse
/// diagnostics are token- or line-anchored, runtime diagnostics use a
/// distinct bracketed format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// `erro: linha: <N> no <lexeme>: <message>` / `erro: linha: <N>: <message>`
    Compile,
    /// `[linha <N>] Erro: <message>`
    Runtime,
}

/// A single diagnostic: a level, a message, the span it refers to, and the
/// rendering category that decides its exact textual format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
    pub category: Category,
    /// For `Category::Compile`, the offending lexeme, or `None` at
    /// end-of-input ("no final") or for location-only errors.
    pub lexeme: Option<String>,
}

impl Diagnostic {
    /// A lexer diagnostic anchored to a line only (no offending token yet).
    pub fn lex_error(line: u32, message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span: Span::point(line, 1),
            category: Category::Compile,
            lexeme: None,
        }
    }

    /// A parser diagnostic anchored to a specific token. `lexeme` is `None`
    /// for the end-of-input sentinel, which renders as "no final".
    pub fn parse_error(span: Span, lexeme: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span,
            category: Category::Compile,
            lexeme: lexeme.map(|s| s.to_string()),
        }
    }

    /// A runtime diagnostic, rendered with the bracketed `[linha N] Erro:` form.
    pub fn runtime_error(line: u32, message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span: Span::point(line, 1),
            category: Category::Runtime,
            lexeme: None,
        }
    }

    /// Render the diagnostic using Nexus's two wire-format strings.
    pub fn render(&self) -> String {
        match self.category {
            Category::Runtime => format!("[linha {}] Erro: {}", self.span.line, self.message),
            Category::Compile => match &self.lexeme {
                Some(lexeme) => format!(
                    "erro: linha: {} no {}: {}",
                    self.span.line, lexeme, self.message
                ),
                None => format!("erro: linha: {}: {}", self.span.line, self.message),
            },
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Per-run diagnostics context.
///
/// Replaces a process-wide `hadError` static with an owned value a caller
/// constructs once per Scanner/Parser run and threads through by shared
/// reference.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self { diagnostics: RefCell::new(Vec::new()) }
    }

    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// The `hadError` query.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_with_lexeme_renders_expected_format() {
        let diag = Diagnostic::parse_error(Span::point(3, 1), Some("}"), "esperado ';'");
        assert_eq!(diag.render(), "erro: linha: 3 no }: esperado ';'");
    }

    #[test]
    fn compile_error_at_eof_has_no_lexeme() {
        let diag = Diagnostic::parse_error(Span::point(9, 1), None, "esperado expressao");
        assert_eq!(diag.render(), "erro: linha: 9: esperado expressao");
    }

    #[test]
    fn lex_error_renders_location_only_format() {
        let diag = Diagnostic::lex_error(4, "caractere inesperado");
        assert_eq!(diag.render(), "erro: linha: 4: caractere inesperado");
    }

    #[test]
    fn runtime_error_renders_bracketed_format() {
        let diag = Diagnostic::runtime_error(12, "Variavel indefinida: 'x'.");
        assert_eq!(diag.render(), "[linha 12] Erro: Variavel indefinida: 'x'.");
    }

    #[test]
    fn handler_tracks_errors() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        handler.emit(Diagnostic::lex_error(1, "oops"));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn handler_clear_resets_state() {
        let handler = Handler::new();
        handler.emit(Diagnostic::lex_error(1, "oops"));
        handler.clear();
        assert!(!handler.has_errors());
        assert_eq!(handler.diagnostics().len(), 0);
    }

    #[test]
    fn handler_diagnostics_returns_snapshot() {
        let handler = Handler::new();
        handler.emit(Diagnostic::lex_error(1, "a"));
        handler.emit(Diagnostic::lex_error(2, "b"));
        assert_eq!(handler.diagnostics().len(), 2);
        assert_eq!(handler.error_count(), 2);
    }
}
