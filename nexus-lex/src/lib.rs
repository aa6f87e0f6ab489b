//! Scanner: turns Nexus source text into a flat token stream.
//!
//! Grounded on `faxc-lex`'s crate layout (`Cursor` + per-concern `lexer/`
//! submodules), simplified to Nexus's closed token grammar: no
//! hex/octal/binary numeric literals, no string escape processing, and a
//! faithfully reproduced `<=`/`>=` → `MaiorIgual` collapse.

mod cursor;
mod keyword;
mod lexer;
mod token;

pub use keyword::keyword_from_ident;
pub use lexer::Lexer;
pub use token::{Literal, Token, TokenKind};

use nexus_diag::Handler;

/// Scans `source` to completion, collecting every token up to (and
/// including) the terminating `NX_EOF` sentinel. Lexical errors are routed
/// through `handler` rather than aborting the scan, so a single pass always
/// returns a complete token stream.
pub fn scan(source: &str, handler: &Handler) -> Vec<Token> {
    let mut lexer = Lexer::new(source, handler);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let is_eof = token.is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_always_ends_with_eof() {
        let handler = Handler::new();
        let tokens = scan("var a = 1;", &handler);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::NxEof);
    }

    #[test]
    fn scan_empty_source_yields_single_eof() {
        let handler = Handler::new();
        let tokens = scan("", &handler);
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn scan_full_declaration() {
        let handler = Handler::new();
        let tokens = scan("var nome = \"ana\";", &handler);
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Var,
                TokenKind::Identificar,
                TokenKind::Igual,
                TokenKind::Texto,
                TokenKind::Pontoevirgula,
                TokenKind::NxEof,
            ]
        );
        assert!(!handler.has_errors());
    }
}
