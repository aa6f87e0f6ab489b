//! Number literal lexing.
//!
//! Nexus numbers are a digit run with an optional single fractional part —
//! no hex, octal, or binary prefixes, unlike `faxc-lex`, which Nexus's
//! own grammar never supported either.

use crate::token::{Literal, Token, TokenKind};

use super::core::{is_digit, Lexer};

impl<'a> Lexer<'a> {
    pub(super) fn lex_number(&mut self) -> Token {
        while is_digit(self.cursor_ref().current_char()) {
            self.cursor().advance();
        }

        if self.cursor_ref().current_char() == '.' && is_digit(self.cursor_ref().peek_char(1)) {
            self.cursor().advance();
            while is_digit(self.cursor_ref().current_char()) {
                self.cursor().advance();
            }
        }

        let token = self.make_token(TokenKind::Numero);
        let value: f64 = token.lexeme.parse().unwrap_or_else(|_| {
            self.report_error(format!("numero invalido '{}'", token.lexeme));
            0.0
        });
        token.with_literal(Literal::Number(value))
    }
}
