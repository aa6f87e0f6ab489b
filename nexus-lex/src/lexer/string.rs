//! String literal lexing.
//!
//! No escape processing is performed: the text between the quotes is
//! taken verbatim, including embedded newlines (which still advance the
//! line counter).

use crate::token::{Literal, Token, TokenKind};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn lex_string(&mut self) -> Token {
        self.cursor().advance();

        let content_start = self.cursor_ref().position();

        while self.cursor_ref().current_char() != '"' && !self.cursor_ref().is_at_end() {
            self.cursor().advance();
        }

        if self.cursor_ref().is_at_end() {
            self.report_error("string nao terminada".to_string());
            let content = self.cursor_ref().slice_from(content_start).to_string();
            return self.make_token(TokenKind::Texto).with_literal(Literal::Text(content));
        }

        let content = self.cursor_ref().slice_from(content_start).to_string();
        self.cursor().advance();

        self.make_token(TokenKind::Texto).with_literal(Literal::Text(content))
    }
}
