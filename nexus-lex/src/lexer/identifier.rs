//! Identifier and keyword lexing.

use crate::keyword::keyword_from_ident;
use crate::token::{Token, TokenKind};

use super::core::{is_alphanumeric, Lexer};

impl<'a> Lexer<'a> {
    pub(super) fn lex_identifier(&mut self) -> Token {
        while is_alphanumeric(self.cursor_ref().current_char()) {
            self.cursor().advance();
        }

        let token = self.make_token(TokenKind::Identificar);
        match keyword_from_ident(&token.lexeme) {
            Some(kind) => Token { kind, ..token },
            None => token,
        }
    }
}

#[cfg(test)]
mod tests {
    use nexus_diag::Handler;

    use super::*;

    #[test]
    fn plain_identifier() {
        let handler = Handler::new();
        let token = Lexer::new("minhaVariavel", &handler).next_token();
        assert_eq!(token.kind, TokenKind::Identificar);
        assert_eq!(token.lexeme, "minhaVariavel");
    }

    #[test]
    fn keyword_is_reclassified() {
        let handler = Handler::new();
        let token = Lexer::new("enquanto", &handler).next_token();
        assert_eq!(token.kind, TokenKind::Enquanto);
        assert_eq!(token.lexeme, "enquanto");
    }

    #[test]
    fn underscore_and_digits_allowed_after_start() {
        let handler = Handler::new();
        let token = Lexer::new("_valor_2", &handler).next_token();
        assert_eq!(token.kind, TokenKind::Identificar);
        assert_eq!(token.lexeme, "_valor_2");
    }
}
