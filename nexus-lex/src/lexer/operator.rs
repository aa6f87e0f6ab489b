//! Multi-character operator lexing.
//!
//! Only the compound forms Nexus's lexeme grammar actually lists are
//! handled here: `+`/`++`, `-`/`--`, `!`/`!=`, `=`/`==`, the `<` and `>`
//! families (including the faithfully reproduced `<=`/`>=` collapse, see
//! `DESIGN.md`), and `/` (division plus both comment forms, handled by
//! the caller in `skip_whitespace_and_comments`).

use crate::token::{Token, TokenKind};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn lex_plus(&mut self) -> Token {
        self.cursor().advance();
        let kind = if self.cursor().match_char('+') {
            TokenKind::MaisMais
        } else {
            TokenKind::Mais
        };
        self.make_token(kind)
    }

    pub(super) fn lex_minus(&mut self) -> Token {
        self.cursor().advance();
        let kind = if self.cursor().match_char('-') {
            TokenKind::MenosMenos
        } else {
            TokenKind::Menos
        };
        self.make_token(kind)
    }

    pub(super) fn lex_bang(&mut self) -> Token {
        self.cursor().advance();
        let kind = if self.cursor().match_char('=') {
            TokenKind::BangIgual
        } else {
            TokenKind::Bang
        };
        self.make_token(kind)
    }

    pub(super) fn lex_equals(&mut self) -> Token {
        self.cursor().advance();
        let kind = if self.cursor().match_char('=') {
            TokenKind::IgualIgual
        } else {
            TokenKind::Igual
        };
        self.make_token(kind)
    }

    /// `<` alone yields `Menor`; `<<` yields `MenorMenor`; `<=` yields
    /// `MaiorIgual`, per the faithfully-reproduced original anomaly where
    /// both relational "or-equal" operators collapse onto a single token
    /// kind.
    pub(super) fn lex_less(&mut self) -> Token {
        self.cursor().advance();
        let kind = if self.cursor().match_char('=') {
            TokenKind::MaiorIgual
        } else if self.cursor().match_char('<') {
            TokenKind::MenorMenor
        } else {
            TokenKind::Menor
        };
        self.make_token(kind)
    }

    /// `>` alone yields `Maior`; `>>` yields `MaiorMaior`; `>=` yields
    /// `MaiorIgual`.
    pub(super) fn lex_greater(&mut self) -> Token {
        self.cursor().advance();
        let kind = if self.cursor().match_char('=') {
            TokenKind::MaiorIgual
        } else if self.cursor().match_char('>') {
            TokenKind::MaiorMaior
        } else {
            TokenKind::Maior
        };
        self.make_token(kind)
    }

    /// Plain division. `//` and `/* */` comments never reach here: they are
    /// consumed by `skip_whitespace_and_comments` before dispatch.
    pub(super) fn lex_slash(&mut self) -> Token {
        self.cursor().advance();
        self.make_token(TokenKind::Barra)
    }
}

#[cfg(test)]
mod tests {
    use nexus_diag::Handler;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        Lexer::new(source, &handler).map(|t| t.kind).collect()
    }

    #[test]
    fn plus_and_plus_plus() {
        assert_eq!(kinds("+ ++"), vec![TokenKind::Mais, TokenKind::MaisMais]);
    }

    #[test]
    fn minus_and_minus_minus() {
        assert_eq!(kinds("- --"), vec![TokenKind::Menos, TokenKind::MenosMenos]);
    }

    #[test]
    fn bang_and_bang_equal() {
        assert_eq!(kinds("! !="), vec![TokenKind::Bang, TokenKind::BangIgual]);
    }

    #[test]
    fn equal_and_equal_equal() {
        assert_eq!(kinds("= =="), vec![TokenKind::Igual, TokenKind::IgualIgual]);
    }

    #[test]
    fn less_family() {
        assert_eq!(
            kinds("< <= <<"),
            vec![TokenKind::Menor, TokenKind::MaiorIgual, TokenKind::MenorMenor]
        );
    }

    #[test]
    fn greater_family() {
        assert_eq!(
            kinds("> >= >>"),
            vec![TokenKind::Maior, TokenKind::MaiorIgual, TokenKind::MaiorMaior]
        );
    }

    #[test]
    fn slash_is_division_outside_comments() {
        assert_eq!(kinds("/"), vec![TokenKind::Barra]);
    }
}
