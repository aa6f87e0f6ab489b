//! Core lexer: construction, dispatch, and error reporting.

use nexus_diag::{Diagnostic, Handler, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Scanner for Nexus source text.
///
/// Single-pass, hand-written, one-character lookahead plus a second peek
/// (the `Cursor`'s `peek_char(1)`).
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    handler: &'a Handler,
    token_start: usize,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    pub(crate) fn cursor(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    pub(crate) fn cursor_ref(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Returns the next token, or the `NX_EOF` sentinel at end of input.
    ///
    /// Never fails hard: unrecognized characters and unterminated
    /// strings/comments are reported through the handler and skipped.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Token::eof(self.token_start_line, self.current_span());
        }

        let simple = |kind: TokenKind| kind;

        match self.cursor.current_char() {
            '(' => self.single(simple(TokenKind::ParenteseEsquerdo)),
            ')' => self.single(simple(TokenKind::ParenteseDireito)),
            '{' => self.single(simple(TokenKind::ChaveEsquerda)),
            '}' => self.single(simple(TokenKind::ChaveDireita)),
            '[' => self.single(simple(TokenKind::ColcheteEsquerdo)),
            ']' => self.single(simple(TokenKind::ColcheteDireito)),
            ',' => self.single(simple(TokenKind::Virgula)),
            '.' => self.single(simple(TokenKind::Ponto)),
            ';' => self.single(simple(TokenKind::Pontoevirgula)),
            '*' => self.single(simple(TokenKind::Asterisco)),
            '&' => self.single(simple(TokenKind::Ecomercial)),
            '^' => self.single(simple(TokenKind::Acentochapeu)),
            '|' => self.single(simple(TokenKind::Barrav)),
            '~' => self.single(simple(TokenKind::Til)),
            '%' => self.single(simple(TokenKind::Porcentagem)),
            '+' => self.lex_plus(),
            '-' => self.lex_minus(),
            '!' => self.lex_bang(),
            '=' => self.lex_equals(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '/' => self.lex_slash(),
            '"' => self.lex_string(),
            c if is_digit(c) => self.lex_number(),
            c if is_alpha(c) => self.lex_identifier(),
            c => {
                self.cursor.advance();
                self.report_error(format!("caractere inesperado '{}'", c));
                self.next_token()
            }
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make_token(kind)
    }

    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        let lexeme = self.cursor.slice_from(self.token_start);
        Token::new(kind, lexeme, self.token_start_line, self.current_span())
    }

    fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Skips whitespace and comments. Line comments (`//`) and block
    /// comments (`/* */`) are handled inline here rather than by recursing
    /// through `next_token`, so a run of blanks/comments is consumed in one
    /// pass before token scanning begins.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => self.cursor.advance(),
                '/' if self.cursor.peek_char(1) == '/' => {
                    while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                        self.cursor.advance();
                    }
                }
                '/' if self.cursor.peek_char(1) == '*' => {
                    self.cursor.advance();
                    self.cursor.advance();
                    self.skip_block_comment();
                }
                _ => break,
            }
        }
    }

    fn skip_block_comment(&mut self) {
        let start_line = self.cursor.line();
        loop {
            if self.cursor.is_at_end() {
                self.report_error_at(start_line, "comentario de bloco nao terminado".to_string());
                return;
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
    }

    pub(crate) fn report_error(&self, message: String) {
        self.handler
            .emit(Diagnostic::lex_error(self.token_start_line, message));
    }

    fn report_error_at(&self, line: u32, message: String) {
        self.handler.emit(Diagnostic::lex_error(line, message));
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// `Alpha := A-Z | a-z | _`.
pub(crate) fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// `Digit := 0-9`.
pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `AlphaNumeric := Alpha ∪ Digit`.
pub(crate) fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        let lexer = Lexer::new(source, &handler);
        lexer.map(|t| t.kind).collect()
    }

    #[test]
    fn single_char_punctuation() {
        assert_eq!(
            scan_all("(){}[],.;*&^|~%"),
            vec![
                TokenKind::ParenteseEsquerdo,
                TokenKind::ParenteseDireito,
                TokenKind::ChaveEsquerda,
                TokenKind::ChaveDireita,
                TokenKind::ColcheteEsquerdo,
                TokenKind::ColcheteDireito,
                TokenKind::Virgula,
                TokenKind::Ponto,
                TokenKind::Pontoevirgula,
                TokenKind::Asterisco,
                TokenKind::Ecomercial,
                TokenKind::Acentochapeu,
                TokenKind::Barrav,
                TokenKind::Til,
                TokenKind::Porcentagem,
            ]
        );
    }

    #[test]
    fn whitespace_is_skipped_and_newline_counts_lines() {
        let handler = Handler::new();
        let lexer = Lexer::new("a\n\nb", &handler);
        let lines: Vec<u32> = lexer.map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 3]);
    }

    #[test]
    fn line_comment_is_skipped() {
        assert_eq!(scan_all("// oi\n+"), vec![TokenKind::Mais]);
    }

    #[test]
    fn block_comment_is_skipped() {
        assert_eq!(scan_all("/* bloco\nmulti-linha */+"), vec![TokenKind::Mais]);
    }

    #[test]
    fn unterminated_block_comment_reports_error() {
        let handler = Handler::new();
        let lexer = Lexer::new("/* nunca fecha", &handler);
        let tokens: Vec<Token> = lexer.collect();
        assert!(tokens.is_empty());
        assert!(handler.has_errors());
    }

    #[test]
    fn unexpected_character_reports_and_continues() {
        let handler = Handler::new();
        let lexer = Lexer::new("@+", &handler);
        let kinds: Vec<TokenKind> = lexer.map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Mais]);
        assert!(handler.has_errors());
    }

    #[test]
    fn eof_token_reports_final_line() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("var a\n", &handler);
        while !lexer.next_token().is_eof() {}
        let eof = lexer.next_token();
        assert!(eof.is_eof());
        assert_eq!(eof.line, 2);
    }
}
