//! `incluir("path")` handling: duplicate-path detection, resolver
//! invocation, and splicing the resolved file's statements into the
//! current statement list.
//!
//! An included file is parsed recursively: conceptually, a fresh `Parser`
//! runs over the included file's tokens. A literal nested `Parser` would
//! need a second `&mut dyn IncludeResolver` borrow of the same resolver
//! from inside an active borrow of `self`, which Rust's aliasing rules
//! reject outright. Instead this Parser temporarily swaps its own token
//! buffer and cursor for the included file's, re-enters the ordinary
//! `declaration` loop against the swapped-in stream, then restores the
//! saved buffer and cursor — same `Handler`, same `resolver`, same
//! `included_paths` set throughout, which is what actually matters for
//! duplicate-path detection and single-pass diagnostics: the effect (full
//! recursive parse of the nested file) is reproduced without a literal
//! recursive `Parser` construction.

use nexus_lex::TokenKind::*;
use nexus_lex::Literal;

use crate::ast::Stmt;
use crate::error::ParseError;

use super::core::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn include_statement(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let keyword = self.previous().clone();
        self.consume(ParenteseEsquerdo, "esperado '(' apos 'incluir'")?;
        let path_token = self.consume(Texto, "esperado caminho em texto")?;
        let path = match &path_token.literal {
            Some(Literal::Text(s)) => s.clone(),
            _ => path_token.lexeme.clone(),
        };
        self.consume(ParenteseDireito, "esperado ')' apos o caminho")?;
        self.match_kind(Pontoevirgula);

        let marker = Stmt::Include { keyword: keyword.clone(), path: path.clone() };

        if self.included_paths.contains(&path) {
            self.error_at(&keyword, format!("inclusao duplicada de '{}'", path));
            return Ok(vec![marker]);
        }
        self.included_paths.insert(path.clone());

        match self.resolver.resolve(&path) {
            Ok(tokens) => {
                let spliced = self.parse_spliced_tokens(tokens);
                let mut result = Vec::with_capacity(spliced.len() + 1);
                result.push(marker);
                result.extend(spliced);
                Ok(result)
            }
            Err(err) => {
                self.error_at(&keyword, format!("falha ao resolver '{}': {}", path, err.message));
                Ok(vec![marker])
            }
        }
    }

    /// Parses `tokens` to completion against this Parser's existing
    /// `handler`/`resolver`/`included_paths`, then restores the caller's
    /// own token buffer and position exactly as they were.
    fn parse_spliced_tokens(&mut self, tokens: Vec<nexus_lex::Token>) -> Vec<Stmt> {
        let saved_tokens = std::mem::replace(&mut self.tokens, tokens);
        let saved_current = self.current;
        self.current = 0;

        let mut spliced = Vec::new();
        while !self.is_at_end() {
            spliced.extend(self.declaration());
        }

        self.tokens = saved_tokens;
        self.current = saved_current;
        spliced
    }
}
