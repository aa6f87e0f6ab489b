//! Declaration and statement parsing.
//!
//! `declaration`/`statement` return `Vec<Stmt>` rather than `Option<Stmt>`
//! because an `incluir` directive splices the resolved file's statements
//! into the surrounding list in addition to emitting its own `Include`
//! marker (see `include.rs`); every other production is the Lox-shaped
//! singleton case of that same return type.

use nexus_lex::TokenKind::*;

use crate::ast::{Expr, FunctionDecl, LiteralValue, Stmt};
use crate::error::ParseError;

use super::core::Parser;

impl<'a> Parser<'a> {
    /// `parse(tokens) → [Statement]`. Consumes declarations until
    /// end-of-input; a failing declaration is reported, synchronized past,
    /// and skipped so later errors still surface in the same pass.
    pub fn parse(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.extend(self.declaration());
        }
        statements
    }

    pub(crate) fn declaration(&mut self) -> Vec<Stmt> {
        match self.declaration_inner() {
            Ok(stmts) => stmts,
            Err(_) => {
                self.synchronize();
                Vec::new()
            }
        }
    }

    fn declaration_inner(&mut self) -> Result<Vec<Stmt>, ParseError> {
        if self.match_kind(Definir) {
            return Ok(vec![self.function_declaration("funcao")?]);
        }
        if self.match_kind(Classe) {
            return Ok(vec![self.class_declaration()?]);
        }
        if self.match_kind(Var) {
            return Ok(vec![self.var_declaration()?]);
        }
        self.statement()
    }

    pub(crate) fn statement(&mut self) -> Result<Vec<Stmt>, ParseError> {
        if self.match_kind(Incluir) {
            return self.include_statement();
        }
        if self.match_kind(Saida) {
            return Ok(vec![self.print_statement()?]);
        }
        if self.match_kind(Said) {
            return Ok(vec![self.out_statement()?]);
        }
        if self.match_kind(Se) {
            return Ok(vec![self.if_statement()?]);
        }
        if self.match_kind(Enquanto) {
            return Ok(vec![self.while_statement()?]);
        }
        if self.match_kind(Por) {
            return Ok(vec![self.for_statement()?]);
        }
        if self.match_kind(Retorne) {
            return Ok(vec![self.return_statement()?]);
        }
        if self.match_kind(ChaveEsquerda) {
            return Ok(vec![Stmt::Block(self.block()?)]);
        }
        Ok(vec![self.expression_statement()?])
    }

    /// A single `Stmt` for the node positions that require one (`if`/`while`
    /// bodies, `for`'s desugared body): if a spliced `incluir` produced more
    /// than one statement in that position, they are wrapped in a `Block`.
    pub(crate) fn statement_as_single(&mut self) -> Result<Stmt, ParseError> {
        let mut stmts = self.statement()?;
        if stmts.len() == 1 {
            Ok(stmts.pop().unwrap())
        } else {
            Ok(Stmt::Block(stmts))
        }
    }

    pub(crate) fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        while !self.check(ChaveDireita) && !self.is_at_end() {
            stmts.extend(self.declaration());
        }
        self.consume(ChaveDireita, "esperado '}' apos o bloco")?;
        Ok(stmts)
    }

    fn function_declaration(&mut self, kind: &str) -> Result<Stmt, ParseError> {
        let name = self.consume(Identificar, format!("esperado nome de {}", kind))?;
        self.consume(ParenteseEsquerdo, format!("esperado '(' apos nome de {}", kind))?;
        let mut params = Vec::new();
        if !self.check(ParenteseDireito) {
            loop {
                if params.len() >= 255 {
                    let token = self.peek().clone();
                    self.error_at(&token, "nao pode ter mais de 255 parametros");
                }
                params.push(self.consume(Identificar, "esperado nome de parametro")?);
                if !self.match_kind(Virgula) {
                    break;
                }
            }
        }
        self.consume(ParenteseDireito, "esperado ')' apos os parametros")?;
        self.consume(ChaveEsquerda, format!("esperado '{{' antes do corpo de {}", kind))?;
        let body = self.block()?;
        Ok(Stmt::Function(FunctionDecl { name, params, body }))
    }

    fn class_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume(Identificar, "esperado nome de classe")?;
        self.consume(ChaveEsquerda, "esperado '{' antes do corpo da classe")?;
        let mut methods = Vec::new();
        while !self.check(ChaveDireita) && !self.is_at_end() {
            match self.function_declaration("metodo")? {
                Stmt::Function(f) => methods.push(f),
                _ => unreachable!("function_declaration always returns Stmt::Function"),
            }
        }
        self.consume(ChaveDireita, "esperado '}' apos o corpo da classe")?;
        Ok(Stmt::Class { name, methods })
    }

    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume(Identificar, "esperado nome de variavel")?;
        let initializer = if self.match_kind(Igual) { Some(self.expression()?) } else { None };
        self.match_kind(Pontoevirgula);
        Ok(Stmt::Var { name, initializer })
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.match_kind(Pontoevirgula);
        Ok(Stmt::Print(value))
    }

    fn out_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.match_kind(Pontoevirgula);
        Ok(Stmt::Out(value))
    }

    /// Headers consume `)` *before* the condition and `(` *after* it,
    /// swapped from conventional C-like syntax and kept faithfully: a
    /// Nexus `se` reads `se ) cond ( { ... }`.
    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(ParenteseDireito, "esperado ')' antes da condicao")?;
        let cond = self.expression()?;
        self.consume(ParenteseEsquerdo, "esperado '(' apos a condicao")?;
        let then_branch = Box::new(self.statement_as_single()?);
        let else_branch = if self.match_kind(Senao) {
            Some(Box::new(self.statement_as_single()?))
        } else {
            None
        };
        Ok(Stmt::If { cond, then_branch, else_branch })
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(ParenteseDireito, "esperado ')' antes da condicao")?;
        let cond = self.expression()?;
        self.consume(ParenteseEsquerdo, "esperado '(' apos a condicao")?;
        let body = Box::new(self.statement_as_single()?);
        Ok(Stmt::While { cond, body })
    }

    /// Desugars `por(init; cond; inc) body` into
    /// `Block{ init, While(cond-or-true, Block{ body, Expression(inc) }) }`,
    /// eliding any of `init`/`cond`/`inc` that were omitted. The parenthesis
    /// placement mirrors `if`/`while`'s reversed-header anomaly: `)` opens
    /// the clause list, `(` closes it.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(ParenteseDireito, "esperado ')' antes das clausulas do for")?;

        let initializer = if self.match_kind(Pontoevirgula) {
            None
        } else if self.match_kind(Var) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if !self.check(Pontoevirgula) { Some(self.expression()?) } else { None };
        self.consume(Pontoevirgula, "esperado ';' apos a condicao do for")?;

        let increment = if !self.check(ParenteseEsquerdo) { Some(self.expression()?) } else { None };
        self.consume(ParenteseEsquerdo, "esperado '(' apos as clausulas do for")?;

        let mut body = self.statement_as_single()?;

        if let Some(inc) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(inc)]);
        }

        let cond = condition.unwrap_or(Expr::Literal(LiteralValue::Bool(true)));
        body = Stmt::While { cond, body: Box::new(body) };

        if let Some(init) = initializer {
            body = Stmt::Block(vec![init, body]);
        }

        Ok(body)
    }

    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.previous().clone();
        let value = if !self.check(Pontoevirgula) && !self.check(ChaveDireita) && !self.is_at_end() {
            Some(self.expression()?)
        } else {
            None
        };
        self.match_kind(Pontoevirgula);
        Ok(Stmt::Return { keyword, value })
    }

    pub(crate) fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.match_kind(Pontoevirgula);
        Ok(Stmt::Expression(expr))
    }
}
