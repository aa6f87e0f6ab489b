//! Expression parsing: explicit precedence climbing, one method per
//! grammar level, lowest binding first. Several levels faithfully
//! reproduce anomalies from the source grammar rather than a conventional
//! precedence table — see the doc comment on each one for the rationale.

use nexus_lex::TokenKind::*;

use crate::ast::{Expr, LiteralValue};
use crate::error::ParseError;
use nexus_lex::Literal;

use super::core::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// Parses the left side as a general expression, then upgrades a
    /// trailing `=` into the matching mutating node: `Variable → Assign`,
    /// `Get → Set`, `Callist(read) → Callist(write)`. Any other left-hand
    /// side is a diagnostic (reported, not fatal — the original expression
    /// is returned so the caller can keep parsing).
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.logic_or()?;

        if self.match_kind(Igual) {
            let equals = self.previous().clone();
            let value = self.assignment()?;
            return match expr {
                Expr::Variable(name) => Ok(Expr::Assign { name, value: Box::new(value) }),
                Expr::Get { object, name } => Ok(Expr::Set { object, name, value: Box::new(value) }),
                Expr::Callist { target, index, bracket, .. } => {
                    Ok(Expr::Callist { target, index, value: Some(Box::new(value)), bracket })
                }
                other => {
                    self.error_at(&equals, "alvo de atribuicao invalido");
                    Ok(other)
                }
            };
        }

        Ok(expr)
    }

    fn logic_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.logic_and()?;
        while self.match_kind(Ou) {
            let op = self.previous().clone();
            let right = self.logic_and()?;
            expr = Expr::Logical { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    fn logic_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.bitwise()?;
        while self.match_kind(E) {
            let op = self.previous().clone();
            let right = self.bitwise()?;
            expr = Expr::Logical { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    fn bitwise(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;
        while self.match_any(&[Ecomercial, Acentochapeu, Barrav]) {
            let op = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Binary { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;
        while self.match_any(&[BangIgual, IgualIgual]) {
            let op = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::Binary { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    /// `MAIOR_IGUAL` is the only token kind the Scanner ever produces for
    /// *both* `>=` and `<=` (see `nexus-lex::lex_less`); there is no
    /// separate `<=`-specific kind to match against, so `comparison` can
    /// only ever match `Maior | MaiorIgual | Menor`.
    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.shift()?;
        while self.match_any(&[Maior, MaiorIgual, Menor]) {
            let op = self.previous().clone();
            let right = self.shift()?;
            expr = Expr::Binary { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    fn shift(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;
        while self.match_any(&[MenorMenor, MaiorMaior]) {
            let op = self.previous().clone();
            let right = self.term()?;
            expr = Expr::Binary { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    /// Matches `Menor | Mais`, not `Menos | Mais` — a faithfully reproduced
    /// typo. Binary subtraction is unreachable through `term`; `-` remains
    /// reachable only as the unary prefix handled in `unary`.
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;
        while self.match_any(&[Menor, Mais]) {
            let op = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::Binary { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    /// Includes `Ecomercial` (`&`) alongside `*` and `%`, even though `&`
    /// is already bitwise-AND at the `bitwise` level above — a faithfully
    /// reproduced double binding, kept rather than corrected.
    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;
        while self.match_any(&[Ecomercial, Asterisco, Porcentagem]) {
            let op = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::Binary { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    /// A prefix `++`/`--` whose operand is itself a postfix `++`/`--`
    /// expression is rejected (reported, not fatal).
    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_any(&[Bang, Menos, MaisMais, MenosMenos, Til]) {
            let op = self.previous().clone();
            let operand = self.unary()?;
            if matches!(op.kind, MaisMais | MenosMenos) {
                if let Expr::Unary { postfix: true, .. } = &operand {
                    self.error_at(&op, "incremento/decremento prefixado nao pode aplicar-se a uma expressao pos-fixada");
                }
            }
            return Ok(Expr::Unary { op, operand: Box::new(operand), postfix: false });
        }
        self.call()
    }

    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.callist()?;
        loop {
            if self.match_kind(ParenteseEsquerdo) {
                expr = self.finish_call(expr)?;
            } else if self.match_kind(Ponto) {
                let name = self.consume(Identificar, "esperado nome de propriedade apos '.'")?;
                expr = Expr::Get { object: Box::new(expr), name };
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();
        if !self.check(ParenteseDireito) {
            loop {
                if args.len() >= 255 {
                    let token = self.peek().clone();
                    self.error_at(&token, "nao pode ter mais de 255 argumentos");
                }
                args.push(self.expression()?);
                if !self.match_kind(Virgula) {
                    break;
                }
            }
        }
        let closing_paren = self.consume(ParenteseDireito, "esperado ')' apos os argumentos")?;
        Ok(Expr::Call { callee: Box::new(callee), closing_paren, args })
    }

    /// `callist := primary ( '[' expression ']' )*` — the bracketed index
    /// parses at full assignment precedence (`expression()`), overriding
    /// `finishCallist`'s `logicalOr()` call, because the grammar for this
    /// production is spelled out explicitly with `expression` inside the
    /// brackets.
    fn callist(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;
        while self.match_kind(ColcheteEsquerdo) {
            let bracket = self.previous().clone();
            let index = self.expression()?;
            self.consume(ColcheteDireito, "esperado ']' apos o indice")?;
            expr = Expr::Callist { target: Box::new(expr), index: Box::new(index), value: None, bracket };
        }
        Ok(expr)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_kind(ChaveEsquerda) {
            return self.array_literal();
        }
        if self.match_kind(Falso) {
            return Ok(Expr::Literal(LiteralValue::Bool(false)));
        }
        if self.match_kind(Verdadeiro) {
            return Ok(Expr::Literal(LiteralValue::Bool(true)));
        }
        if self.match_kind(Nulo) {
            return Ok(Expr::Literal(LiteralValue::Nil));
        }
        if self.match_kind(Numero) {
            let token = self.previous();
            let value = match &token.literal {
                Some(Literal::Number(n)) => *n,
                _ => 0.0,
            };
            return Ok(Expr::Literal(LiteralValue::Number(value)));
        }
        if self.match_kind(Texto) {
            let token = self.previous();
            let value = match &token.literal {
                Some(Literal::Text(s)) => s.clone(),
                _ => String::new(),
            };
            return Ok(Expr::Literal(LiteralValue::Text(value)));
        }
        if self.match_kind(Identificar) {
            let name = self.previous().clone();
            if self.match_any(&[MaisMais, MenosMenos]) {
                let op = self.previous().clone();
                return Ok(Expr::Unary { op, operand: Box::new(Expr::Variable(name)), postfix: true });
            }
            return Ok(Expr::Variable(name));
        }
        if self.match_kind(ParenteseEsquerdo) {
            let expr = self.expression()?;
            self.consume(ParenteseDireito, "esperado ')' apos a expressao")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        let token = self.peek().clone();
        Err(self.error(token, "esperado expressao"))
    }

    /// `'{' arrayList? '}'` — an array literal, capped at 255 elements per
    /// the data-model invariant shared with `params`/`args`. Each element
    /// parses at `logicalOr()` precedence, one level below assignment,
    /// matching `arrayList`'s call to `logicalOr()` rather than `callist`'s
    /// explicit use of full `expression()` for the bracketed index.
    fn array_literal(&mut self) -> Result<Expr, ParseError> {
        let mut elements = Vec::new();
        if !self.check(ChaveDireita) {
            loop {
                if elements.len() >= 255 {
                    let token = self.peek().clone();
                    self.error_at(&token, "lista nao pode ter mais de 255 elementos");
                }
                elements.push(self.logic_or()?);
                if !self.match_kind(Virgula) {
                    break;
                }
            }
        }
        self.consume(ChaveDireita, "esperado '}' apos a lista")?;
        Ok(Expr::Array(elements))
    }
}
