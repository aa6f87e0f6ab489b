//! Token kinds and the `Token` value type.
//!
//! The kind enumeration is closed, with Portuguese lexeme names preserved
//! rather than translated, since they are part of the wire contract
//! toward the Parser and any downstream tooling built against this
//! crate.

use nexus_diag::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character punctuation.
    ParenteseEsquerdo,
    ParenteseDireito,
    ChaveEsquerda,
    ChaveDireita,
    ColcheteEsquerdo,
    ColcheteDireito,
    Virgula,
    Ponto,
    Pontoevirgula,
    Menos,
    Mais,
    Asterisco,
    Barra,
    Porcentagem,
    Ecomercial,
    Acentochapeu,
    Barrav,
    Til,

    // Compound operators.
    MenosMenos,
    MaisMais,
    Bang,
    BangIgual,
    Igual,
    IgualIgual,
    Maior,
    MaiorIgual,
    Menor,
    MenorMenor,
    MaiorMaior,

    // Literals.
    Identificar,
    Texto,
    Numero,

    // Keywords.
    Incluir,
    E,
    Classe,
    Senao,
    Falso,
    Por,
    Definir,
    Se,
    Nulo,
    Ou,
    Said,
    Saida,
    Retorne,
    Super,
    Isso,
    Verdadeiro,
    Var,
    Enquanto,

    /// Sentinel end-of-input token.
    NxEof,
}

/// The literal value carried by `NUMERO` and `TEXTO` tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: u32,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, span: Span) -> Self {
        Self { kind, lexeme: lexeme.into(), literal: None, line, span }
    }

    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }

    pub fn eof(line: u32, span: Span) -> Self {
        Self { kind: TokenKind::NxEof, lexeme: String::new(), literal: None, line, span }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::NxEof
    }
}
