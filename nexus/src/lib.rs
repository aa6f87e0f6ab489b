//! Nexus: the tree-walking interpreter core for a dynamically-typed,
//! Portuguese-keyword scripting language.
//!
//! This crate is a thin facade over the four phase crates, mirroring
//! `faxc`'s workspace-of-phase-crates layout minus the driver binary (no
//! CLI, no file I/O, no codegen — those are out of this core's scope):
//!
//! - [`nexus_diag`] — the diagnostics sink (`Handler`, `Diagnostic`, `Span`).
//! - [`nexus_lex`] — the Scanner (`scan`, `Token`, `TokenKind`).
//! - [`nexus_par`] — the Parser (`parse`, `Expr`, `Stmt`, `IncludeResolver`).
//! - [`nexus_env`] — the Environment chain (`Environment`, `Value`, `EnvError`).
//!
//! An embedder wires these three stages together; [`scan_and_parse`] does
//! exactly that for the common case of a single self-contained source
//! string with no `incluir` directives, matching the shape of
//! `faxc-drv::Session::run_pipeline`'s lex-then-parse phases without the
//! downstream HIR/MIR/LIR/codegen phases this core does not implement.

pub use nexus_diag::{Category, Diagnostic, Handler, Level, Span};
pub use nexus_env::{terminate_on_duplicate_definition, EnvError, Environment, Value};
pub use nexus_lex::{scan, Literal, Token, TokenKind};
pub use nexus_par::{
    parse, Expr, FunctionDecl, IncludeResolver, LiteralValue, NoIncludeResolver, ParseError,
    Parser, Stmt,
};

/// Runs the Scanner then the Parser over `source`, using a resolver that
/// fails any `incluir` it encounters. Diagnostics from both stages land on
/// the returned [`Handler`]; check [`Handler::has_errors`] before trusting
/// the statement list.
pub fn scan_and_parse(source: &str) -> (Vec<Stmt>, Handler) {
    let handler = Handler::new();
    let tokens = scan(source, &handler);
    let stmts = parse(tokens, &handler);
    (stmts, handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_reports_no_errors_for_well_formed_source() {
        let (stmts, handler) = scan_and_parse("var x = 1 + 2 * 3; saida x;");
        assert!(!handler.has_errors());
        assert_eq!(stmts.len(), 2);
    }

    #[test]
    fn pipeline_surfaces_lexer_errors_to_the_same_handler() {
        let (_, handler) = scan_and_parse("var x = @;");
        assert!(handler.has_errors());
    }

    #[test]
    fn pipeline_surfaces_parser_errors_to_the_same_handler() {
        let (_, handler) = scan_and_parse("var ;");
        assert!(handler.has_errors());
    }

    #[test]
    fn environment_interop_with_parsed_literal_values() {
        let (stmts, handler) = scan_and_parse("var nome = \"ana\";");
        assert!(!handler.has_errors());
        let env = Environment::new();
        match &stmts[0] {
            Stmt::Var { name, initializer: Some(Expr::Literal(LiteralValue::Text(s))) } => {
                env.define(name.lexeme.clone(), Value::text(s.clone())).unwrap();
            }
            other => panic!("unexpected statement: {:?}", other),
        }
        assert_eq!(env.get(&Token::new(TokenKind::Identificar, "nome", 1, Span::DUMMY)).unwrap(), Value::text("ana"));
    }
}
