//! Environment: the lexical-scope chain and runtime `Value` shared by the
//! Nexus interpreter core's evaluator layer.
//!
//! Grounded on `faxc-sem`'s scope-chain module for the walking idiom, with
//! the storage shape changed to the `Rc<RefCell<_>>` chain (see
//! `environment.rs`'s module doc comment for why).

mod environment;
mod error;
mod value;

pub use environment::Environment;
pub use error::EnvError;
pub use value::Value;

/// Embedder-facing helper that terminates the process with exit code 65
/// on a duplicate same-frame definition, without baking a process exit
/// into the library's own `Environment::define`. A host that wants that
/// historical CLI behavior calls this on the `Err` path; a host embedding
/// Nexus as a library is free to recover instead.
pub fn terminate_on_duplicate_definition(result: Result<(), EnvError>) {
    if let Err(err @ EnvError::DuplicateDefinition { .. }) = result {
        eprintln!("{err}");
        std::process::exit(65);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_diag::Span;
    use nexus_lex::{Token, TokenKind};

    fn ident(name: &str, line: u32) -> Token {
        Token::new(TokenKind::Identificar, name, line, Span::DUMMY)
    }

    #[test]
    fn shadowing_seed_scenario_prints_inner_then_outer() {
        // { var a = 1; { var a = 2; saida a; } saida a; } -> prints 2 then 1
        let global = Environment::new();
        global.define("a", Value::Number(1.0)).unwrap();
        let block = Environment::nested(&global);
        block.define("a", Value::Number(2.0)).unwrap();

        assert_eq!(block.get(&ident("a", 1)).unwrap(), Value::Number(2.0));
        assert_eq!(global.get(&ident("a", 1)).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn duplicate_definition_seed_scenario_is_fatal_via_helper() {
        let env = Environment::new();
        env.define("a", Value::Nil).unwrap();
        let result = env.define("a", Value::Number(1.0));
        assert!(matches!(result, Err(EnvError::DuplicateDefinition { .. })));
        // `terminate_on_duplicate_definition` itself calls `process::exit`
        // and is therefore only exercised by the embedder's own binary,
        // not by this library's own test suite.
    }
}
