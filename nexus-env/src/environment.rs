//! The Environment chain: lexical scope frames supporting define/get/assign
//! plus resolver-assisted distance lookups.
//!
//! Grounded on `faxc-sem::scope`'s `ScopeTree` walking idiom (`parent`
//! links, `resolve` walking toward the root), generalized from that
//! crate's static arena-indexed ribs to a dynamic `Rc<RefCell<_>>` chain:
//! closures need a frame to outlive its textual scope, so frames are
//! individually heap-allocated with shared ownership rather than indexed
//! into a single arena that assumes a resolver has already computed every
//! access statically.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use nexus_lex::Token;

use crate::error::EnvError;
use crate::value::Value;

/// A single lexical scope frame. Always held behind `Rc` by its owner (the
/// evaluator, out of scope here, or a test): the parent link is a shared
/// reference, never an owning one, so no cycles are created even though a
/// closure may extend a frame's lifetime past its lexical exit.
pub struct Environment {
    values: RefCell<HashMap<String, Value>>,
    enclosing: Option<Rc<Environment>>,
}

impl Environment {
    /// A fresh global frame with no parent.
    pub fn new() -> Rc<Environment> {
        Rc::new(Environment { values: RefCell::new(HashMap::new()), enclosing: None })
    }

    /// A new frame nested inside `enclosing`, created on entry to a block,
    /// function call, or class body.
    pub fn nested(enclosing: &Rc<Environment>) -> Rc<Environment> {
        Rc::new(Environment { values: RefCell::new(HashMap::new()), enclosing: Some(Rc::clone(enclosing)) })
    }

    pub fn enclosing(&self) -> Option<&Rc<Environment>> {
        self.enclosing.as_ref()
    }

    /// Binds `name` in *this* frame. A duplicate name in the same frame is
    /// a fatal configuration error in the source language (process exit
    /// 65); this returns it as a value so a library host can decide how to
    /// react — see [`crate::terminate_on_duplicate_definition`].
    pub fn define(&self, name: impl Into<String>, value: Value) -> Result<(), EnvError> {
        let name = name.into();
        let mut values = self.values.borrow_mut();
        if values.contains_key(&name) {
            return Err(EnvError::DuplicateDefinition { name });
        }
        values.insert(name, value);
        Ok(())
    }

    /// Returns the binding for `name` from the nearest enclosing frame that
    /// has it, walking the chain dynamically.
    pub fn get(&self, name: &Token) -> Result<Value, EnvError> {
        if let Some(value) = self.values.borrow().get(&name.lexeme) {
            return Ok(value.clone());
        }
        match &self.enclosing {
            Some(parent) => parent.get(name),
            None => Err(EnvError::UndefinedVariable { name: name.lexeme.clone(), line: name.line }),
        }
    }

    /// Overwrites the binding for `name` in the nearest enclosing frame
    /// that has it, walking the chain dynamically.
    pub fn assign(&self, name: &Token, value: Value) -> Result<(), EnvError> {
        if self.values.borrow().contains_key(&name.lexeme) {
            self.values.borrow_mut().insert(name.lexeme.clone(), value);
            return Ok(());
        }
        match &self.enclosing {
            Some(parent) => parent.assign(name, value),
            None => Err(EnvError::UndefinedVariable { name: name.lexeme.clone(), line: name.line }),
        }
    }

    /// The frame reached by following `enclosing` exactly `distance` times.
    ///
    /// # Panics
    /// Panics if `distance` exceeds the chain's depth. Callers that supply
    /// a resolver-computed distance (the intended use) never hit this; see
    /// `get_at`'s doc comment for the unresolved-name case this does *not*
    /// guard against.
    fn ancestor(&self, distance: usize) -> &Environment {
        let mut env = self;
        for _ in 0..distance {
            env = env
                .enclosing
                .as_deref()
                .expect("getAt/assignAt distance exceeds the Environment chain depth");
        }
        env
    }

    /// Returns `name` from the frame `distance` hops up the chain, for
    /// resolver-assisted lookups.
    ///
    /// Faithfully reproduces `anchestor(distance)->values[name]`'s
    /// container semantics: `std::unordered_map::operator[]`
    /// default-constructs and inserts on a missing key, so a lookup for a
    /// name the (separate, out-of-scope)
    /// resolver failed to actually prove present silently returns
    /// [`Value::Nil`] and *leaves that binding inserted* rather than
    /// failing. This is a documented precondition, not a recoverable error
    /// path: `get_at`/`assign_at` assume the resolver already proved the
    /// binding exists at this depth.
    pub fn get_at(&self, distance: usize, name: &str) -> Value {
        let frame = self.ancestor(distance);
        let mut values = frame.values.borrow_mut();
        values.entry(name.to_string()).or_insert_with(Value::default).clone()
    }

    /// Symmetric writer to [`Environment::get_at`].
    pub fn assign_at(&self, distance: usize, name: &Token, value: Value) {
        let frame = self.ancestor(distance);
        frame.values.borrow_mut().insert(name.lexeme.clone(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_diag::Span;

    fn ident(name: &str, line: u32) -> Token {
        Token::new(nexus_lex::TokenKind::Identificar, name, line, Span::DUMMY)
    }

    #[test]
    fn define_then_get_round_trips() {
        let env = Environment::new();
        env.define("x", Value::Number(1.0)).unwrap();
        assert_eq!(env.get(&ident("x", 1)).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn duplicate_define_in_same_frame_errors() {
        let env = Environment::new();
        env.define("a", Value::Nil).unwrap();
        let err = env.define("a", Value::Number(2.0)).unwrap_err();
        assert_eq!(err, EnvError::DuplicateDefinition { name: "a".to_string() });
    }

    #[test]
    fn get_undefined_reports_line() {
        let env = Environment::new();
        let err = env.get(&ident("nope", 7)).unwrap_err();
        assert_eq!(err, EnvError::UndefinedVariable { name: "nope".to_string(), line: 7 });
    }

    #[test]
    fn nested_frame_shadows_outer() {
        let global = Environment::new();
        global.define("a", Value::Number(1.0)).unwrap();
        let inner = Environment::nested(&global);
        inner.define("a", Value::Number(2.0)).unwrap();

        assert_eq!(inner.get(&ident("a", 1)).unwrap(), Value::Number(2.0));
        assert_eq!(global.get(&ident("a", 1)).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn get_walks_to_enclosing_frame() {
        let global = Environment::new();
        global.define("a", Value::Number(1.0)).unwrap();
        let inner = Environment::nested(&global);
        assert_eq!(inner.get(&ident("a", 1)).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn assign_overwrites_in_defining_frame_not_local() {
        let global = Environment::new();
        global.define("a", Value::Number(1.0)).unwrap();
        let inner = Environment::nested(&global);
        inner.assign(&ident("a", 1), Value::Number(9.0)).unwrap();

        assert_eq!(global.get(&ident("a", 1)).unwrap(), Value::Number(9.0));
    }

    #[test]
    fn assign_undefined_errors() {
        let env = Environment::new();
        assert!(env.assign(&ident("missing", 3), Value::Nil).is_err());
    }

    #[test]
    fn get_at_zero_reads_local_frame() {
        let env = Environment::new();
        env.define("a", Value::Number(5.0)).unwrap();
        assert_eq!(env.get_at(0, "a"), Value::Number(5.0));
    }

    #[test]
    fn get_at_walks_exact_distance() {
        let global = Environment::new();
        global.define("a", Value::Number(1.0)).unwrap();
        let mid = Environment::nested(&global);
        let inner = Environment::nested(&mid);
        assert_eq!(inner.get_at(2, "a"), Value::Number(1.0));
    }

    #[test]
    fn get_at_missing_name_defaults_to_nil() {
        let env = Environment::new();
        assert_eq!(env.get_at(0, "ghost"), Value::Nil);
    }

    #[test]
    fn assign_at_writes_exact_frame() {
        let global = Environment::new();
        global.define("a", Value::Number(1.0)).unwrap();
        let inner = Environment::nested(&global);
        inner.assign_at(1, &ident("a", 1), Value::Number(42.0));
        assert_eq!(global.get(&ident("a", 1)).unwrap(), Value::Number(42.0));
    }

    #[test]
    fn closure_frame_outlives_lexical_scope() {
        let global = Environment::new();
        let captured = {
            let block = Environment::nested(&global);
            block.define("captured", Value::text("alive")).unwrap();
            Rc::clone(&block)
        };
        assert_eq!(captured.get(&ident("captured", 1)).unwrap(), Value::text("alive"));
    }
}
