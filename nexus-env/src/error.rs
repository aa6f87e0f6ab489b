//! Typed errors at the Environment's seam, following
//! `faxc-util/src/error.rs`'s one-variant-per-failure-mode shape.
//!
//! A runtime error raised during evaluation *is* one of these variants
//! plus whatever the (out-of-scope) evaluator layers on top of it.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvError {
    /// `get`/`assign` found no binding for `name` in the frame chain.
    #[error("Variavel indefinida: '{name}'.")]
    UndefinedVariable { name: String, line: u32 },

    /// `define` was called twice for the same name in one frame. Fatal
    /// (process exit 65) in a CLI-shaped embedding — this crate returns it
    /// as a value instead; see [`crate::terminate_on_duplicate_definition`]
    /// for the embedder-facing helper that preserves that exit behavior.
    #[error("Definicao duplicada de '{name}' no mesmo escopo.")]
    DuplicateDefinition { name: String },
}

impl EnvError {
    pub fn line(&self) -> Option<u32> {
        match self {
            EnvError::UndefinedVariable { line, .. } => Some(*line),
            EnvError::DuplicateDefinition { .. } => None,
        }
    }
}
