//! Test-only `IncludeResolver` fixture.
//!
//! A concrete, file-backed resolver is an external collaborator outside
//! this crate's scope; this in-memory stand-in lets the Parser's
//! `incluir` handling be exercised without a filesystem.

use std::collections::HashMap;

use nexus_diag::Handler;
use nexus_lex::Token;

use crate::error::ParseError;
use crate::parser::IncludeResolver;

/// Maps include paths directly to pre-scanned token streams.
#[derive(Default)]
pub struct InMemoryResolver {
    files: HashMap<String, String>,
}

impl InMemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `path` so that resolving it scans `source` fresh on every
    /// call, matching the `IncludeResolver` contract's re-scan-rather-than-
    /// cache semantics.
    pub fn with_file(mut self, path: impl Into<String>, source: impl Into<String>) -> Self {
        self.files.insert(path.into(), source.into());
        self
    }
}

impl IncludeResolver for InMemoryResolver {
    fn resolve(&mut self, path: &str) -> Result<Vec<Token>, ParseError> {
        match self.files.get(path) {
            Some(source) => {
                let handler = Handler::new();
                Ok(nexus_lex::scan(source, &handler))
            }
            None => Err(ParseError::resolver_unavailable(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_registered_file() {
        let mut resolver = InMemoryResolver::new().with_file("util.nx", "var x = 1;");
        let tokens = resolver.resolve("util.nx").unwrap();
        assert!(!tokens.is_empty());
        assert!(tokens.last().unwrap().is_eof());
    }

    #[test]
    fn missing_file_errors() {
        let mut resolver = InMemoryResolver::new();
        assert!(resolver.resolve("nao-existe.nx").is_err());
    }
}
