//! Diagnostics sink and source-position model shared by the Nexus Scanner,
//! Parser, and Environment.
//!
//! Grounded on `faxc-util::diagnostic` and `faxc-util::span`, trimmed to
//! what Nexus's diagnostic formats need: no `DiagnosticCode` registry or
//! `SourceSnippet` rendering, since Nexus's own diagnostic formats are
//! plain single-line strings.

mod diagnostic;
mod span;

pub use diagnostic::{Category, Diagnostic, Handler, Level};
pub use span::Span;
