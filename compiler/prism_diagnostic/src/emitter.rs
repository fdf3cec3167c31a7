//! Diagnostic output.
//!
//! The parser never prints; front ends pick an emitter and feed it the
//! lists from a finished parse.

mod terminal;

pub use terminal::{ColorMode, SourceContext, TerminalEmitter};

use crate::Diagnostic;

/// Sink for rendered diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all<'a>(&mut self, diagnostics: impl IntoIterator<Item = &'a Diagnostic>)
    where
        Self: Sized,
    {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// One closing line counting what was reported.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

#[cfg(test)]
mod tests;
