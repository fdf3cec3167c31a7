//! Append-only per-parse diagnostic collection.

use crate::{format_message, Diagnostic, DiagnosticId, FormatArg, FormatError};
use prism_ir::Span;

/// Diagnostics in the order they were detected.
///
/// Detection order is not always byte order: look-ahead can report a later
/// span before an earlier one. [`DiagnosticList::sort`] orders by location
/// for presentation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticList {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic using the catalog's static message.
    pub fn append(&mut self, span: Span, id: DiagnosticId) {
        tracing::trace!(?id, %span, "diagnostic");
        self.diagnostics.push(Diagnostic::new(span, id));
    }

    /// Append a diagnostic whose catalog entry is a template.
    ///
    /// On a template error nothing is appended; callers fall back to
    /// [`DiagnosticList::append`].
    pub fn append_format(
        &mut self,
        span: Span,
        id: DiagnosticId,
        args: &[FormatArg<'_>],
    ) -> Result<(), FormatError> {
        let message = format_message(id.message(), args)?;
        tracing::trace!(?id, %span, %message, "diagnostic");
        self.diagnostics
            .push(Diagnostic::formatted(span, id, message));
        Ok(())
    }

    /// Move every diagnostic of `other` to the end of this list.
    pub fn extend(&mut self, other: DiagnosticList) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Stable sort by start offset, then end offset.
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by_key(|diagnostic| (diagnostic.span.start, diagnostic.span.end));
    }

    pub fn contains(&self, id: DiagnosticId) -> bool {
        self.diagnostics.iter().any(|diagnostic| diagnostic.id == id)
    }

    /// Ids in list order; convenient for assertions.
    pub fn ids(&self) -> Vec<DiagnosticId> {
        self.diagnostics.iter().map(|diagnostic| diagnostic.id).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Release every diagnostic. Owned messages are freed with their record.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl<'a> IntoIterator for &'a DiagnosticList {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl IntoIterator for DiagnosticList {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

#[cfg(test)]
mod tests;
