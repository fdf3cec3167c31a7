//! A single reported problem.

use crate::DiagnosticId;
use prism_ir::Span;
use std::borrow::Cow;
use std::fmt;

/// Error or warning. Errors mean recovery substituted something; warnings
/// leave the tree untouched.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Span plus message. Never mutated once appended.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Diagnostic {
    pub span: Span,
    pub id: DiagnosticId,
    /// Borrowed from the catalog, or owned when formatted with arguments.
    pub message: Cow<'static, str>,
}

impl Diagnostic {
    /// Diagnostic with the catalog's static text.
    pub fn new(span: Span, id: DiagnosticId) -> Self {
        Diagnostic {
            span,
            id,
            message: Cow::Borrowed(id.message()),
        }
    }

    /// Diagnostic with a message rendered from the catalog template.
    pub fn formatted(span: Span, id: DiagnosticId, message: String) -> Self {
        Diagnostic {
            span,
            id,
            message: Cow::Owned(message),
        }
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.id.severity()
    }

    /// True when the message was formatted into its own allocation.
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self.message, Cow::Owned(_))
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {:?}", self.id, self.message, self.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity(), self.message)
    }
}

#[cfg(test)]
mod tests;
