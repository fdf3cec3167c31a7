//! Diagnostics for the Prism Ruby parser.
//!
//! Parse problems are data, not control flow. The lexer and grammar append
//! to a [`DiagnosticList`] and keep going; callers inspect the lists once the
//! parse is complete. Each entry carries a [`DiagnosticId`] from a fixed
//! catalog, a [`prism_ir::Span`], and its rendered message.
//!
//! Messages are either borrowed from the static catalog or, for entries that
//! take arguments, formatted once into an owned string:
//!
//! ```text
//! list.append(span, DiagnosticId::DefTerm);
//! list.append_format(span, DiagnosticId::DuplicatedHashKey, &[":a".into(), 3.into()])?;
//! ```

mod catalog;
mod diagnostic;
pub mod emitter;
mod format;
mod list;

pub use catalog::DiagnosticId;
pub use diagnostic::{Diagnostic, Severity};
pub use format::{format_message, FormatArg, FormatError};
pub use list::DiagnosticList;
