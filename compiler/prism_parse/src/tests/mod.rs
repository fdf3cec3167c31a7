//! Parser driver tests and helpers shared by the grammar test modules.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod driver;
mod recovery;

use crate::{parse, Options, ParseResult};
use prism_diagnostic::DiagnosticId;
use prism_ir::{NodeId, NodeKind};

/// Parse with default options (warnings kept).
pub(crate) fn parse_source(source: &[u8]) -> ParseResult {
    parse(source, &Options::default())
}

/// Node kind names in pre-order.
pub(crate) fn node_names(source: &[u8]) -> Vec<&'static str> {
    let result = parse_source(source);
    let mut names = Vec::new();
    result.ast.walk(result.root, |id, _| names.push(result.ast.kind(id).name()));
    names
}

/// The first top-level statement.
pub(crate) fn first_statement(source: &[u8]) -> (ParseResult, NodeId) {
    let result = parse_source(source);
    let NodeKind::Program { statements, .. } = result.ast.kind(result.root) else {
        panic!("root is not a program");
    };
    let NodeKind::Statements { body } = result.ast.kind(statements) else {
        panic!("program body is not a statement list");
    };
    let first = *result.ast.list(body).first().expect("no statements");
    (result, first)
}

/// The first node of the given kind name, in pre-order.
pub(crate) fn find_named(result: &ParseResult, name: &str) -> NodeId {
    result
        .ast
        .find(result.root, |kind| kind.name() == name)
        .unwrap_or_else(|| panic!("no {name} node"))
}

pub(crate) fn error_ids(source: &[u8]) -> Vec<DiagnosticId> {
    parse_source(source).errors.ids()
}

pub(crate) fn warning_ids(source: &[u8]) -> Vec<DiagnosticId> {
    parse_source(source).warnings.ids()
}
