#![expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use super::*;
use crate::{DiagnosticId, DiagnosticList};
use pretty_assertions::assert_eq;
use prism_ir::{NewlineList, Span};

const SOURCE: &[u8] = b"x = 1\ny = (\n";

fn newlines() -> NewlineList {
    let mut newlines = NewlineList::new();
    newlines.append(5);
    newlines.append(11);
    newlines
}

fn render(mode: ColorMode, diagnostics: &DiagnosticList) -> String {
    let newlines = newlines();
    let context = SourceContext {
        path: "t.rb",
        source: SOURCE,
        newlines: &newlines,
        start_line: 1,
    };
    let mut emitter =
        TerminalEmitter::with_color_mode(Vec::new(), mode, false).with_source(context);
    emitter.emit_all(diagnostics);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn location_line_and_caret() {
    let mut list = DiagnosticList::new();
    list.append(Span::new(10, 11), DiagnosticId::ExpectRparen);
    let text = render(ColorMode::Never, &list);
    assert_eq!(
        text,
        format!(
            "t.rb:2:5: error: {}\n  |\n2 | y = (\n  |     ^\n",
            DiagnosticId::ExpectRparen.message()
        )
    );
}

#[test]
fn caret_stops_at_line_end() {
    let mut list = DiagnosticList::new();
    list.append(Span::new(4, 11), DiagnosticId::AmbiguousSlash);
    let text = render(ColorMode::Never, &list);
    assert!(text.starts_with("t.rb:1:5: warning: ambiguous"), "{text}");
    assert!(text.ends_with("\n  |     ^\n"), "{text}");
}

#[test]
fn colors_follow_mode() {
    let mut list = DiagnosticList::new();
    list.append(Span::new(0, 1), DiagnosticId::InvalidToken);
    assert!(render(ColorMode::Always, &list).contains("\x1b["));
    assert!(!render(ColorMode::Never, &list).contains("\x1b["));
    assert!(!render(ColorMode::Auto, &list).contains("\x1b["));
}

#[test]
fn without_source_prints_span() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit(&crate::Diagnostic::new(Span::new(3, 4), DiagnosticId::InvalidToken));
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(text, "(3...4): error: invalid token\n");
}

#[test]
fn summary_counts() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(2, 1);
    emitter.emit_summary(0, 3);
    emitter.emit_summary(0, 0);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        text,
        "error: 2 syntax errors; 1 warning emitted\nwarning: 3 warnings emitted\n"
    );
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}
