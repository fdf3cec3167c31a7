//! Human-readable output with optional ANSI color.

use std::io::{self, Write};

use prism_ir::NewlineList;

use super::DiagnosticEmitter;
use crate::{Diagnostic, Severity};

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m";
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => colors::ERROR,
        Severity::Warning => colors::WARNING,
    }
}

/// Color selection for [`TerminalEmitter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// The parsed file, used to resolve spans to lines and print excerpts.
#[derive(Copy, Clone, Debug)]
pub struct SourceContext<'src> {
    pub path: &'src str,
    pub source: &'src [u8],
    pub newlines: &'src NewlineList,
    pub start_line: i32,
}

impl SourceContext<'_> {
    /// Bytes of the line starting at `line_start`, without its terminator.
    fn line_text(&self, line_start: usize) -> &[u8] {
        let rest = self.source.get(line_start..).unwrap_or_default();
        let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
        let line = &rest[..end];
        line.strip_suffix(b"\r").unwrap_or(line)
    }
}

/// Writes `path:line:column: severity: message`, then the offending line
/// with a caret underline.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext<'src>>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source the diagnostics refer to. Without it only the byte
    /// span, severity and message are printed.
    #[must_use]
    pub fn with_source(mut self, source: SourceContext<'src>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_excerpt(&mut self, source: SourceContext<'_>, diagnostic: &Diagnostic) {
        let start = source
            .newlines
            .line_column(diagnostic.span.start, source.start_line);
        let line_start = (diagnostic.span.start - start.column) as usize;
        let text = String::from_utf8_lossy(source.line_text(line_start)).into_owned();
        let number = start.line.to_string();
        let gutter = " ".repeat(number.len());

        self.write_colored(&format!("{gutter} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.write_colored(&format!("{number} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {text}");
        self.write_colored(&format!("{gutter} |"), colors::GUTTER);

        // Underline stops at the end of the line. Zero-width spans still get
        // one caret.
        let column = start.column as usize;
        let width = (diagnostic.span.len() as usize)
            .min(text.len().saturating_sub(column))
            .max(1);
        let _ = write!(self.writer, " {:column$}", "");
        self.write_colored(&"^".repeat(width), severity_color(diagnostic.severity()));
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<'_, io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        match self.source {
            Some(source) => {
                let position = source
                    .newlines
                    .line_column(diagnostic.span.start, source.start_line);
                let location = format!(
                    "{}:{}:{}",
                    source.path,
                    position.line,
                    position.column + 1
                );
                if self.colors {
                    let _ = write!(self.writer, "{}{location}{}: ", colors::BOLD, colors::RESET);
                } else {
                    let _ = write!(self.writer, "{location}: ");
                }
            }
            None => {
                let _ = write!(self.writer, "{}: ", diagnostic.span);
            }
        }
        let severity = diagnostic.severity();
        self.write_colored(&severity.to_string(), severity_color(severity));
        let _ = writeln!(self.writer, ": {}", diagnostic.message());

        if let Some(source) = self.source {
            self.write_excerpt(source, diagnostic);
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let _ = write!(
                self.writer,
                ": {error_count} syntax error{}",
                plural_s(error_count)
            );
            if warning_count > 0 {
                let _ = write!(
                    self.writer,
                    "; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            }
            let _ = writeln!(self.writer);
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
