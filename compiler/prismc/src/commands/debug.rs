//! Debug commands: `parse` and `lex` for inspecting the parser.

use super::{run_jobs, Job, Report};
use crate::{CliError, Invocation};
use prism_diagnostic::emitter::SourceContext;
use std::fmt::Write;

/// Parse each input and dump its tree.
pub fn parse_inputs(invocation: &Invocation, is_tty: bool) -> Result<Vec<Report>, CliError> {
    run_jobs(invocation, is_tty, |job: &Job<'_>| {
        let result = prism_parse::parse(job.source, job.options);
        let mut stdout = result.dump();
        if let Some(data) = result.data_loc {
            let _ = writeln!(stdout, "__END__ {data}");
        }
        let context = SourceContext {
            path: job.name,
            source: job.source,
            newlines: &result.newlines,
            start_line: result.start_line,
        };
        Report {
            stdout,
            stderr: job.render_diagnostics(context, &result.errors, &result.warnings, false),
            failed: !result.is_success(),
        }
    })
}

/// Lex each input and list its tokens with the lexer state after each.
pub fn lex_inputs(invocation: &Invocation, is_tty: bool) -> Result<Vec<Report>, CliError> {
    run_jobs(invocation, is_tty, |job: &Job<'_>| {
        let result = prism_parse::lex(job.source, job.options);
        let mut stdout = String::new();
        for lexed in &result.tokens {
            let token = lexed.token;
            let kind = token.kind.to_string();
            let span = token.span.to_string();
            let state = lexed.state.to_string();
            let text = String::from_utf8_lossy(token.text(job.source));
            let _ = writeln!(stdout, "{kind:<24} {span:<14} {state:<20} {text:?}");
        }
        let context = SourceContext {
            path: job.name,
            source: job.source,
            newlines: &result.newlines,
            start_line: job.options.line,
        };
        Report {
            stdout,
            stderr: job.render_diagnostics(context, &result.errors, &result.warnings, false),
            failed: !result.errors.is_empty(),
        }
    })
}
