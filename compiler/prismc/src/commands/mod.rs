//! Command handlers for the `prism` CLI.
//!
//! Every command runs one task per input on the rayon pool and hands back a
//! [`Report`] per input, in input order. Printing and the exit code are left
//! to the binary.

use crate::{CliError, Input, Invocation};
use prism_diagnostic::emitter::{DiagnosticEmitter, SourceContext, TerminalEmitter};
use prism_diagnostic::DiagnosticList;
use prism_parse::Options;
use rayon::prelude::*;

mod check;
mod debug;

pub use check::check_inputs;
pub use debug::{lex_inputs, parse_inputs};

/// Output for one input.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Report {
    pub stdout: String,
    pub stderr: String,
    /// The input had syntax errors.
    pub failed: bool,
}

/// The source being reported on.
struct Job<'a> {
    name: &'a str,
    source: &'a [u8],
    options: &'a Options,
    is_tty: bool,
    invocation: &'a Invocation,
}

impl Job<'_> {
    /// Render `errors` then `warnings` the way a terminal would show them.
    fn render_diagnostics(
        &self,
        context: SourceContext<'_>,
        errors: &DiagnosticList,
        warnings: &DiagnosticList,
        summary: bool,
    ) -> String {
        let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), self.invocation.color, self.is_tty)
            .with_source(context);
        emitter.emit_all(errors);
        emitter.emit_all(warnings);
        if summary {
            emitter.emit_summary(errors.len(), warnings.len());
        }
        emitter.flush();
        String::from_utf8_lossy(&emitter.into_inner()).into_owned()
    }
}

/// Read every input and run `work` on it in parallel.
///
/// Fails on the first input that cannot be read; syntax errors are part of
/// the report, not a failure.
fn run_jobs<F>(invocation: &Invocation, is_tty: bool, work: F) -> Result<Vec<Report>, CliError>
where
    F: Fn(&Job<'_>) -> Report + Sync,
{
    invocation
        .inputs
        .par_iter()
        .map(|input: &Input| {
            let name = input.display_name();
            let _span = tracing::debug_span!("input", name = %name).entered();
            let source = input.read()?;
            let options = invocation.options.clone().with_filepath(name.clone());
            let job = Job {
                name: &name,
                source: &source,
                options: &options,
                is_tty,
                invocation,
            };
            Ok(work(&job))
        })
        .collect()
}

#[cfg(test)]
mod tests;
