//! The `check` command: report syntax errors and warnings only.

use super::{run_jobs, Job, Report};
use crate::{CliError, Invocation};
use prism_diagnostic::emitter::SourceContext;

/// Parse each input, printing `Syntax OK` or its diagnostics with a
/// closing count.
pub fn check_inputs(invocation: &Invocation, is_tty: bool) -> Result<Vec<Report>, CliError> {
    run_jobs(invocation, is_tty, |job: &Job<'_>| {
        let result = prism_parse::parse(job.source, job.options);
        let context = SourceContext {
            path: job.name,
            source: job.source,
            newlines: &result.newlines,
            start_line: result.start_line,
        };
        let stdout = if result.is_success() {
            format!("{}: Syntax OK\n", job.name)
        } else {
            String::new()
        };
        Report {
            stdout,
            stderr: job.render_diagnostics(context, &result.errors, &result.warnings, true),
            failed: !result.is_success(),
        }
    })
}
