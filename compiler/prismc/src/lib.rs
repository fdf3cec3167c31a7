//! The `prism` command-line tool.
//!
//! Parses Ruby sources given as files or with `-e` and prints the tree,
//! the token stream or just the diagnostics.
//!
//! ```text
//! argv ──► args::parse_invocation ──► Invocation
//!                                        │
//!                                        ▼
//!                       commands::{parse, lex, check} (rayon, one task per input)
//!                                        │
//!                                        ▼
//!                  Report { stdout, stderr } printed in input order
//! ```

pub mod args;
pub mod commands;
mod error;

pub use args::{parse_invocation, Input, Invocation};
pub use commands::Report;
pub use error::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=prism_parse=debug`.
/// With `PRISM_LOG_TREE` set the output is an indented span tree.
/// Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("PRISM_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
