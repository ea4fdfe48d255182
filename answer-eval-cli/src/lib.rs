pub mod cli;
pub mod commands;
pub mod config;
pub mod output;

pub use cli::Cli;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives used when `RUST_LOG` is unset: `warn` for the
/// workspace crates by default, `info` with `-v`, `debug` with `-vv`.
pub fn default_directives(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    format!(
        "answer_eval_cli={level},answer_eval_metrics={level},answer_eval_core={level}",
        level = level
    )
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for JSON output. `RUST_LOG` overrides the verbosity flag.
pub fn init_tracing(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}
