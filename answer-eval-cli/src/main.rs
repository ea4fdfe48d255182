use anyhow::Result;
use clap::Parser;

use answer_eval_cli::{commands, init_tracing, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!("Starting answer-eval");
    commands::run(cli)
}
