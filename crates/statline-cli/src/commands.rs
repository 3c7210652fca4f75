use std::io;

use anyhow::{Context, Result};
use tracing::info_span;

use statline_cli::pipeline::run;
use statline_cli::prompt::prompt_for_path;
use statline_cli::types::{RunOptions, RunResult};

use crate::cli::Cli;

/// Resolves the input path (prompting when none was given) and runs the
/// pipeline on it.
pub fn run_transform(cli: &Cli) -> Result<RunResult> {
    let input = match &cli.path {
        Some(path) => path.clone(),
        None => prompt_for_path(&mut io::stdin().lock(), &mut io::stdout())
            .context("read input path")?,
    };
    let options = RunOptions::new(input)
        .with_output(cli.output.clone())
        .with_dry_run(cli.dry_run);

    let span = info_span!("statline", input = %options.input.display(), dry_run = options.dry_run);
    let _guard = span.enter();
    run(&options)
}
