//! CLI entry point for image batch preparation

use batchprep::io::cli::Cli;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    match cli.run() {
        Ok(report) => {
            log::debug!(
                "Preparation finished ({:?}, {} tensors written)",
                report.state,
                report.batches.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(err.kind().exit_code())
        }
    }
}
