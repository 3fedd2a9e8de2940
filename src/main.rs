// Command-line entry point for callscan.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use callscan::application::AnalyzeUsecase;
use callscan::config::Config;
use callscan::infrastructure::{logging, SynAstParser};
use callscan::ports::text_exporter::TextExporter;

/// Index declarations and call sites of every Rust file under a directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory to scan
    #[arg(value_name = "ROOT")]
    root: Option<PathBuf>,
}

fn run(config: &Config) -> Result<()> {
    let usecase = AnalyzeUsecase {
        parser: &SynAstParser,
        exporter: &TextExporter,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    usecase.run(&config.root, &mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env(cli.root);

    if let Err(e) = logging::init_tracing(&config.log_filter) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
