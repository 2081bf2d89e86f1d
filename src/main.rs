mod cli;

use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::warn;

use scorebook::input::InputError;
use scorebook::input::line::check_file;
use scorebook::logging::{self, Verbosity};
use scorebook::pipeline::stage1_roster::load_roster;
use scorebook::pipeline::stage2_ingest::IngestError;
use scorebook::pipeline::stage4_report::write_reports;
use scorebook::report::build_summary;
use scorebook::report::json::render_summary_json;
use scorebook::report::text::render_standings_table;
use scorebook::{ConfigError, Gradebook};

use crate::cli::{Cli, Commands, RunArgs};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("roster: {0}")]
    Roster(#[from] InputError),
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error("writing reports: {0}")]
    Io(#[from] std::io::Error),
    #[error("rendering JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    let result = match cli.command {
        Commands::Run(args) => run(args),
        Commands::Check { files } => Ok(check(&files)),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: RunArgs) -> Result<ExitCode, AppError> {
    let book = Gradebook::new(args.test_count)?;
    let roster = load_roster(book.roster(), &args.roster)?;
    let ingest = book.ingest(&args.files)?;
    let summary = build_summary(&book, roster, ingest);

    if args.json {
        println!("{}", render_summary_json(&summary)?);
    } else {
        print!("{}", render_standings_table(&summary.standings));
    }

    if let Some(out_dir) = &args.out {
        write_reports(&summary, out_dir, args.format.into())?;
    }

    Ok(ExitCode::SUCCESS)
}

fn check(files: &[std::path::PathBuf]) -> ExitCode {
    let mut clean = true;
    for path in files {
        match check_file(path) {
            Ok(result) => {
                for (line, err) in &result.failures {
                    println!("{}:{}: {}", path.display(), line, err);
                }
                println!(
                    "{}\t{} lines\t{} unparsable",
                    path.display(),
                    result.lines,
                    result.failures.len()
                );
                clean &= result.failures.is_empty();
            }
            Err(err) => {
                warn!(file = %path.display(), error = %err, "cannot check file");
                println!("{}\tunreadable\t{}", path.display(), err);
                clean = false;
            }
        }
    }
    if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
