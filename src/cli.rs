use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use scorebook::pipeline::stage4_report::ReportFormat;

#[derive(Parser, Debug)]
#[command(
    name = "scorebook",
    version,
    about = "Ingest student project submissions and report standings"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Debug-level logging")]
    pub verbose: bool,
    #[arg(short, long, global = true, help = "Only log errors")]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a roster, ingest submission files concurrently and report.
    Run(RunArgs),
    /// Parse submission files and report malformed lines.
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[arg(long = "tests", short = 'n', help = "Number of tests per submission")]
    pub test_count: usize,
    #[arg(long, help = "Roster file, one student name per line")]
    pub roster: PathBuf,
    #[arg(long, help = "Directory for standings.tsv, ingest.tsv and reports")]
    pub out: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::All)]
    pub format: OutputFormat,
    #[arg(long, help = "Print the JSON summary to stdout instead of the table")]
    pub json: bool,
    #[arg(required = true, help = "Submission files (plain or .gz)")]
    pub files: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    All,
}

impl From<OutputFormat> for ReportFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::All => ReportFormat::All,
        }
    }
}
