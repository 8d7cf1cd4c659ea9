//! Command-line arguments
//!
//! `sprime` with no subcommand behaves like `sprime run`.

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use sprime_core::port::generator::{DEFAULT_COUNT, DEFAULT_MIN_BYTES};

pub const DEFAULT_GENERATOR: &str = "./build/gen";

#[derive(Parser, Debug)]
#[command(name = "sprime")]
#[command(about = "Run the semiprime generator and print each semiprime with its factors", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,
}

impl Cli {
    /// Resolve the implicit `run` subcommand
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Run(self.run))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Invoke the generator and decode its output (default)
    Run(RunArgs),

    /// Decode an already captured generator buffer
    Decode(DecodeArgs),
}

impl Commands {
    pub fn records(&self) -> &RecordArgs {
        match self {
            Commands::Run(args) => &args.records,
            Commands::Decode(args) => &args.records,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Generator executable (`~` is expanded)
    #[arg(long, env = "SPRIME_GENERATOR", default_value = DEFAULT_GENERATOR)]
    pub generator: String,

    /// Argument placed before the generator's own arguments (repeatable)
    #[arg(long = "generator-arg", allow_hyphen_values = true)]
    pub generator_args: Vec<String>,

    /// Semiprime width in bytes (generator `min_bytes`)
    #[arg(long, default_value_t = DEFAULT_MIN_BYTES)]
    pub bytes: usize,

    /// Upper bound for the semiprime width (generator `max_bytes`)
    #[arg(long)]
    pub max_bytes: Option<usize>,

    #[command(flatten)]
    pub records: RecordArgs,
}

#[derive(Args, Debug, Clone)]
pub struct DecodeArgs {
    /// Captured buffer file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub records: RecordArgs,
}

#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    /// Number of records to request and decode (at least 1)
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_COUNT,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub count: usize,

    /// Fail unless factor1 * factor2 equals the semiprime
    #[arg(long)]
    pub check: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `factor1 * factor2 = sprime`, one line per record
    Text,
    /// JSON array of records with decimal string values
    Json,
}
