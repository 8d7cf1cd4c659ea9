//! sprime - run the semiprime generator and print factorizations
//!
//! Default behavior: `./build/gen 10 -v -c 1`, decode the captured
//! s-prime and both factors, print `factor1 * factor2 = sprime`.

mod cli;
mod logging;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tokio::io::AsyncReadExt;
use tracing::info;

use cli::{Cli, Commands, DecodeArgs, RunArgs};
use sprime_core::application::{decode_records, ReaderOptions, SemiprimeReader};
use sprime_core::domain::SemiprimeRecord;
use sprime_core::port::time_provider::SystemTimeProvider;
use sprime_core::port::GenerationRequest;
use sprime_infra_system::SubprocessGenerator;

async fn run_generator(args: &RunArgs) -> Result<Vec<SemiprimeRecord>> {
    let program = shellexpand::tilde(&args.generator).into_owned();

    let generator = Arc::new(
        SubprocessGenerator::new(Arc::new(SystemTimeProvider), program.clone())
            .with_prefix_args(args.generator_args.clone()),
    );
    let reader = SemiprimeReader::new(
        generator,
        ReaderOptions {
            check_factors: args.records.check,
        },
    );

    let request = GenerationRequest {
        min_bytes: args.bytes,
        max_bytes: args.max_bytes,
        count: args.records.count,
    };

    reader
        .read(&request)
        .await
        .with_context(|| format!("Failed to read semiprimes from {}", program))
}

async fn decode_input(args: &DecodeArgs) -> Result<Vec<SemiprimeRecord>> {
    let buf = match &args.input {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("Failed to read stdin")?;
            buf
        }
    };

    info!(bytes = buf.len(), "Captured buffer loaded");

    decode_records(&buf, args.records.count, args.records.check)
        .context("Captured buffer does not match the record layout")
}

async fn execute(command: Commands) -> Result<()> {
    let records = match &command {
        Commands::Run(args) => run_generator(args).await?,
        Commands::Decode(args) => decode_input(args).await?,
    };

    let rendered = output::render(&records, command.records().format)?;
    print!("{}", rendered);

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let command = Cli::parse().into_command();

    if let Err(e) = logging::init_logging(command.records().verbose) {
        eprintln!("{} Logging disabled: {:#}", "!".yellow().bold(), e);
    }

    match execute(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
