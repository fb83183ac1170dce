//! CLI for the calcpoint calculator endpoint

use calcpoint_cli::{OutputFormat, commands, commands::PayloadSource, error::CliError};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "calcpoint")]
#[command(version, about = "CLI for the calcpoint calculator endpoint", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run a single calculation
    Calc {
        /// Operation name (see `calcpoint operations`)
        operation: String,

        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: f64,

        /// Second operand, required for binary operations
        #[arg(allow_negative_numbers = true)]
        b: Option<f64>,
    },
    /// Send a raw payload through the inference pipeline
    Invoke {
        /// Request body
        #[arg(long, short)]
        payload: Option<String>,

        /// Read the request body from a file ('-' for stdin)
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Request content type
        #[arg(long, default_value = "application/json")]
        content_type: String,

        /// Response accept type
        #[arg(long, default_value = "application/json")]
        accept: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Raw)]
        format: OutputFormat,

        /// Model directory handed to the load stage
        #[arg(long, env = "SM_MODEL_DIR")]
        model_dir: Option<PathBuf>,
    },
    /// List supported operations
    Operations,
    /// Run sample calculations, including failing ones
    Demo,
    /// Interactive calculator prompt
    Repl,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Some(Commands::Calc { operation, a, b }) => commands::run_calc(&operation, a, b),
        Some(Commands::Invoke {
            payload,
            file,
            content_type,
            accept,
            format,
            model_dir,
        }) => {
            let source = PayloadSource::from_args(payload, file)?;
            commands::run_invoke(source, &content_type, &accept, format, model_dir)
        }
        Some(Commands::Operations) => commands::run_operations(),
        Some(Commands::Demo) => commands::run_demo(),
        Some(Commands::Repl) => commands::run_repl(),
        None => {
            println!("calcpoint calculator endpoint");
            println!("Use --help for more information");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
