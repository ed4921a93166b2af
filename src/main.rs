//! quizgate CLI - validate quiz request payloads from files or stdin.
//!
//! Commands:
//! - check: validate one JSON payload, print the API response body
//! - config-schema: print the JSON schema of the config file

use clap::{Parser, Subcommand};
use quizgate::{ApiResponse, ValidatorConfig};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "quizgate", version, about = "Quiz request payload validator")]
struct Cli {
    /// Validator config file (JSON). Built-in reference data when omitted.
    #[arg(long, global = true, env = "QUIZGATE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a payload; exits 1 when it is rejected.
    Check {
        /// Payload file. Reads stdin when omitted or `-`.
        file: Option<PathBuf>,
    },
    /// Print the JSON schema of the config file.
    ConfigSchema,
}

fn main() -> ExitCode {
    quizgate::observability::init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "quizgate failed");
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> quizgate::Result<ExitCode> {
    match cli.command {
        Commands::Check { file } => {
            let config = match &cli.config {
                Some(path) => ValidatorConfig::from_path(path)?,
                None => ValidatorConfig::default(),
            };
            let validator = quizgate::init(config)?;

            let body = read_input(file.as_deref())?;
            let result = validator.validate_json(&body);
            let response = ApiResponse::from(&result);
            println!("{}", serde_json::to_string(&response)?);

            Ok(if result.ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::ConfigSchema => {
            let schema = schemars::schema_for!(ValidatorConfig);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_input(file: Option<&std::path::Path>) -> std::io::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path),
        _ => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}
