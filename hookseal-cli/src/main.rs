//! hookseal CLI - dispatch, sign and verify client webhooks.
//!
//! # Commands
//!
//! - `hookseal dispatch --event <kind> --record <json|@file>` - Send one client event
//! - `hookseal sign --payload <json|@file>` - Print the token for a payload
//! - `hookseal verify --token <token>` - Check a token and print its payload
//! - `hookseal config check` - Validate settings and print a redacted summary
//!
//! Settings come from `--config` (TOML, JSON or `.env`) and `HOOKSEAL_*`
//! environment variables; the environment wins.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

mod commands;
mod error;

use error::CliResult;

/// hookseal - signed webhooks for client lifecycle events
#[derive(Parser)]
#[command(name = "hookseal")]
#[command(version)]
#[command(about = "Dispatch, sign and verify signed client webhooks")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (.toml, .json or .env)
    #[arg(short, long, global = true, env = "HOOKSEAL_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one client event to its configured endpoint
    #[command(alias = "d")]
    Dispatch {
        /// Event kind: ClientAdd, ClientEdit or ClientDelete
        #[arg(short, long)]
        event: String,

        /// Event record as inline JSON, or @path to a JSON file
        #[arg(short, long)]
        record: String,

        /// Print the activity entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sign a JSON payload and print the token
    Sign {
        /// Payload as inline JSON, or @path to a JSON file
        #[arg(short, long)]
        payload: String,
    },

    /// Verify a token and print its payload
    Verify {
        /// Compact token, optionally prefixed with "Bearer "
        #[arg(short, long)]
        token: String,
    },

    /// Validate and inspect configuration
    #[command(alias = "c")]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Load settings and print a redacted summary
    Check,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    hookseal_log::init();

    let config = cli.config.as_deref();
    let result: CliResult<()> = match cli.command {
        Commands::Dispatch {
            event,
            record,
            json,
        } => commands::dispatch::execute(&event, &record, config, json).await,
        Commands::Sign { payload } => commands::sign::execute(&payload, config),
        Commands::Verify { token } => commands::verify::execute(&token, config),
        Commands::Config { command } => match command {
            ConfigCommands::Check => commands::config::check(config),
        },
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_dispatch() {
        let cli = Cli::parse_from([
            "hookseal",
            "dispatch",
            "--event",
            "ClientDelete",
            "--record",
            r#"{"userid":7}"#,
            "--config",
            "hookseal.toml",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("hookseal.toml")));
        match cli.command {
            Commands::Dispatch { event, record, json } => {
                assert_eq!(event, "ClientDelete");
                assert_eq!(record, r#"{"userid":7}"#);
                assert!(!json);
            }
            _ => panic!("expected dispatch"),
        }
    }

    #[test]
    fn test_parse_config_check() {
        let cli = Cli::parse_from(["hookseal", "config", "check"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                command: ConfigCommands::Check
            }
        ));
    }
}
