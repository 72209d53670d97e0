// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Contact Index - Main entrypoint.
//!
//! Loads configuration, initializes logging, opens the contact book and then
//! either runs the interactive shell or a single command.

use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use contact_index_lib::config::{ConfigLoader, ContactConfig, LogConfig, ENV_PREFIX};
use contact_index_lib::error::{set_error_reporter, ContactError, ContactResult, TracingErrorReporter};
use contact_index_lib::shell::Shell;
use contact_index_lib::store::{
    ContactBook, JsonFileRepository, PatternValidator, Record, RecordUpdate,
};

/// Command line arguments for the contact index.
#[derive(Parser, Debug)]
#[clap(name = "contact_index", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Path to the contacts snapshot, overrides the configured path
    #[clap(short, long, value_parser)]
    data: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive menu
    Shell,

    /// Add a contact
    Add {
        /// Contact name
        name: String,
        /// Contact email
        email: String,
        /// Ten-digit phone number
        phone: String,
    },

    /// List all contacts sorted by name
    List,

    /// Search names and emails for a substring
    Search {
        /// Text to look for, case-insensitive
        query: String,
    },

    /// Update a contact
    Update {
        /// Phone of the contact to update
        phone: String,
        /// New name
        #[clap(long)]
        name: Option<String>,
        /// New email
        #[clap(long)]
        email: Option<String>,
        /// New phone number
        #[clap(long = "new-phone")]
        new_phone: Option<String>,
    },

    /// Delete a contact
    Delete {
        /// Phone of the contact to delete
        phone: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so command output on stdout stays clean.
fn init_logging(log: &LogConfig) -> ContactResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.with_target(false).finish())
    };

    result.map_err(|e| ContactError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn print_records(records: &[Record], empty: &str) {
    if records.is_empty() {
        println!("{empty}");
    }
    for record in records {
        println!("{record}");
    }
}

/// Runs a command that needs the contact book.
fn run_book_command(command: Command, config: &ContactConfig) -> ContactResult<()> {
    let validator = PatternValidator::from_config(&config.validation)?;
    let repository = JsonFileRepository::from_config(&config.storage);
    let mut book = ContactBook::open(repository, validator);

    match command {
        Command::Shell => {
            let stdin = io::stdin();
            Shell::new(stdin.lock(), io::stdout()).run(&mut book)?;
        }
        Command::Add { name, email, phone } => {
            let record = book.add(&name, &email, &phone)?;
            println!("Added: {record}");
        }
        Command::List => print_records(&book.list(), "No contacts."),
        Command::Search { query } => print_records(&book.search(&query), "No matching contacts."),
        Command::Update {
            phone,
            name,
            email,
            new_phone,
        } => {
            let update = RecordUpdate {
                name,
                email,
                phone: new_phone,
            };
            if update.is_empty() {
                println!("Nothing to change.");
            } else {
                let record = book.update(&phone, update)?;
                println!("Updated: {record}");
            }
        }
        Command::Delete { phone } => {
            let record = book.delete(&phone)?;
            println!("Deleted: {record}");
        }
        Command::Validate | Command::GenConfig { .. } => {
            return Err(ContactError::Custom(
                "command does not use the contact book".to_string(),
            ))
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> ContactResult<()> {
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let mut config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            tracing::error!("Configuration error: {}", e);
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };
    if let Some(data) = args.data {
        if let Err(e) = config.override_storage_path(data) {
            init_logging(&LogConfig::default())?;
            tracing::error!("Configuration error: {}", e);
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    }

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command.unwrap_or(Command::Shell) {
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("Configuration is valid.");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = ContactConfig::default();

            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| ContactError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
        command => {
            if let Err(e) = run_book_command(command, &config) {
                tracing::debug!(error = ?e, "Command failed");
                eprintln!("Error: {e}");
                process::exit(1);
            }
            Ok(())
        }
    }
}
