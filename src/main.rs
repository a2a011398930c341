//! totp - TOTP secrets manager
//!
//! Keeps TOTP seeds in the platform keychain, asks for biometric
//! verification before revealing or deleting one, and prints the current
//! one-time code.

use clap::{CommandFactory, Parser, Subcommand};
use totp_core::{config::toml_config::load_config, error::TotpError, init_logging, types::RetrieveRequest};

mod cli;

#[derive(Parser)]
#[command(name = "totp")]
#[command(about = "totp secrets manager")]
#[command(override_usage = "totp [OPTIONS] [NAME]\n       totp <COMMAND>")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Name of a stored secret to show the current code for
    name: Option<String>,

    /// Copy to clipboard
    #[arg(short, long)]
    copy: bool,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate totp code from secret
    Gen {
        /// Base32 secret
        secret: String,
    },
    /// Add a secret to the keychain
    Add {
        /// Name to register the secret under
        name: String,
        /// Base32 secret
        secret: String,
    },
    /// List all registered TOTP codes
    Ls,
    /// Delete a TOTP code
    Del {
        /// Name of the secret to delete
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // Bad input or configuration (exit code 2)
                TotpError::Validation { .. } | TotpError::Config(_) => 2,
                // Runtime failures (exit code 1)
                TotpError::Store(_)
                | TotpError::Auth(_)
                | TotpError::Otp(_)
                | TotpError::Clipboard(_)
                | TotpError::Ambiguous { .. }
                | TotpError::Io(_) => 1,
            };

            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}

fn run(args: Cli) -> Result<(), TotpError> {
    match args.command {
        Some(Commands::Gen { secret }) => cli::generate::run_gen(&secret),
        Some(Commands::Add { name, secret }) => {
            cli::add::run_add(&cli::platform_manager(&load_config()?), &name, &secret)
        }
        Some(Commands::Ls) => cli::list::run_list(&cli::platform_manager(&load_config()?)),
        Some(Commands::Del { name }) => {
            cli::delete::run_delete(&cli::platform_manager(&load_config()?), &name)
        }
        None => match args.name {
            Some(name) => {
                let config = load_config()?;
                let request = RetrieveRequest::new(name, args.copy);
                cli::retrieve::run_retrieve(
                    &cli::platform_manager(&config),
                    &request,
                    &cli::platform_clipboard(&config),
                )
            }
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
        },
    }
}
