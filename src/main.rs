use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ocsf_models::error::Error;
use ocsf_models::events::load_finding;
use ocsf_models::profiles::{NOT_IMPLEMENTED_PROFILES, PROFILE_REQUIREMENTS, validate_profiles};

/// Validate OCSF findings against their profiles.
///
/// Loads a Compliance, Detection or Application Security Posture finding
/// from JSON, checks its attribute constraints and the requirements of the
/// profiles it declares (or the ones given on the command line).
#[derive(Parser)]
#[command(name = "ocsf-models", version, about)]
struct Cli {
    /// Enable debug logging. RUST_LOG is used otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a finding document.
    Validate {
        /// Path to the finding JSON.
        file: PathBuf,

        /// Comma-separated profiles to check instead of metadata.profiles.
        ///
        /// Example: --profiles cloud,datetime
        #[arg(long, value_delimiter = ',', env = "OCSF_PROFILES")]
        profiles: Option<Vec<String>>,

        /// Collect and print every profile error instead of failing on the
        /// aggregate.
        #[arg(long)]
        collect: bool,
    },

    /// List the profile requirements.
    Profiles,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");

            // Print cause chain.
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = std::error::Error::source(cause);
            }

            process::exit(1);
        }
    }
}

/// Returns whether the input was valid.
fn run(cli: Cli) -> ocsf_models::error::Result<bool> {
    match cli.command {
        Commands::Validate {
            file,
            profiles,
            collect,
        } => {
            let finding = load_finding(&file)?;
            info!(
                "Loaded {} from {}",
                finding.class_uid().caption(),
                file.display()
            );

            let names: Option<Vec<&str>> = profiles
                .as_ref()
                .map(|p| p.iter().map(|s| s.trim()).collect());

            let errors = match validate_profiles(&finding, names.as_deref(), !collect) {
                Ok(errors) => errors,
                Err(Error::ProfileValidation(errors)) => errors.into_errors(),
                Err(e) => return Err(e),
            };

            if errors.is_empty() {
                println!("{}: valid", file.display());
                return Ok(true);
            }
            for error in &errors {
                println!("{error}");
            }
            info!("{} profile error(s)", errors.len());
            Ok(false)
        }

        Commands::Profiles => {
            for reqs in PROFILE_REQUIREMENTS {
                println!(
                    "{:<10} required: {:<8} optional: {}",
                    reqs.name,
                    list_or_dash(reqs.required),
                    list_or_dash(reqs.optional)
                );
            }
            println!("not yet supported: {}", NOT_IMPLEMENTED_PROFILES.join(", "));
            Ok(true)
        }
    }
}

fn list_or_dash(fields: &[&str]) -> String {
    if fields.is_empty() {
        "-".to_string()
    } else {
        fields.join(", ")
    }
}
