use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use locgen_cli::config::Config;
use locgen_cli::generate::{run_check, run_generate};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate Kotlin accessors and platform resources.
    Generate {
        /// Definitions directory containing locgen.toml, root/ and one
        /// subdirectory per overlay locale
        #[arg(short, long)]
        input: PathBuf,

        /// Output root for generated sources and resources
        #[arg(short, long)]
        output: PathBuf,

        /// Configuration file (defaults to <input>/locgen.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run the full pipeline without writing any output.
    Check {
        /// Definitions directory to validate
        #[arg(short, long)]
        input: PathBuf,

        /// Configuration file (defaults to <input>/locgen.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let result = match args.commands {
        Commands::Generate {
            input,
            output,
            config,
        } => {
            let config_path = config.unwrap_or_else(|| input.join("locgen.toml"));
            Config::load(&config_path)
                .and_then(|config| run_generate(&input, &output, &config))
                .map(|summary| {
                    println!(
                        "Generated {} artifacts from {} keys ({} overlay locales)",
                        summary.artifacts, summary.keys, summary.locales
                    );
                })
        }
        Commands::Check { input, config } => {
            let config_path = config.unwrap_or_else(|| input.join("locgen.toml"));
            Config::load(&config_path)
                .and_then(|config| run_check(&input, &config))
                .map(|summary| {
                    println!(
                        "OK: {} keys, {} overlay locales, {} artifacts",
                        summary.keys, summary.locales, summary.artifacts
                    );
                })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
