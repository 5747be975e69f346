//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use luhnkit::config::Config;
use luhnkit::core::services::MaskDigits;
use luhnkit::output::OutputMode;

/// luhnkit - Checksum-valid identifier generation and record cleanup
#[derive(Parser, Debug)]
#[command(
    name = "luhnkit",
    version,
    about = "Checksum-valid identifier generation and record cleanup",
    long_about = "Expand digit templates into mod-10 checksummed identifiers.\n\n\
                  Templates look like `4111xxxx|MM|YYYY|`: every 'x' run is filled with \
                  all digit combinations and the check digit is appended.\n\
                  Free text can be normalized into `identifier|MM|YYYY` records."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of ~/.config/luhnkit/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand template lines into checksum-valid records
    Generate {
        /// File of `pattern|MM|YYYY|` lines (stdin when omitted or `-`)
        input: Option<PathBuf>,

        /// Write records to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Seed the shuffle for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Refuse templates with more combinations than this
        #[arg(long, value_name = "N")]
        max_combinations: Option<u64>,
    },

    /// Normalize free text into `identifier|MM|YYYY` records
    Format {
        /// File of free-text lines (stdin when omitted or `-`)
        input: Option<PathBuf>,

        /// Mask this many trailing identifier digits: 0, 4, 5, 6
        #[arg(short, long, value_name = "N")]
        mask: Option<MaskDigits>,

        /// Write records to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Remove duplicate lines, optionally excluding another list and splitting the rest
    Dedup {
        /// File whose lines are kept
        input: PathBuf,

        /// Drop every line that also appears in this file
        #[arg(short, long, value_name = "PATH")]
        exclude: Option<PathBuf>,

        /// Split the remaining lines into this many files
        #[arg(short, long, default_value_t = 1)]
        split: usize,

        /// Directory for the split files (stdout when omitted)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Check the mod-10 check digit of one or more numbers
    Validate {
        /// Numbers to check
        #[arg(required = true)]
        numbers: Vec<String>,
    },

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    match cli.command {
        Some(Command::Generate {
            input,
            output,
            seed,
            max_combinations,
        }) => {
            let mut options = config.generate_options();
            if let Some(cap) = max_combinations {
                options.max_combinations = cap;
            }
            commands::generate(input.as_deref(), output.as_deref(), seed, &options, output_mode)
        },
        Some(Command::Format {
            input,
            mask,
            output,
        }) => {
            let mut options = config.format_options();
            if let Some(mask) = mask {
                options.mask = mask;
            }
            commands::format(input.as_deref(), output.as_deref(), &options, output_mode)
        },
        Some(Command::Dedup {
            input,
            exclude,
            split,
            out_dir,
        }) => commands::dedup(&input, exclude.as_deref(), split, out_dir.as_deref(), output_mode),
        Some(Command::Validate { numbers }) => commands::validate(&numbers, output_mode),
        Some(Command::Config) => commands::show_config(&config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("luhnkit v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("luhnkit v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'luhnkit --help' for usage");
                println!("Run 'luhnkit generate templates.txt' to get started");
            }
            Ok(())
        },
    }
}
