use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "confentropy - Builds a per-molecule conformational entropy dataset from a corpus of conformer-search logs.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract one record per molecule from a corpus directory.
    Extract(ExtractArgs),
}

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug, Default)]
pub struct ExtractArgs {
    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Corpus root containing one directory per molecule.
    #[arg(short = 'i', long, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// Run label written as the first column of every record.
    #[arg(short, long, value_name = "TEXT")]
    pub label: Option<String>,

    /// CSV table of precomputed descriptors, keyed by molecule base name.
    #[arg(short, long, value_name = "PATH")]
    pub descriptors: Option<PathBuf>,

    /// Output file for the records. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Override the ensemble log suffix (default: '.out.gz').
    #[arg(long, value_name = "SUFFIX")]
    pub ensemble_suffix: Option<String>,

    /// Override the thermodynamic log suffix (default: '-vib.out.gz').
    #[arg(long, value_name = "SUFFIX")]
    pub thermo_suffix: Option<String>,

    /// Override the structure file extension (default: '.sdf').
    #[arg(long, value_name = "EXT")]
    pub structure_extension: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.label=run-2
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
