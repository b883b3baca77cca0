use anyhow::Result;
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble and launch from field values given on the command line
    Launch(LaunchArgs),

    /// Apply the given profile to launch the flash utility
    Apply(ApplyArgs),

    /// Validate the given YAML profile
    Validate(ValidateArgs),

    /// Show the registered form fields and their descriptions
    Fields(FieldsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// Log level requested for this command, if it produces log output.
    pub fn log_level(&self) -> Option<LogLevel> {
        match self {
            Commands::Launch(opts) => Some(opts.log_level),
            Commands::Apply(opts) => Some(opts.log_level),
            Commands::Validate(opts) => Some(opts.log_level),
            Commands::Fields(opts) => Some(opts.log_level),
            Commands::Completions(_) => None,
        }
    }
}

#[derive(Args, Debug)]
pub struct LaunchArgs {
    /// Memory block number
    #[arg(short = 'b', long)]
    pub block: Option<String>,

    /// Memory page number
    #[arg(short = 'p', long)]
    pub page: Option<String>,

    /// Memory plane index
    #[arg(short = 's', long)]
    pub plane: Option<String>,

    /// Column address in bytes
    #[arg(short = 'a', long)]
    pub column: Option<String>,

    /// Size of buffer in bytes
    #[arg(short = 'S', long)]
    pub buffer_size: Option<String>,

    /// Chip selection (0 or 1)
    #[arg(short = 'c', long)]
    pub chip: Option<String>,

    /// Input file to process
    #[arg(short = 'f', long)]
    pub input_file: Option<Utf8PathBuf>,

    /// Name or path of the flash utility executable
    #[arg(short = 'e', long, default_value = "demo.exe")]
    pub executable: String,

    /// Set the log level
    #[arg(short = 'l', long, default_value = "info")]
    pub log_level: LogLevel,

    /// Do not run, just show the assembled invocation
    #[arg(long)]
    pub dry_run: bool,
}

impl LaunchArgs {
    /// Pairs each provided field option with its utility flag, in form order.
    pub fn field_values(&self) -> Vec<(&'static str, &str)> {
        [
            ("-b", self.block.as_deref()),
            ("-p", self.page.as_deref()),
            ("-s", self.plane.as_deref()),
            ("-a", self.column.as_deref()),
            ("-S", self.buffer_size.as_deref()),
            ("-c", self.chip.as_deref()),
        ]
        .into_iter()
        .filter_map(|(flag, value)| value.map(|v| (flag, v)))
        .collect()
    }
}

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Path to the YAML file defining the profile
    #[arg(short, long, default_value = "profile.yaml")]
    pub file: Utf8PathBuf,

    /// Set the log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Do not run, just show the assembled invocation
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the YAML file to validate
    #[arg(short, long, default_value = "profile.yaml")]
    pub file: Utf8PathBuf,

    /// Set the log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Args, Debug)]
pub struct FieldsArgs {
    /// Which built-in field registry to show
    #[arg(long, default_value = "standard")]
    pub set: FieldSetChoice,

    /// Set the log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Built-in field registries.
///
/// The source form exists in two variants: `Standard` carries the labels
/// and help text of the annotated variant, `Bare` carries the flag-only
/// variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FieldSetChoice {
    Standard,
    Bare,
}

/// Represents log levels for controlling the verbosity of logging output.
///
/// This enum maps directly to the log levels used by the `tracing` crate.
/// For example, specifying `--log-level debug` will enable debug-level
/// logging output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

pub fn parse_args() -> Result<Cli> {
    Ok(Cli::parse())
}
