//! CLI command definitions.

pub mod calendar;
pub mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Browse CloudHub events, hackathons and the community calendar.
#[derive(Debug, Parser)]
#[command(name = "cloudhub")]
#[command(version, about = "Browse CloudHub events and hackathons", long_about = None)]
pub struct Cli {
    /// JSON file with the items to browse (overrides CLOUDHUB_DATA).
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format.
    #[arg(long, default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Only log warnings and errors.
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug output.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "cloudhub=warn,cloudhub_client=warn"
        } else if self.verbose {
            "cloudhub=debug,cloudhub_client=debug"
        } else {
            "cloudhub=info,cloudhub_client=info"
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output with colors.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search, filter and sort events and hackathons.
    List(list::ListCommand),
    /// Show a month grid with days that have events.
    Calendar(calendar::CalendarCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["cloudhub", "list", "--format", "json", "--verbose"]);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert_eq!(cli.log_filter(), "cloudhub=debug,cloudhub_client=debug");
        assert!(matches!(cli.command, Commands::List(_)));
    }
}
