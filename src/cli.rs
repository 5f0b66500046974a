//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;

/// Default config file, read only when present.
pub const DEFAULT_CONFIG: &str = "tictactoe.toml";

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Symbol of the first player (overrides the config file)
    #[arg(long)]
    pub first_symbol: Option<String>,

    /// Symbol of the second player (overrides the config file)
    #[arg(long)]
    pub second_symbol: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.first_symbol.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_symbol_flags() {
        let cli =
            Cli::try_parse_from(["tictactoe", "--first-symbol", "A", "--second-symbol", "B"])
                .unwrap();
        assert_eq!(cli.first_symbol.as_deref(), Some("A"));
        assert_eq!(cli.second_symbol.as_deref(), Some("B"));
    }
}
