//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for selah
#[derive(Parser, Debug)]
#[command(name = "selah")]
#[command(author, version, about = "A Scripture reflection and quiz companion for the terminal")]
#[command(long_about = r#"
selah is a tab-based devotional browser with guided Scripture quizzes.

Launch it with no arguments for the full TUI (Home, Play, Paths, Read,
Profile), or jump straight into a quiz with --theme / --book.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./selah.toml        Project-level config
3. ~/.config/selah/config.toml   Global config

Example:
  selah
  selah --theme hope
  selah --book psalms
  selah --list
"#)]
pub struct Cli {
    /// Open a theme quiz on launch (e.g. faith, hope, forgiveness, fear)
    #[arg(long, value_name = "THEME", conflicts_with = "book")]
    pub theme: Option<String>,

    /// Open a book quiz on launch (e.g. genesis, psalms, john)
    #[arg(long, value_name = "BOOK")]
    pub book: Option<String>,

    /// List available topics and exit
    #[arg(short, long)]
    pub list: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["selah"]);
        assert!(cli.theme.is_none());
        assert!(cli.book.is_none());
        assert!(!cli.list);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_theme_flag() {
        let cli = Cli::parse_from(["selah", "--theme", "hope", "-vv"]);
        assert_eq!(cli.theme.as_deref(), Some("hope"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_theme_and_book_conflict() {
        let result = Cli::try_parse_from(["selah", "--theme", "hope", "--book", "john"]);
        assert!(result.is_err());
    }
}
