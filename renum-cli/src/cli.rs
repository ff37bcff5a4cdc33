use clap::{Parser, ValueEnum};
use renum_core::{Direction, OutputFormat};
use std::path::PathBuf;

/// Collision-safe renumbering of cached character log files
#[derive(Parser, Debug)]
#[command(name = "renum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Character whose cached logs should be renumbered
    pub character: String,

    /// First log number to shift (inclusive threshold)
    pub start_number: u32,

    /// Number of slots to shift by
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub offset: u32,

    /// Shift direction
    #[arg(value_enum, default_value_t = DirectionArg::Forward)]
    pub direction: DirectionArg,

    /// Cached logs root directory (overrides config)
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Minimum zero-padding width for the numeric prefix (overrides config)
    #[arg(long, value_name = "N")]
    pub pad_width: Option<usize>,

    /// Show the plan without moving any files
    #[arg(long)]
    pub dry_run: bool,

    /// Assume yes for the confirmation prompt
    #[arg(short = 'y', long = "yes", env = "RENUM_YES")]
    pub yes: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputArg::Summary)]
    pub output: OutputArg,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Forward,
    Backward,
}

impl std::fmt::Display for DirectionArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no skipped variants")
            .get_name()
            .fmt(f)
    }
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Forward => Self::Forward,
            DirectionArg::Backward => Self::Backward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Summary,
    Json,
}

impl std::fmt::Display for OutputArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no skipped variants")
            .get_name()
            .fmt(f)
    }
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Summary => Self::Summary,
            OutputArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_asserts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_direction_defaults_to_forward() {
        let cli = Cli::parse_from(["renum", "hino", "10", "5"]);
        assert_eq!(cli.direction, DirectionArg::Forward);
        assert_eq!(cli.start_number, 10);
        assert_eq!(cli.offset, 5);
    }

    #[test]
    fn test_direction_backward() {
        let cli = Cli::parse_from(["renum", "hino", "10", "5", "backward"]);
        assert_eq!(cli.direction, DirectionArg::Backward);
    }

    #[test]
    fn test_invalid_direction_rejected() {
        assert!(Cli::try_parse_from(["renum", "hino", "10", "5", "sideways"]).is_err());
    }

    #[test]
    fn test_zero_offset_rejected() {
        assert!(Cli::try_parse_from(["renum", "hino", "10", "0"]).is_err());
    }

    #[test]
    fn test_non_numeric_start_rejected() {
        assert!(Cli::try_parse_from(["renum", "hino", "ten", "5"]).is_err());
    }
}
