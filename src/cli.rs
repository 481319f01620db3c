//! Command line interface definition.
//!
//! Lives in the library so `xtask` can generate the man page from it.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string with build metadata, e.g. `0.3.0 (abc1234 2026-01-01)`.
pub fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let date = env!("FANCY_BUILD_DATE");
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) => {
                let short = sha.get(..7).unwrap_or(sha);
                format!("{} ({} {})", env!("CARGO_PKG_VERSION"), short, date)
            }
            None => format!("{} ({})", env!("CARGO_PKG_VERSION"), date),
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "fancy")]
#[command(version = version())]
#[command(about = "Draw frames, tables, progress bars, figlet text and separators in the terminal")]
#[command(
    long_about = "Draw frames, tables, progress bars, figlet text and separators in the terminal.

Every command writes a string of characters interleaved with ANSI cursor
positioning and color sequences. Use --preview to see the resulting screen
as plain text instead.

Colors and glyphs come from ~/.config/fancy/config.toml (see `fancy config show`).

EXAMPLES:
    fancy box --left 2 --top 1 --width 20 --height 3
    fancy center \"Hello there\"
    fancy figlet --font small \"v1.0\"
    fancy table --header Id,Name --row 1,alpha --row 2,beta
    fancy progress 42 --border
    fancy separator \"Build\""
)]
#[command(after_help = concat!(
    "Repository: https://github.com/",
    env!("FANCY_REPO_NAME")
))]
pub struct Cli {
    /// Console width (defaults to the terminal's)
    #[arg(long, global = true, value_name = "N")]
    pub cols: Option<usize>,

    /// Console height (defaults to the terminal's)
    #[arg(long, global = true, value_name = "N")]
    pub rows: Option<usize>,

    /// Theme preset: default, classic or ocean
    #[arg(long, global = true, value_name = "NAME")]
    pub theme: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the resulting screen as plain text instead of escape sequences
    #[arg(long, global = true)]
    pub preview: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Position and interior size shared by `frame` and `box`.
#[derive(Args, Debug, Clone)]
pub struct GeometryArgs {
    /// Column of the upper-left corner
    #[arg(long, default_value_t = 0)]
    pub left: usize,

    /// Row of the upper-left corner
    #[arg(long, default_value_t = 0)]
    pub top: usize,

    /// Interior width
    #[arg(long)]
    pub width: usize,

    /// Interior height
    #[arg(long)]
    pub height: usize,

    /// Frame glyphs: single, double, rounded, ascii or 8 characters
    #[arg(long, value_name = "GLYPHS")]
    pub glyphs: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw a frame
    Frame(GeometryArgs),

    /// Draw a frame with a filled interior
    #[command(name = "box")]
    FilledBox {
        #[command(flatten)]
        geometry: GeometryArgs,

        /// Interior color (name, 0-255 or #rrggbb)
        #[arg(long, value_name = "COLOR")]
        fill: Option<String>,
    },

    /// Write text centered on the console
    #[command(long_about = "Write text centered on the console.

The text is word-wrapped to the console width and the block of lines is
centered both ways, unless --top fixes the first row.")]
    Center {
        /// Text to center
        text: String,

        /// Only the first line, shortened to leave a margin
        #[arg(long)]
        one_line: bool,

        /// Row of the first line
        #[arg(long)]
        top: Option<usize>,
    },

    /// Write figlet text, centered unless --left is given
    #[command(long_about = "Write figlet text, centered unless --left is given.

When centered art does not fit the console the built-in small font is tried,
then plain text.")]
    Figlet {
        /// Text to render
        text: String,

        /// Font: standard, small or a path to a .flf file
        #[arg(long, default_value = "standard", value_name = "FONT")]
        font: String,

        /// Column of the art (disables centering and fallback)
        #[arg(long)]
        left: Option<usize>,

        /// Row of the art
        #[arg(long)]
        top: Option<usize>,
    },

    /// Draw a table
    Table {
        /// Column headers, comma separated
        #[arg(long = "header", value_name = "CELLS", value_delimiter = ',', required = true)]
        headers: Vec<String>,

        /// A data row, comma separated (repeatable)
        #[arg(long = "row", id = "row", value_name = "CELLS")]
        rows: Vec<String>,

        /// Columns left blank on each side
        #[arg(long, default_value_t = 0)]
        margin: usize,

        /// Row of the header
        #[arg(long, default_value_t = 0)]
        top: usize,

        /// Draw a separator after every row
        #[arg(long)]
        separate_rows: bool,
    },

    /// Draw a progress bar
    Progress(ProgressArgs),

    /// Write a text-in-rule separator line
    Separator {
        /// Label (empty for a plain rule)
        #[arg(default_value = "")]
        text: String,

        /// Omit the leading "- "
        #[arg(long)]
        no_suffix: bool,
    },

    /// Show text in a box in the middle of the console
    Info {
        /// Text to show
        text: String,

        /// Keep the box up until a key is pressed
        #[arg(long)]
        wait: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ProgressArgs {
    /// Percentage complete (clamped to 0-100)
    #[arg(allow_negative_numbers = true)]
    pub percent: f64,

    /// Fill bottom-up in a single column
    #[arg(long)]
    pub vertical: bool,

    /// Draw a frame around the bar
    #[arg(long)]
    pub border: bool,

    /// Only show a full bar at exactly 100%
    #[arg(long)]
    pub targeted: bool,

    #[arg(long, default_value_t = 0)]
    pub left: usize,

    #[arg(long, default_value_t = 0)]
    pub top: usize,

    /// Columns reserved on the left (horizontal bars)
    #[arg(long, default_value_t = 0)]
    pub left_offset: usize,

    /// Columns reserved on the right (horizontal bars)
    #[arg(long, default_value_t = 0)]
    pub right_offset: usize,

    /// Rows reserved above (vertical bars)
    #[arg(long, default_value_t = 0)]
    pub top_offset: usize,

    /// Rows reserved below (vertical bars)
    #[arg(long, default_value_t = 0)]
    pub bottom_offset: usize,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the config file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn table_headers_split_on_commas() {
        let cli = Cli::parse_from(["fancy", "table", "--header", "Id,Name", "--row", "1,a"]);
        match cli.command {
            Commands::Table { headers, rows, .. } => {
                assert_eq!(headers, vec!["Id", "Name"]);
                assert_eq!(rows, vec!["1,a"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["fancy", "separator", "x", "--cols", "40", "--preview"]);
        assert_eq!(cli.cols, Some(40));
        assert!(cli.preview);
    }

    #[test]
    fn progress_accepts_negative_percent() {
        let cli = Cli::parse_from(["fancy", "progress", "-5"]);
        match cli.command {
            Commands::Progress(args) => assert_eq!(args.percent, -5.0),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn version_includes_package_version() {
        assert!(version().starts_with(env!("CARGO_PKG_VERSION")));
    }
}
