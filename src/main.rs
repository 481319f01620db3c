//! fancy - draw frames, tables, progress bars, figlet text and separators

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::Session;
use fancy::cli::{Cli, Commands, ConfigCommands};

/// Environment variable holding the log filter, e.g. `FANCY_LOG=debug`.
const LOG_ENV: &str = "FANCY_LOG";

/// Log to stderr so rendered output on stdout stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(cli.config.as_deref()),
            ConfigCommands::Path => commands::config::handle_path(cli.config.as_deref()),
        },
        Commands::Completions { shell } => commands::completions::handle_completions(*shell),
        command => {
            let session = Session::from_cli(&cli)?;
            run_render(&session, command)
        }
    }
}

fn run_render(session: &Session, command: &Commands) -> Result<()> {
    use commands::render::*;

    match command {
        Commands::Frame(args) => handle_frame(session, args),
        Commands::FilledBox { geometry, fill } => handle_box(session, geometry, fill.as_deref()),
        Commands::Center {
            text,
            one_line,
            top,
        } => handle_center(session, text, *one_line, *top),
        Commands::Figlet {
            text,
            font,
            left,
            top,
        } => handle_figlet(session, text, font, *left, *top),
        Commands::Table {
            headers,
            rows,
            margin,
            top,
            separate_rows,
        } => handle_table(session, headers, rows, *margin, *top, *separate_rows),
        Commands::Progress(args) => handle_progress(session, args),
        Commands::Separator { text, no_suffix } => handle_separator(session, text, *no_suffix),
        Commands::Info { text, wait } => handle_info(session, text, *wait),
        Commands::Config(_) | Commands::Completions { .. } => Ok(()),
    }
}
