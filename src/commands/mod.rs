//! Command handlers for the fancy binary.

pub mod completions;
pub mod config;
pub mod render;

use anyhow::{Context, Result};

use fancy::cli::Cli;
use fancy::console::{Console, ConsoleSize, ConsoleWriter, SystemConsole};
use fancy::render::RenderContext;
use fancy::style::Theme;
use fancy::terminal::Screen;
use fancy::Config;

/// Everything a render command needs: config, theme, the console snapshot
/// and where output goes.
pub struct Session {
    pub config: Config,
    pub theme: Theme,
    size: ConsoleSize,
    dumb: bool,
    preview: bool,
    writer: ConsoleWriter,
}

impl Session {
    /// Resolve global flags against the config file.
    ///
    /// Command line flags win over the config file, which wins over what
    /// the terminal reports.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        let theme = match &cli.theme {
            Some(name) => Theme::by_name(name).with_context(|| {
                format!(
                    "Unknown theme '{}' (expected one of: {})",
                    name,
                    Theme::preset_names().join(", ")
                )
            })?,
            None => config.theme()?,
        };
        let console = SystemConsole::new()
            .with_width(cli.cols.or(config.console.width))
            .with_height(cli.rows.or(config.console.height))
            .with_dumb(config.console.dumb);
        let size = console.size();
        let dumb = console.is_dumb();
        tracing::debug!(width = size.width, height = size.height, dumb, theme = theme.name(), "session ready");

        Ok(Self {
            config,
            theme,
            size,
            dumb,
            preview: cli.preview,
            writer: ConsoleWriter::stdout(),
        })
    }

    pub fn ctx(&self) -> RenderContext<'_> {
        RenderContext::new(self.size, &self.theme).with_dumb(self.dumb)
    }

    pub fn writer(&self) -> &ConsoleWriter {
        &self.writer
    }

    pub fn is_preview(&self) -> bool {
        self.preview
    }

    /// Write rendered output, or its plain text screen in preview mode.
    pub fn emit(&self, output: &str) -> Result<()> {
        if self.preview {
            let mut screen = Screen::new(self.size.width, self.size.height);
            screen.feed(output);
            self.writer.write_line(&screen.dump())?;
        } else {
            self.writer.write_line(output)?;
        }
        Ok(())
    }
}
