//! Render subcommand handlers.

use std::path::Path;

use anyhow::{Context, Result};

use fancy::cli::{GeometryArgs, ProgressArgs};
use fancy::console::{CancelToken, CrosstermKeys};
use fancy::error::suppress_unless_cancelled;
use fancy::render::{
    self, BoxOptions, CenterOptions, FigletFont, FigletOptions, FileFont, FillStrategy,
    FrameOptions, Geometry, InfoBoxOptions, ProgressOptions, SeparatorOptions, SmallFont,
    StandardFont, TableOptions, VerticalProgressOptions,
};
use fancy::style::{Color, ColorPair, ColorRole, FrameGlyphs};

use super::Session;

fn frame_options(session: &Session, glyphs: Option<&str>) -> Result<FrameOptions> {
    let glyphs = match glyphs {
        Some(value) => value
            .parse::<FrameGlyphs>()
            .with_context(|| format!("Invalid --glyphs '{}'", value))?,
        None => session.config.frame_glyphs()?,
    };
    Ok(FrameOptions {
        glyphs,
        colors: None,
    })
}

fn geometry(args: &GeometryArgs) -> Geometry {
    Geometry::new(args.left, args.top, args.width, args.height)
}

pub fn handle_frame(session: &Session, args: &GeometryArgs) -> Result<()> {
    let options = frame_options(session, args.glyphs.as_deref())?;
    let output = render::try_render_frame(&session.ctx(), geometry(args), &options)?;
    session.emit(&output)
}

pub fn handle_box(session: &Session, args: &GeometryArgs, fill: Option<&str>) -> Result<()> {
    let fill = match fill {
        Some(value) => {
            let color: Color = value.parse()?;
            Some(ColorPair::new(session.theme.color(ColorRole::NeutralText), color))
        }
        None => None,
    };
    let options = BoxOptions {
        frame: frame_options(session, args.glyphs.as_deref())?,
        fill,
    };
    let output = render::try_render_box(&session.ctx(), geometry(args), &options)?;
    session.emit(&output)
}

pub fn handle_center(session: &Session, text: &str, one_line: bool, top: Option<usize>) -> Result<()> {
    let options = CenterOptions { top, colors: None };
    let ctx = session.ctx();
    let output = if one_line {
        render::try_render_centered_one_line(&ctx, text, &options)?
    } else {
        render::try_render_centered(&ctx, text, &options)?
    };
    session.emit(&output)
}

/// Resolve `--font`: a built-in name or a path to a `.flf` file.
fn load_font(name: &str) -> Result<Box<dyn FigletFont>> {
    match name {
        "standard" => Ok(Box::new(StandardFont::new()?)),
        "small" => Ok(Box::new(SmallFont)),
        path => {
            let font = FileFont::open(Path::new(path))
                .with_context(|| format!("Failed to load figlet font {}", path))?;
            Ok(Box::new(font))
        }
    }
}

pub fn handle_figlet(
    session: &Session,
    text: &str,
    font: &str,
    left: Option<usize>,
    top: Option<usize>,
) -> Result<()> {
    let font = load_font(font)?;
    let ctx = session.ctx();
    let output = match left {
        Some(left) => {
            render::try_render_figlet(&ctx, text, font.as_ref(), left, top.unwrap_or(0), None)?
        }
        None => {
            let options = FigletOptions { top, colors: None };
            render::try_render_centered_figlet(&ctx, text, font.as_ref(), &options)?
        }
    };
    session.emit(&output)
}

/// Split a `--row` value into cells.
fn split_row(row: &str) -> Vec<String> {
    row.split(',').map(|cell| cell.trim().to_string()).collect()
}

pub fn handle_table(
    session: &Session,
    headers: &[String],
    rows: &[String],
    margin: usize,
    top: usize,
    separate_rows: bool,
) -> Result<()> {
    let rows: Vec<Vec<String>> = rows.iter().map(|r| split_row(r)).collect();
    let headers: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    let options = TableOptions {
        margin,
        top,
        separate_rows,
        ..Default::default()
    };
    let output = render::try_render_table(&session.ctx(), &headers, &rows, &options)?;
    session.emit(&output)
}

pub fn handle_progress(session: &Session, args: &ProgressArgs) -> Result<()> {
    let strategy = if args.targeted {
        FillStrategy::Targeted
    } else {
        session.config.fill_strategy()
    };
    let frame = frame_options(session, None)?;
    let ctx = session.ctx();

    let output = if args.vertical {
        let options = VerticalProgressOptions {
            left: args.left,
            top: args.top,
            top_offset: args.top_offset,
            bottom_offset: args.bottom_offset,
            draw_border: args.border,
            strategy,
            colors: None,
            glyphs: session.config.vertical_glyphs(),
            frame,
        };
        render::try_render_vertical_progress(&ctx, args.percent, &options)?
    } else {
        let options = ProgressOptions {
            left: args.left,
            top: args.top,
            left_offset: args.left_offset,
            right_offset: args.right_offset,
            draw_border: args.border,
            strategy,
            colors: None,
            glyphs: session.config.progress_glyphs(),
            frame,
        };
        render::try_render_progress(&ctx, args.percent, &options)?
    };
    session.emit(&output)
}

pub fn handle_separator(session: &Session, text: &str, no_suffix: bool) -> Result<()> {
    let options = SeparatorOptions {
        print_suffix: !no_suffix,
        colors: None,
    };
    session.emit(&render::render_separator(&session.ctx(), text, &options))
}

/// Trip `cancel` on Ctrl-C.
///
/// Only fails when a handler is already installed, in which case the wait
/// stays interruptible by a key press alone.
fn install_cancel_handler(cancel: &CancelToken) -> bool {
    let token = cancel.clone();
    match ctrlc::set_handler(move || token.cancel()) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "Ctrl-C handler not installed");
            false
        }
    }
}

/// Show the info box. With `wait` on an interactive terminal, hold it until
/// a key is pressed; Ctrl-C ends the wait quietly.
pub fn handle_info(session: &Session, text: &str, wait: bool) -> Result<()> {
    let options = InfoBoxOptions {
        frame: BoxOptions {
            frame: frame_options(session, None)?,
            fill: None,
        },
        text_colors: None,
    };
    let ctx = session.ctx();

    let interactive = atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout);
    if !wait || session.is_preview() || !interactive {
        if wait {
            tracing::warn!("not waiting for a key: stdin or stdout is not a terminal");
        }
        return session.emit(&render::try_render_info_box(&ctx, text, &options)?);
    }

    let cancel = CancelToken::new();
    install_cancel_handler(&cancel);

    let mut keys = CrosstermKeys;
    let result = render::show_info_box(session.writer(), &mut keys, &cancel, &ctx, text, &options)
        .map(|press| tracing::debug!(?press, "info box dismissed"));
    match suppress_unless_cancelled("show_info_box", result) {
        Err(e) if e.is_cancelled() => {
            tracing::debug!("info box wait cancelled");
            Ok(())
        }
        other => Ok(other?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_row_trims_cells() {
        assert_eq!(split_row("1, alpha ,x"), vec!["1", "alpha", "x"]);
        assert_eq!(split_row(""), vec![""]);
    }

    #[test]
    fn second_cancel_handler_is_reported_not_fatal() {
        let first = CancelToken::new();
        let second = CancelToken::new();
        assert!(install_cancel_handler(&first));
        assert!(!install_cancel_handler(&second));
        assert!(!first.is_cancelled());
        assert!(!second.is_cancelled());
    }

    #[test]
    fn load_font_knows_builtins() {
        assert_eq!(load_font("small").unwrap().name(), "small");
        assert_eq!(load_font("standard").unwrap().name(), "standard");
        assert!(load_font("/nonexistent/font.flf").is_err());
    }
}
