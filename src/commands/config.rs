//! Config subcommands handler

use std::path::{Path, PathBuf};

use anyhow::Result;

use fancy::style::ColorRole;
use fancy::Config;

fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(explicit: Option<&Path>) -> Result<()> {
    let config = Config::load_from(&resolve_path(explicit)?)?;
    let toml_str = toml::to_string_pretty(&config)?;
    let toml_str = toml_str.trim_end();
    if atty::is(atty::Stream::Stdout) {
        println!("{}", config.theme()?.paint(ColorRole::NeutralText, toml_str));
    } else {
        println!("{}", toml_str);
    }
    Ok(())
}

/// Print the config file location, noting when it does not exist yet.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    let path = resolve_path(explicit)?;
    println!("{}", path.display());
    if !path.exists() {
        tracing::info!(path = %path.display(), "config file does not exist, defaults apply");
    }
    Ok(())
}
