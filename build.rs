//! Build script: version metadata for `fancy --version` and the help footer.
//!
//! Always emitted:
//! - `FANCY_BUILD_DATE` - build date as YYYY-MM-DD
//! - `FANCY_REPO_NAME` - "owner/repo" of the origin remote
//!
//! Dev builds (no `release` feature) also get `VERGEN_GIT_SHA`.

use std::process::Command;

/// Run a command and return its trimmed stdout when it succeeds.
fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// "owner/repo" from an https or scp-style remote URL.
fn repo_slug(url: &str) -> Option<String> {
    let url = url.trim().trim_end_matches('/').trim_end_matches(".git");
    let path = match url.split_once("://") {
        Some((_, rest)) => rest.split_once('/')?.1,
        None => url.split_once(':')?.1,
    };
    let mut parts = path.rsplitn(3, '/');
    let repo = parts.next().filter(|s| !s.is_empty())?;
    let owner = parts.next().filter(|s| !s.is_empty())?;
    Some(format!("{}/{}", owner, repo))
}

fn emit_git_sha() {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let emitted = GitclBuilder::default()
        .sha(true)
        .build()
        .map_err(|e| e.to_string())
        .and_then(|git| {
            Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit())
                .map_err(|e| e.to_string())
        });
    if let Err(e) = emitted {
        println!("cargo:warning=git sha unavailable: {}", e);
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}

fn main() {
    let date = capture("date", &["+%Y-%m-%d"]).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=FANCY_BUILD_DATE={}", date);

    let repo = capture("git", &["remote", "get-url", "origin"])
        .and_then(|url| repo_slug(&url))
        .or_else(|| {
            std::env::var("CARGO_PKG_REPOSITORY")
                .ok()
                .and_then(|url| repo_slug(&url))
        })
        .unwrap_or_else(|| "unknown/fancy".to_string());
    println!("cargo:rustc-env=FANCY_REPO_NAME={}", repo);

    if std::env::var_os("CARGO_FEATURE_RELEASE").is_none() {
        emit_git_sha();
    }
}
