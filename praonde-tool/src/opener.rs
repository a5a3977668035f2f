//! Handing ticket links to the desktop's browser.

use std::process::{Command, Stdio};

use tracing::info;

use crate::error::AppError;

/// Open `url` with the platform opener without waiting for it.
pub fn open_link(url: &str) -> Result<(), AppError> {
    if !is_external(url) {
        return Err(AppError::Opener(format!("not an external link: {}", url)));
    }

    opener_command(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| AppError::Opener(format!("{}: {}", url, e)))?;

    info!(url, "opened ticket link");
    Ok(())
}

fn is_external(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}
