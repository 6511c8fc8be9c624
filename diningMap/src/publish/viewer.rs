use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Something that can show a written map file to the operator.
pub trait Viewer {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Opens files with the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl Viewer for SystemViewer {
    fn open(&self, path: &Path) -> Result<()> {
        launch(opener_command(&file_url(path)))
    }
}

// Fire and forget: some handlers stay attached until the browser exits.
fn launch(mut cmd: Command) -> Result<()> {
    cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
    cmd.spawn()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    Ok(())
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
    cmd.arg("/C").arg("start").arg("").arg(url);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

pub fn file_url(path: &Path) -> String {
    let display = strip_verbatim(&path.to_string_lossy()).replace('\\', "/");
    if display.starts_with('/') {
        format!("file://{}", display)
    } else {
        format!("file:///{}", display)
    }
}

// `\\?\C:\...` -> `C:\...` and `\\?\UNC\host\share` -> `\\host\share`
fn strip_verbatim(path: &str) -> String {
    if let Some(rest) = path.strip_prefix(r"\\?\UNC\") {
        format!(r"\\{}", rest)
    } else if let Some(rest) = path.strip_prefix(r"\\?\") {
        rest.to_string()
    } else {
        path.to_string()
    }
}
