use crate::errors::AeroErrors;
use std::env;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

fn has_display() -> bool {
    cfg!(any(target_os = "macos", target_os = "windows"))
        || env::var_os("DISPLAY").is_some()
        || env::var_os("WAYLAND_DISPLAY").is_some()
}

/// Opens the chart in the platform image viewer. Headless sessions are a
/// no-op; launch failures are returned for the caller to report.
pub fn display_chart(path: &Path) -> Result<(), AeroErrors> {
    open_chart(path, has_display())
}

fn open_chart(path: &Path, display_available: bool) -> Result<(), AeroErrors> {
    if !display_available {
        info!("No display available, not opening {}", path.display());
        return Ok(());
    }

    let mut command = viewer_command(path);
    command.stdout(Stdio::null()).stderr(Stdio::null());
    debug!("Opening chart with {:?}", command);

    let program = command.get_program().to_owned();
    let status = command
        .status()
        .map_err(|e| AeroErrors::Display(format!("{:?}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(AeroErrors::Display(format!("{:?} exited with {}", program, status)))
    }
}
