//! Clipboard integration for the share fallback.

use super::types::ShareError;
use std::process::{Command, Stdio};
use wl_clipboard_rs::copy::{MimeType, Options, Source};

/// Copy text to the Wayland clipboard.
///
/// Prefers the wl-copy command, falls back to the wl-clipboard-rs library if the
/// command is missing or fails.
pub fn copy_text(text: &str) -> Result<(), ShareError> {
    log::debug!(
        "Attempting to copy share text to clipboard ({} bytes)",
        text.len()
    );

    match copy_via_command(text) {
        Ok(()) => {
            log::info!("Copied share text via wl-copy command");
            Ok(())
        }
        Err(cmd_err) => {
            log::warn!(
                "wl-copy command path failed ({}). Falling back to wl-clipboard-rs",
                cmd_err
            );
            match copy_via_library(text) {
                Ok(()) => {
                    log::info!("Copied share text via wl-clipboard-rs fallback");
                    Ok(())
                }
                Err(lib_err) => Err(ShareError::Clipboard(format!(
                    "wl-copy failed: {} ; wl-clipboard-rs failed: {}",
                    cmd_err, lib_err
                ))),
            }
        }
    }
}

/// Copy to clipboard using wl-clipboard-rs library.
fn copy_via_library(text: &str) -> Result<(), ShareError> {
    use wl_clipboard_rs::copy::ServeRequests;

    let mut opts = Options::new();
    // Serve one paste then exit so the text survives after we return
    opts.serve_requests(ServeRequests::Only(1));

    opts.copy(
        Source::Bytes(text.as_bytes().to_vec().into_boxed_slice()),
        MimeType::Text,
    )
    .map_err(|e| ShareError::Clipboard(format!("wl-clipboard-rs error: {}", e)))?;

    Ok(())
}

/// Copy to clipboard by shelling out to wl-copy command.
fn copy_via_command(text: &str) -> Result<(), ShareError> {
    use std::io::Write;

    let mut child = Command::new("wl-copy")
        .arg("--type")
        .arg("text/plain;charset=utf-8")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            ShareError::Clipboard(format!("Failed to spawn wl-copy (is it installed?): {}", e))
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            ShareError::Clipboard(format!("Failed to write to wl-copy stdin: {}", e))
        })?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| ShareError::Clipboard(format!("Failed to wait for wl-copy: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ShareError::Clipboard(format!("wl-copy failed: {}", stderr)));
    }

    log::debug!("wl-copy command completed successfully");
    Ok(())
}

/// Check if clipboard functionality is available.
///
/// Tests if wl-copy command exists as a basic availability check.
pub fn is_clipboard_available() -> bool {
    Command::new("wl-copy")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_clipboard_available() {
        // Depends on system setup; must not panic either way
        let _available = is_clipboard_available();
    }
}
