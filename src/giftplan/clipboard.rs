use crate::error::{GiftPlanError, Result};
use crate::transport::{CLIPBOARD_PREFIX, PROTOCOL_SCHEME};
use std::process::{Command, Stdio};

/// Reads the system clipboard as text in an OS-specific way.
/// - macOS: uses pbpaste
/// - Linux: uses xclip or xsel
/// - Windows: uses PowerShell Get-Clipboard
pub fn read_clipboard() -> Result<String> {
    #[cfg(target_os = "macos")]
    {
        run_for_output(Command::new("pbpaste"))
    }

    #[cfg(target_os = "linux")]
    {
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard", "-o"]);
        run_for_output(xclip).or_else(|_| {
            let mut xsel = Command::new("xsel");
            xsel.args(["--clipboard", "--output"]);
            run_for_output(xsel)
        })
    }

    #[cfg(target_os = "windows")]
    {
        let mut ps = Command::new("powershell");
        ps.args(["-NoProfile", "-Command", "Get-Clipboard"]);
        run_for_output(ps)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(GiftPlanError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

/// Empties the clipboard so an imported plan is not picked up twice.
pub fn clear_clipboard() -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        run_with_input(Command::new("pbcopy"), "")
    }

    #[cfg(target_os = "linux")]
    {
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard"]);
        run_with_input(xclip, "").or_else(|_| {
            let mut xsel = Command::new("xsel");
            xsel.args(["--clipboard", "--clear"]);
            run_with_input(xsel, "")
        })
    }

    #[cfg(target_os = "windows")]
    {
        run_with_input(Command::new("clip"), "")
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(GiftPlanError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[allow(dead_code)]
fn run_for_output(mut command: Command) -> Result<String> {
    let program = command.get_program().to_string_lossy().into_owned();
    let output = command
        .stdin(Stdio::null())
        .output()
        .map_err(|e| GiftPlanError::Api(format!("Failed to run {}: {}", program, e)))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(GiftPlanError::Api(format!("{} exited with error", program)))
    }
}

#[allow(dead_code)]
fn run_with_input(mut command: Command, text: &str) -> Result<()> {
    use std::io::Write;

    let program = command.get_program().to_string_lossy().into_owned();
    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| GiftPlanError::Api(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| GiftPlanError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| GiftPlanError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(GiftPlanError::Api(format!("{} exited with error", program)))
    }
}

/// Whether clipboard text is worth handing to the plan decoder.
///
/// Plain JSON only counts when it carries a name and floors, so arbitrary
/// copied JSON is not mistaken for a plan.
pub fn looks_like_plan(text: &str) -> bool {
    let text = text.trim();
    if text.starts_with(CLIPBOARD_PREFIX) || text.starts_with(&format!("{}://", PROTOCOL_SCHEME)) {
        return true;
    }
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => {
            value.get("name").is_some_and(|n| !n.is_null())
                && value.get("floorTargets").is_some_and(|f| f.is_array())
        }
        Err(_) => false,
    }
}
