/*!
 * Clipboard support for cpdr
 *
 * Detects an available clipboard mechanism on the current system and
 * pipes text into it.
 */

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the clipboard command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Known clipboard mechanisms, tried in the order returned by
/// [`candidate_providers`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Provider {
    /// tmux paste buffer
    Tmux,
    /// Wayland clipboard
    Wayland,
    /// X11 clipboard with xsel
    Xsel,
    /// X11 clipboard with xclip
    Xclip,
    /// macOS clipboard
    MacOs,
    /// Windows clipboard (also via WSL)
    Windows,
    /// Termux clipboard
    Termux,
}

impl Provider {
    /// Command and arguments that read the clipboard payload from stdin
    fn command(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Tmux => ("tmux", &["load-buffer", "-w", "-"]),
            Self::Wayland => ("wl-copy", &[]),
            Self::Xsel => ("xsel", &["-b", "-i"]),
            Self::Xclip => ("xclip", &["-selection", "clipboard", "-in"]),
            Self::MacOs => ("pbcopy", &[]),
            Self::Windows => ("clip.exe", &[]),
            Self::Termux => ("termux-clipboard-set", &[]),
        }
    }

    /// Whether this provider can be used on the current system
    fn available(&self) -> bool {
        let (cmd, _) = self.command();
        match self {
            Self::Tmux => command_exists(cmd) && in_tmux_session(),
            _ => command_exists(cmd),
        }
    }
}

/// Copy text to the system clipboard.
///
/// Tries the candidate providers for the current platform in order of
/// preference and pipes `text` into the first one that is available.
///
/// # Errors
/// Returns [`ClipboardError::NoClipboardFound`] when no mechanism is
/// usable, or [`ClipboardError::CommandFailed`] when the chosen command
/// cannot be run or exits with a failure status.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let provider = candidate_providers()
        .into_iter()
        .find(Provider::available)
        .ok_or(ClipboardError::NoClipboardFound)?;

    let (cmd, args) = provider.command();
    pipe_to_command(cmd, args, text)
}

/// Check if a command exists on the system
pub fn command_exists(command: &str) -> bool {
    if let Ok(paths) = env::var("PATH") {
        for dir in paths.split(':') {
            if Path::new(dir).join(command).exists() {
                return true;
            }
        }
    }

    // Fall back to probing the command directly
    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Providers worth trying on this platform, most preferred first
fn candidate_providers() -> Vec<Provider> {
    // tmux wins when inside a session, whatever the platform
    let mut providers = vec![Provider::Tmux];

    if cfg!(target_os = "macos") {
        providers.push(Provider::MacOs);
    } else if cfg!(target_os = "windows") {
        providers.push(Provider::Windows);
    } else if cfg!(target_os = "android") {
        providers.push(Provider::Termux);
    } else {
        if env::var("WSL_DISTRO_NAME").is_ok() {
            providers.push(Provider::Windows);
        }
        providers.push(Provider::Wayland);
        providers.push(Provider::Xsel);
        providers.push(Provider::Xclip);
    }

    providers
}

/// Spawn `cmd` and write `text` to its stdin
fn pipe_to_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to spawn {}", cmd)))?;

    let stdin = child.stdin.as_mut().ok_or_else(|| {
        ClipboardError::CommandFailed(format!("Failed to open stdin for {}", cmd))
    })?;
    stdin
        .write_all(text.as_bytes())
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to write to {}", cmd)))?;

    let status = child
        .wait()
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to wait for {}", cmd)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}

/// Check if we are inside a usable tmux session
fn in_tmux_session() -> bool {
    if env::var("TMUX").is_ok() {
        return true;
    }

    Command::new("tmux")
        .args(["list-buffers"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
