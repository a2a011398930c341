//! Clipboard sink
//!
//! Copies text to the system clipboard by piping it into a clipboard-setter
//! program (`pbcopy`, `wl-copy`, `xclip`, ...). Either the whole text is
//! written and the program exits cleanly, or the write is reported as
//! failed.

use crate::config::CommandSpec;
use crate::error::ClipboardError;
use std::io::{self, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::Mutex;
use tracing::debug;

/// Destination for a computed code
pub trait ClipboardSink {
    fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

impl<T: ClipboardSink + ?Sized> ClipboardSink for &T {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        (**self).write(text)
    }
}

impl<T: ClipboardSink + ?Sized> ClipboardSink for Box<T> {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        (**self).write(text)
    }
}

/// Pipes text into one specific clipboard program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_spec(spec: &CommandSpec) -> Self {
        Self::new(spec.program.clone(), spec.args.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl ClipboardSink for CommandClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        let mut child = ChildGuard::new(child);

        let write_error = |source| ClipboardError::Write {
            program: self.program.clone(),
            source,
        };
        let mut stdin = child.stdin().ok_or_else(|| {
            write_error(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "stdin was not captured",
            ))
        })?;
        stdin.write_all(text.as_bytes()).map_err(write_error)?;
        stdin.flush().map_err(write_error)?;
        drop(stdin);

        let status = child.wait().map_err(|source| ClipboardError::Wait {
            program: self.program.clone(),
            source,
        })?;
        if !status.success() {
            return Err(ClipboardError::ExitStatus {
                program: self.program.clone(),
                status: status.to_string(),
            });
        }

        debug!(program = %self.program, "copied code to clipboard");
        Ok(())
    }
}

/// Owns the clipboard child until it has been reaped
///
/// Dropping an unreaped guard closes the pipe, kills the child and waits
/// for it, so error paths leak neither descriptors nor zombies.
struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self {
            child,
            reaped: false,
        }
    }

    fn stdin(&mut self) -> Option<std::process::ChildStdin> {
        self.child.stdin.take()
    }

    fn wait(&mut self) -> io::Result<ExitStatus> {
        drop(self.child.stdin.take());
        let status = self.child.wait();
        self.reaped = true;
        status
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if !self.reaped {
            drop(self.child.stdin.take());
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

/// Clipboard of the running desktop, resolved on first write
///
/// A configured program wins; otherwise the platform's usual setter is
/// looked up on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    program: Option<CommandSpec>,
}

impl SystemClipboard {
    pub fn new(program: Option<CommandSpec>) -> Self {
        Self { program }
    }

    pub fn resolve(&self) -> Result<CommandClipboard, ClipboardError> {
        match &self.program {
            Some(spec) => Ok(CommandClipboard::from_spec(spec)),
            None => detect_clipboard_program().ok_or(ClipboardError::Unavailable),
        }
    }
}

impl ClipboardSink for SystemClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        self.resolve()?.write(text)
    }
}

/// Find a clipboard setter for the current platform
pub fn detect_clipboard_program() -> Option<CommandClipboard> {
    if cfg!(target_os = "macos") {
        return Some(CommandClipboard::new("pbcopy", Vec::new()));
    }
    if cfg!(windows) {
        return Some(CommandClipboard::new("clip", Vec::new()));
    }

    let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
    let candidates: [(&str, &[&str], bool); 3] = [
        ("wl-copy", &[], wayland),
        ("xclip", &["-selection", "clipboard"], true),
        ("xsel", &["--clipboard", "--input"], true),
    ];

    candidates
        .iter()
        .filter(|(_, _, usable)| *usable)
        .find(|(program, _, _)| which::which(program).is_ok())
        .map(|(program, args, _)| {
            CommandClipboard::new(*program, args.iter().map(|a| a.to_string()).collect())
        })
}

/// Clipboard held in process memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write is rejected
    pub fn failing() -> Self {
        Self {
            contents: Mutex::new(None),
            fail: true,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .map(|contents| contents.clone())
            .unwrap_or_default()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Rejected {
                reason: "clipboard configured to fail".to_string(),
            });
        }
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| ClipboardError::Rejected {
                reason: "clipboard lock poisoned".to_string(),
            })?;
        *contents = Some(text.to_string());
        Ok(())
    }
}
