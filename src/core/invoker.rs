//! External process invocation boundary.
//!
//! The engine never talks to a VCS client directly; it goes through the
//! [`ProcessRunner`] trait so tests can substitute a canned runner. The production
//! implementation, [`ConsoleRunner`], spawns the client, captures standard output
//! and enforces a wall-clock timeout, killing the child when it fires. A hung
//! client therefore degrades to a typed error instead of hanging the caller.
//!
//! # Public API
//! - [`ProcessRunner`]: Injectable invocation seam
//! - [`ConsoleRunner`]: Real implementation backed by `std::process`
//!
//! Standard error is deliberately discarded rather than piped: at least one client
//! blocks forever once an unread stderr pipe fills up.

use crate::core::error::{Result, VcsOverlayError};
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Seam between the refresh engine and the operating system.
pub trait ProcessRunner {
    /// Run `executable` with `args` in `work_dir`, returning captured stdout.
    ///
    /// Fails with a typed error when the executable cannot be launched, exits
    /// non-zero, produces unreadable output, or outlives `timeout`.
    fn run(
        &self,
        executable: &str,
        args: &[String],
        work_dir: &Path,
        timeout: Duration,
    ) -> Result<String>;
}

/// [`ProcessRunner`] backed by real child processes.
#[derive(Debug, Default)]
pub struct ConsoleRunner;

impl ConsoleRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for ConsoleRunner {
    fn run(
        &self,
        executable: &str,
        args: &[String],
        work_dir: &Path,
        timeout: Duration,
    ) -> Result<String> {
        log::debug!("running {} {} in {}", executable, args.join(" "), work_dir.display());
        let deadline = Instant::now() + timeout;

        let mut child = Command::new(executable)
            .args(args)
            .current_dir(work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| VcsOverlayError::process_launch(executable, source))?;

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| VcsOverlayError::process_output(executable))?;

        // Read on a helper thread so the timeout covers a client that produces
        // output slowly or not at all.
        let (sender, receiver) = mpsc::channel();
        let reader = thread::spawn(move || {
            let mut buffer = String::new();
            let outcome = stdout.read_to_string(&mut buffer).map(|_| buffer);
            let _ = sender.send(outcome);
        });

        match receiver.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
            Ok(Ok(output)) => {
                let _ = reader.join();
                // Stdout EOF does not imply exit; the reap shares the deadline.
                match wait_until(&mut child, deadline) {
                    Ok(Some(status)) if status.success() => Ok(output),
                    Ok(Some(status)) => Err(VcsOverlayError::ProcessFailed {
                        executable: executable.to_string(),
                        code: status.code().unwrap_or(-1),
                    }),
                    Ok(None) => {
                        let _ = child.kill();
                        let _ = child.wait();
                        Err(VcsOverlayError::process_timeout(executable, timeout))
                    }
                    Err(source) => Err(VcsOverlayError::process_launch(executable, source)),
                }
            }
            Ok(Err(_)) => {
                let _ = reader.join();
                let _ = child.kill();
                let _ = child.wait();
                Err(VcsOverlayError::process_output(executable))
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                let _ = child.kill();
                let _ = child.wait();
                Err(VcsOverlayError::process_timeout(executable, timeout))
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                let _ = child.kill();
                let _ = child.wait();
                Err(VcsOverlayError::process_output(executable))
            }
        }
    }
}

/// Poll for the child's exit until `deadline`; `None` means it is still running.
fn wait_until(child: &mut Child, deadline: Instant) -> std::io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(Duration::from_millis(10));
    }
}
