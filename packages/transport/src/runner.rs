//! Command execution on the target host.

use std::process;

use crate::error::Error;

/// Execute a command line on the target host and capture its stdout.
///
/// This is the seam a session layer plugs into: anything that can run a
/// command and hand text back works, the local shell included. Captures
/// follow the usual session convention: one trailing newline is stripped,
/// everything else comes back verbatim. A command that runs but exits
/// nonzero still yields whatever it wrote to stdout.
pub trait CommandRunner {
    fn cmd_exec(&mut self, command: &str) -> Result<String, Error>;
}

/// Runs commands through the local `sh`.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn cmd_exec(&mut self, command: &str) -> Result<String, Error> {
        let output = process::Command::new("sh")
            .arg("-c")
            .arg(command)
            .output()
            .map_err(|source| Error::Exec {
                command: command.to_string(),
                source,
            })?;

        let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
        if captured.ends_with('\n') {
            captured.pop();
            if captured.ends_with('\r') {
                captured.pop();
            }
        }
        Ok(captured)
    }
}
