use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ScaffoldError;

/// A single external command invocation: program, arguments, working
/// directory, and any extra environment variables for the child.
///
/// Owned and comparable so tests can assert on recorded sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub env: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(program: &str, args: &[&str], cwd: &Path) -> Self {
        Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
            env: Vec::new(),
        }
    }

    /// Add an environment variable for the child process.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// The invocation as one shell-style string, for error messages.
    pub fn display_command(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Capability for running external commands.
///
/// Generators never touch `std::process` directly; everything goes through
/// this trait so tests can substitute a recording fake.
pub trait CommandRunner {
    /// Run the command to completion. `Ok(())` only on a zero exit status.
    fn run(&self, invocation: &Invocation) -> Result<(), ScaffoldError>;
}

/// [`CommandRunner`] backed by [`std::process::Command`].
///
/// The child inherits stdin/stdout/stderr, so package-manager output goes
/// straight to the user's terminal. Blocks until the child exits; there is
/// no timeout.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ScaffoldError> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args).current_dir(&invocation.cwd);
        for (key, value) in &invocation.env {
            cmd.env(key, value);
        }

        let status = cmd.status().map_err(|_| ScaffoldError::Subprocess {
            command: invocation.display_command(),
            status: None,
        })?;

        if !status.success() {
            return Err(ScaffoldError::Subprocess {
                command: invocation.display_command(),
                status: status.code(),
            });
        }

        Ok(())
    }
}
