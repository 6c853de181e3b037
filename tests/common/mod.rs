use std::cell::RefCell;
use std::fs;

use create_mern::error::ScaffoldError;
use create_mern::exec::{CommandRunner, Invocation};

/// Records every invocation without running anything.
///
/// `npm init -y` is special-cased to drop a minimal manifest into its
/// working directory, matching what npm leaves behind for the backend
/// generator to rewrite.
pub struct RecordingRunner {
    pub calls: RefCell<Vec<Invocation>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        RecordingRunner {
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ScaffoldError> {
        self.calls.borrow_mut().push(invocation.clone());
        if invocation.program == "npm" && invocation.args.first().map(String::as_str) == Some("init")
        {
            fs::write(
                invocation.cwd.join("package.json"),
                "{\n  \"name\": \"backend\",\n  \"version\": \"1.0.0\",\n  \"description\": \"\"\n}\n",
            )?;
        }
        Ok(())
    }
}

/// Fails any invocation whose command line contains `fail_on`; otherwise
/// behaves like [`RecordingRunner`].
pub struct FailingRunner {
    pub inner: RecordingRunner,
    pub fail_on: &'static str,
    pub status: i32,
}

impl FailingRunner {
    pub fn new(fail_on: &'static str, status: i32) -> Self {
        FailingRunner {
            inner: RecordingRunner::new(),
            fail_on,
            status,
        }
    }
}

impl CommandRunner for FailingRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ScaffoldError> {
        if invocation.display_command().contains(self.fail_on) {
            return Err(ScaffoldError::Subprocess {
                command: invocation.display_command(),
                status: Some(self.status),
            });
        }
        self.inner.run(invocation)
    }
}
