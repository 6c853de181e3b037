use std::path::PathBuf;

/// Error type for scaffolding operations.
#[derive(Debug)]
pub enum ScaffoldError {
    /// Invalid command-line input, e.g. a malformed project name.
    Usage(String),
    /// The target project directory already exists.
    Collision(PathBuf),
    /// An external command exited non-zero or could not be spawned.
    Subprocess {
        command: String,
        status: Option<i32>,
    },
    /// Filesystem error while creating directories or writing files.
    Io(std::io::Error),
    /// The generated package manifest could not be read back.
    Manifest(String),
}

impl ScaffoldError {
    /// Process exit code for this error.
    ///
    /// A subprocess failure propagates the child's own exit status; every
    /// other error (and a child killed by a signal) exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::Subprocess {
                status: Some(code), ..
            } => *code,
            _ => 1,
        }
    }
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::Usage(msg) => write!(f, "{msg}"),
            ScaffoldError::Collision(path) => {
                write!(f, "Directory '{}' already exists", path.display())
            }
            ScaffoldError::Subprocess { command, status } => match status {
                Some(code) => write!(f, "Command `{command}` exited with status {code}"),
                None => write!(f, "Command `{command}` failed to run"),
            },
            ScaffoldError::Io(e) => write!(f, "Filesystem error: {e}"),
            ScaffoldError::Manifest(msg) => write!(f, "Invalid package.json: {msg}"),
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScaffoldError {
    fn from(e: std::io::Error) -> Self {
        ScaffoldError::Io(e)
    }
}

impl From<serde_json::Error> for ScaffoldError {
    fn from(e: serde_json::Error) -> Self {
        ScaffoldError::Manifest(e.to_string())
    }
}
