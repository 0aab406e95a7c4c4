use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AutofillError {
    /// AI completion call failed: transport error or non-success status.
    Service { status: Option<u16>, message: String },

    /// AI reply was not the expected JSON shape, even after brace-trimming.
    ResponseFormat { context: String, source: Option<serde_json::Error> },

    /// Page snapshot file could not be read.
    SnapshotIo { path: PathBuf, source: std::io::Error },

    /// Page snapshot file was not a valid control list.
    SnapshotFormat { path: PathBuf, source: serde_json::Error },

    /// No stored profile with the requested name.
    ProfileNotFound { name: String },

    /// Profile file could not be read or written.
    ProfileIo { path: PathBuf, source: std::io::Error },

    /// Profile document was not a flat key/value JSON mapping.
    ProfileFormat { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for AutofillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutofillError::Service { status: Some(code), message } => {
                write!(f, "AI service returned status {}: {}", code, message)
            }
            AutofillError::Service { status: None, message } => {
                write!(f, "AI service call failed: {}", message)
            }
            AutofillError::ResponseFormat { context, source: Some(e) } => {
                write!(f, "AI response was not valid JSON ({}): {}", context, e)
            }
            AutofillError::ResponseFormat { context, source: None } => {
                write!(f, "AI response was not valid JSON ({})", context)
            }
            AutofillError::SnapshotIo { path, source } => {
                write!(f, "Failed to read page snapshot '{}': {}", path.display(), source)
            }
            AutofillError::SnapshotFormat { path, source } => {
                write!(f, "Invalid page snapshot '{}': {}", path.display(), source)
            }
            AutofillError::ProfileNotFound { name } => {
                write!(f, "No profile named '{}'", name)
            }
            AutofillError::ProfileIo { path, source } => {
                write!(f, "Profile file error '{}': {}", path.display(), source)
            }
            AutofillError::ProfileFormat { path, source } => {
                write!(f, "Invalid profile document '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AutofillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AutofillError::ResponseFormat { source: Some(e), .. } => Some(e),
            AutofillError::SnapshotIo { source, .. } => Some(source),
            AutofillError::SnapshotFormat { source, .. } => Some(source),
            AutofillError::ProfileIo { source, .. } => Some(source),
            AutofillError::ProfileFormat { source, .. } => Some(source),
            _ => None,
        }
    }
}
