//! Shared fail-fast error type.
//!
//! Every stage targets already-validated input (spec.md §7): there is no
//! partial-failure recovery and no warnings stream, just three ways to die.

use std::fmt;

#[derive(Debug)]
pub enum ToolError {
    /// File open/read/write failure.
    Io(std::io::Error),
    /// Wrong argument count or an argument that doesn't resolve to a file
    /// or directory.
    Usage(String),
    /// Input that is well-formed enough to open but not to lower — an
    /// unterminated string literal or block comment, a malformed VM
    /// instruction, and the like.
    Malformed(String),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::Io(e) => write!(f, "{e}"),
            ToolError::Usage(s) => write!(f, "{s}"),
            ToolError::Malformed(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for ToolError {}

impl From<std::io::Error> for ToolError {
    fn from(e: std::io::Error) -> Self {
        ToolError::Io(e)
    }
}
