//! Error context types for better error messages.

/// I/O operation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    /// Full read of a file classified as text.
    Read,
    /// Bounded read used to classify a file.
    Probe,
    /// Writing the output document.
    Write,
    /// Enumerating a directory.
    Walk,
    /// Canonicalizing the scan root.
    Resolve,
}

impl std::fmt::Display for IoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Probe => write!(f, "probe"),
            Self::Write => write!(f, "write"),
            Self::Walk => write!(f, "walk"),
            Self::Resolve => write!(f, "resolve"),
        }
    }
}
