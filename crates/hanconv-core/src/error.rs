use std::fmt;

/// Coarse classification shared by every error the engine returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested dictionary source does not exist.
    FileNotFound,
    /// A binary dictionary is truncated, mislabelled or inconsistent.
    InvalidFormat,
    /// A text dictionary (or entry list) failed validation while building.
    InvalidTextDictionary,
    /// Input text is not valid UTF-8.
    InvalidUtf8,
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::FileNotFound => "file not found",
            ErrorKind::InvalidFormat => "invalid format",
            ErrorKind::InvalidTextDictionary => "invalid text dictionary",
            ErrorKind::InvalidUtf8 => "invalid UTF-8",
            ErrorKind::Unknown => "unknown error",
        };
        f.write_str(s)
    }
}
