//! Human-editable dictionary source.
//!
//! One entry per line: the key, a tab, then space-separated candidates.
//! Blank lines are ignored.
//!
//! ```text
//! 语言	語言
//! 后	後 后
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use super::{DictError, TrieDictionary};

fn invalid(line: usize, reason: impl Into<String>) -> DictError {
    DictError::InvalidTextDictionary {
        line,
        reason: reason.into(),
    }
}

/// Parse a text dictionary into `(key, candidates)` pairs in file order.
pub fn parse_text_dict(text: &str) -> Result<Vec<(String, Vec<String>)>, DictError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut entries: Vec<(String, Vec<String>)> = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }

        let Some((key, rest)) = line.split_once('\t') else {
            return Err(invalid(line_no, "missing tab between key and candidates"));
        };
        if key.is_empty() {
            return Err(invalid(line_no, "empty key"));
        }
        if let Some(prev) = first_seen.insert(key, line_no) {
            return Err(invalid(
                line_no,
                format!("duplicate key {key:?} (first defined on line {prev})"),
            ));
        }

        let candidates: Vec<String> = rest
            .split([' ', '\t'])
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        if candidates.is_empty() {
            return Err(invalid(line_no, format!("no candidates for {key:?}")));
        }

        entries.push((key.to_string(), candidates));
    }

    Ok(entries)
}

impl TrieDictionary {
    pub fn from_text(text: &str) -> Result<Self, DictError> {
        Self::from_entries(parse_text_dict(text)?)
    }

    pub fn from_text_file(path: &Path) -> Result<Self, DictError> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DictError::FileNotFound(path.to_path_buf()),
            _ => DictError::Io(e),
        })?;
        let text = std::str::from_utf8(&bytes).map_err(|e| {
            let valid = &bytes[..e.valid_up_to()];
            let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
            invalid(line, format!("invalid UTF-8 at byte {}", e.valid_up_to()))
        })?;
        Self::from_text(text)
    }

    /// Render in text dictionary format, keys in byte order.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (key, candidates) in self.iter() {
            out.push_str(&key);
            out.push('\t');
            out.push_str(&candidates.join(" "));
            out.push('\n');
        }
        out
    }
}
