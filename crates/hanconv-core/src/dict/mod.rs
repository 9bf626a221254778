//! Conversion dictionaries.
//!
//! `TrieDictionary` maps words to replacement candidates through a
//! double-array trie and is stored on disk in the HCDX binary format.
//! `DictGroup` merges several dictionaries into one lookup surface, and
//! `ConversionDict` is the closed set of things a conversion stage can use.

mod group;
#[cfg(test)]
mod tests;
mod text;
mod trie_dict;
mod trie_dict_io;

pub use group::DictGroup;
pub use text::parse_text_dict;
pub use trie_dict::TrieDictionary;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crate::trie::{BuildError, TrieError};
use crate::ErrorKind;

/// Unified error type for building, loading and saving dictionaries.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("dictionary not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected HCDX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("checksum mismatch (header {expected:08x}, payload {actual:08x})")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("corrupt dictionary: {0}")]
    Corrupt(String),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("invalid text dictionary at line {line}: {reason}")]
    InvalidTextDictionary { line: usize, reason: String },

    #[error("invalid entry {key:?}: {reason}")]
    InvalidEntry { key: String, reason: String },

    #[error("trie build error: {0}")]
    Build(#[from] BuildError),
}

impl DictError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DictError::FileNotFound(_) => ErrorKind::FileNotFound,
            DictError::InvalidHeader
            | DictError::InvalidMagic
            | DictError::UnsupportedVersion(_)
            | DictError::ChecksumMismatch { .. }
            | DictError::Corrupt(_)
            | DictError::Deserialize(_) => ErrorKind::InvalidFormat,
            DictError::InvalidTextDictionary { .. }
            | DictError::InvalidEntry { .. }
            | DictError::Build(_) => ErrorKind::InvalidTextDictionary,
            DictError::Io(_) | DictError::Serialize(_) => ErrorKind::Unknown,
        }
    }
}

impl From<TrieError> for DictError {
    fn from(e: TrieError) -> Self {
        DictError::Corrupt(e.to_string())
    }
}

/// A dictionary key found at some position of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Source bytes consumed by the key.
    pub len: usize,
    /// Replacement candidates, never empty.
    pub candidates: &'a [String],
}

impl<'a> Match<'a> {
    /// The default replacement: the first candidate.
    pub fn value(&self) -> &'a str {
        self.candidates.first().map_or("", String::as_str)
    }
}

/// Lookup surface of one conversion stage.
///
/// Groups hold already-built `ConversionDict`s, so nesting is always a tree.
#[derive(Clone)]
pub enum ConversionDict {
    Single(Arc<TrieDictionary>),
    Group(Arc<DictGroup>),
}

impl ConversionDict {
    pub fn single(dict: Arc<TrieDictionary>) -> Self {
        ConversionDict::Single(dict)
    }

    pub fn group(members: Vec<ConversionDict>) -> Self {
        ConversionDict::Group(Arc::new(DictGroup::new(members)))
    }

    /// Longest key starting at byte `pos` of `text`.
    #[inline]
    pub fn lookup<'a>(&'a self, text: &str, pos: usize) -> Option<Match<'a>> {
        match self {
            ConversionDict::Single(d) => d.lookup(text, pos),
            ConversionDict::Group(g) => g.lookup(text, pos),
        }
    }

    /// Every key starting at `pos`, longest first.
    pub fn match_all_prefixes<'a>(&'a self, text: &str, pos: usize) -> Vec<Match<'a>> {
        match self {
            ConversionDict::Single(d) => d.match_all_prefixes(text, pos),
            ConversionDict::Group(g) => g.match_all_prefixes(text, pos),
        }
    }

    /// Length in bytes of the longest key reachable through this stage.
    pub fn max_key_len(&self) -> usize {
        match self {
            ConversionDict::Single(d) => d.max_key_len(),
            ConversionDict::Group(g) => g.max_key_len(),
        }
    }
}

impl From<TrieDictionary> for ConversionDict {
    fn from(dict: TrieDictionary) -> Self {
        ConversionDict::Single(Arc::new(dict))
    }
}

impl From<Arc<TrieDictionary>> for ConversionDict {
    fn from(dict: Arc<TrieDictionary>) -> Self {
        ConversionDict::Single(dict)
    }
}

impl From<DictGroup> for ConversionDict {
    fn from(group: DictGroup) -> Self {
        ConversionDict::Group(Arc::new(group))
    }
}
