use std::collections::HashSet;

use tracing::debug;

use crate::trie::{DoubleArray, PrefixMatch};

use super::{DictError, Match};

pub(super) const MAGIC: &[u8; 4] = b"HCDX";
pub(super) const VERSION: u8 = 1;
// magic + version + reserved + key_count + trie_len + values_len + crc32 = 24
pub(super) const HEADER_SIZE: usize = 4 + 1 + 3 + 4 + 4 + 4 + 4;

/// An immutable word → candidates dictionary.
///
/// Row `i` of `values` belongs to trie terminal `i`, i.e. to the `i`-th key
/// in byte order. Every row is non-empty; the first candidate is the
/// default replacement.
pub struct TrieDictionary {
    pub(super) trie: DoubleArray,
    pub(super) values: Vec<Vec<String>>,
}

impl TrieDictionary {
    /// Build from `(key, candidates)` pairs in any order.
    ///
    /// Rejects empty keys, empty candidate lists and duplicate keys.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, Vec<String>)>,
    ) -> Result<Self, DictError> {
        let mut pairs: Vec<(String, Vec<String>)> = entries.into_iter().collect();
        for (key, candidates) in &pairs {
            if key.is_empty() {
                return Err(DictError::InvalidEntry {
                    key: key.clone(),
                    reason: "empty key".to_string(),
                });
            }
            if candidates.is_empty() {
                return Err(DictError::InvalidEntry {
                    key: key.clone(),
                    reason: "no candidates".to_string(),
                });
            }
        }
        pairs.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        if let Some(w) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(DictError::InvalidEntry {
                key: w[0].0.clone(),
                reason: "duplicate key".to_string(),
            });
        }

        let keys: Vec<&[u8]> = pairs.iter().map(|(k, _)| k.as_bytes()).collect();
        let trie = DoubleArray::build(&keys)?;
        let values: Vec<Vec<String>> = pairs.into_iter().map(|(_, v)| v).collect();

        debug!(
            key_count = values.len(),
            units = trie.num_units(),
            "built dictionary"
        );
        Ok(Self { trie, values })
    }

    /// Assemble from a deserialized trie and value table, checking that they
    /// describe the same key set.
    pub(super) fn from_parts(
        trie: DoubleArray,
        values: Vec<Vec<String>>,
        key_count: usize,
    ) -> Result<Self, DictError> {
        if trie.num_keys() != key_count {
            return Err(DictError::Corrupt(format!(
                "header declares {key_count} keys, trie holds {}",
                trie.num_keys()
            )));
        }
        if values.len() != key_count {
            return Err(DictError::Corrupt(format!(
                "header declares {key_count} keys, value table has {} rows",
                values.len()
            )));
        }
        if let Some(row) = values.iter().position(|v| v.is_empty()) {
            return Err(DictError::Corrupt(format!("value row {row} is empty")));
        }
        for (key, id) in trie.iter() {
            if std::str::from_utf8(&key).is_err() {
                return Err(DictError::Corrupt(format!("key #{id} is not valid UTF-8")));
            }
        }
        Ok(Self { trie, values })
    }

    /// All candidates for exactly `key`.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.trie
            .exact_match(key.as_bytes())
            .map(|id| self.values[id as usize].as_slice())
    }

    /// Longest key starting at byte `pos` of `text`, ending on a char
    /// boundary. `None` if `pos` is past the end or nothing matches.
    pub fn lookup<'a>(&'a self, text: &str, pos: usize) -> Option<Match<'a>> {
        let rest = text.as_bytes().get(pos..)?;
        self.trie
            .longest_prefix_match(rest, |len| text.is_char_boundary(pos + len))
            .map(|m| self.to_match(m))
    }

    /// Every key starting at `pos`, longest first.
    pub fn match_all_prefixes<'a>(&'a self, text: &str, pos: usize) -> Vec<Match<'a>> {
        let Some(rest) = text.as_bytes().get(pos..) else {
            return Vec::new();
        };
        let mut matches: Vec<Match<'a>> = self
            .trie
            .common_prefix_search(rest)
            .filter(|m| text.is_char_boundary(pos + m.len))
            .map(|m| self.to_match(m))
            .collect();
        matches.reverse();
        matches
    }

    #[inline]
    fn to_match(&self, m: PrefixMatch) -> Match<'_> {
        Match {
            len: m.len,
            candidates: &self.values[m.value_id as usize],
        }
    }

    pub fn max_key_len(&self) -> usize {
        self.trie.max_key_len()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all `(key, candidates)` pairs in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &[String])> {
        self.trie.iter().map(move |(key, id)| {
            let key = String::from_utf8(key)
                .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
            (key, self.values[id as usize].as_slice())
        })
    }

    /// Returns (key_count, candidate_count, distinct_candidate_count).
    pub fn stats(&self) -> (usize, usize, usize) {
        let candidates: usize = self.values.iter().map(|v| v.len()).sum();
        let distinct: HashSet<&str> = self
            .values
            .iter()
            .flat_map(|v| v.iter().map(String::as_str))
            .collect();
        (self.values.len(), candidates, distinct.len())
    }
}
