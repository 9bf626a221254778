//! Double-array trie over byte strings.
//!
//! Each key maps to a terminal id equal to its position in the sorted key
//! list the trie was built from. Edges are labelled with `byte + 1`; label 0
//! is the end-of-key transition whose target unit stores the terminal id as
//! a negative base.

mod builder;

pub use builder::BuildError;

/// Serialized size of one unit (`base: i32` + `check: i32`).
pub const UNIT_SIZE: usize = 8;

const ROOT: usize = 0;
const FREE: i32 = -1;
const END_OF_KEY: usize = 0;
const MAX_LABEL: usize = 256;

#[inline]
fn label(b: u8) -> usize {
    b as usize + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unit {
    base: i32,
    check: i32,
}

impl Unit {
    const EMPTY: Unit = Unit {
        base: 0,
        check: FREE,
    };
}

#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    #[error("trie data is empty")]
    Empty,

    #[error("trie data length {0} is not a multiple of {UNIT_SIZE}")]
    Misaligned(usize),

    #[error("corrupt trie: {0}")]
    Corrupt(String),
}

/// A key reached while walking a query, as a byte length into that query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch {
    pub len: usize,
    pub value_id: u32,
}

#[derive(Debug)]
pub struct DoubleArray {
    units: Vec<Unit>,
    num_keys: usize,
    max_key_len: usize,
}

impl DoubleArray {
    /// Build from keys that are non-empty, unique and sorted by bytes.
    pub fn build<K: AsRef<[u8]>>(keys: &[K]) -> Result<Self, BuildError> {
        builder::build(keys)
    }

    pub fn num_keys(&self) -> usize {
        self.num_keys
    }

    /// Length in bytes of the longest key.
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn num_units(&self) -> usize {
        self.units.len()
    }

    #[inline]
    fn child(&self, node: usize, code: usize) -> Option<usize> {
        let base = self.units.get(node)?.base;
        if base < 0 {
            return None;
        }
        let target = base as usize + code;
        match self.units.get(target) {
            Some(u) if u.check == node as i32 => Some(target),
            _ => None,
        }
    }

    #[inline]
    fn terminal(&self, node: usize) -> Option<u32> {
        let leaf = self.child(node, END_OF_KEY)?;
        let base = self.units[leaf].base;
        (base < 0).then(|| (-(base + 1)) as u32)
    }

    pub fn exact_match(&self, key: &[u8]) -> Option<u32> {
        let mut node = ROOT;
        for &b in key {
            node = self.child(node, label(b))?;
        }
        self.terminal(node)
    }

    /// All keys that are prefixes of `query`, shortest first.
    pub fn common_prefix_search<'a>(&'a self, query: &'a [u8]) -> CommonPrefixSearch<'a> {
        CommonPrefixSearch {
            trie: self,
            query,
            node: Some(ROOT),
            pos: 0,
        }
    }

    /// The longest key that is a prefix of `query` and whose length passes
    /// `accept`.
    pub fn longest_prefix_match(
        &self,
        query: &[u8],
        mut accept: impl FnMut(usize) -> bool,
    ) -> Option<PrefixMatch> {
        self.common_prefix_search(query)
            .filter(|m| accept(m.len))
            .last()
    }

    /// All `(key, value_id)` pairs in byte-lexicographic order.
    pub fn iter(&self) -> Keys<'_> {
        Keys {
            trie: self,
            stack: vec![(ROOT, Vec::new())],
        }
    }

    pub fn as_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.units.len() * UNIT_SIZE);
        for u in &self.units {
            buf.extend_from_slice(&u.base.to_le_bytes());
            buf.extend_from_slice(&u.check.to_le_bytes());
        }
        buf
    }

    /// Deserialize and verify the structure.
    ///
    /// Every unit has a single parent (`check`), so the reachable units form a
    /// tree. The walk requires terminal ids to come out as `0, 1, 2, ...` in
    /// key order, which holds exactly when the trie was built from sorted keys.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TrieError> {
        if data.is_empty() {
            return Err(TrieError::Empty);
        }
        if data.len() % UNIT_SIZE != 0 {
            return Err(TrieError::Misaligned(data.len()));
        }

        let units: Vec<Unit> = data
            .chunks_exact(UNIT_SIZE)
            .map(|c| Unit {
                base: i32::from_le_bytes([c[0], c[1], c[2], c[3]]),
                check: i32::from_le_bytes([c[4], c[5], c[6], c[7]]),
            })
            .collect();

        let mut trie = Self {
            units,
            num_keys: 0,
            max_key_len: 0,
        };

        let mut expected_id = 0u32;
        let mut max_key_len = 0usize;
        trie.walk(|key, id| {
            if key.is_empty() {
                return Err(TrieError::Corrupt("empty key".into()));
            }
            if id != expected_id {
                return Err(TrieError::Corrupt(format!(
                    "terminal id {id} out of order (expected {expected_id})"
                )));
            }
            expected_id += 1;
            max_key_len = max_key_len.max(key.len());
            Ok(())
        })?;

        trie.num_keys = expected_id as usize;
        trie.max_key_len = max_key_len;
        Ok(trie)
    }

    /// Depth-first walk in key order.
    fn walk(
        &self,
        mut f: impl FnMut(&[u8], u32) -> Result<(), TrieError>,
    ) -> Result<(), TrieError> {
        let mut stack: Vec<(usize, Vec<u8>)> = vec![(ROOT, Vec::new())];
        while let Some((node, key)) = stack.pop() {
            self.push_children(node, &key, &mut stack);
            if let Some(id) = self.terminal(node) {
                f(&key, id)?;
            }
        }
        Ok(())
    }

    fn push_children(&self, node: usize, key: &[u8], stack: &mut Vec<(usize, Vec<u8>)>) {
        for code in (1..=MAX_LABEL).rev() {
            if let Some(child) = self.child(node, code) {
                let mut k = Vec::with_capacity(key.len() + 1);
                k.extend_from_slice(key);
                k.push((code - 1) as u8);
                stack.push((child, k));
            }
        }
    }
}

pub struct CommonPrefixSearch<'a> {
    trie: &'a DoubleArray,
    query: &'a [u8],
    node: Option<usize>,
    pos: usize,
}

impl Iterator for CommonPrefixSearch<'_> {
    type Item = PrefixMatch;

    fn next(&mut self) -> Option<PrefixMatch> {
        while let Some(node) = self.node {
            if self.pos >= self.query.len() {
                self.node = None;
                break;
            }
            let next = self.trie.child(node, label(self.query[self.pos]));
            self.node = next;
            let node = next?;
            self.pos += 1;
            if let Some(value_id) = self.trie.terminal(node) {
                return Some(PrefixMatch {
                    len: self.pos,
                    value_id,
                });
            }
        }
        None
    }
}

pub struct Keys<'a> {
    trie: &'a DoubleArray,
    stack: Vec<(usize, Vec<u8>)>,
}

impl Iterator for Keys<'_> {
    type Item = (Vec<u8>, u32);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, key)) = self.stack.pop() {
            self.trie.push_children(node, &key, &mut self.stack);
            if let Some(id) = self.trie.terminal(node) {
                return Some((key, id));
            }
        }
        None
    }
}
