use tracing::debug;

use super::{ConversionDict, Match};

/// A dictionary that merges lookups across ordered members.
///
/// At each position the longest match among all members wins. When several
/// members match the same length, the earliest member wins, so member order
/// is the priority order.
pub struct DictGroup {
    members: Vec<ConversionDict>,
    max_key_len: usize,
}

impl DictGroup {
    pub fn new(members: Vec<ConversionDict>) -> Self {
        let max_key_len = members
            .iter()
            .map(ConversionDict::max_key_len)
            .max()
            .unwrap_or(0);
        debug!(members = members.len(), max_key_len, "built dictionary group");
        Self {
            members,
            max_key_len,
        }
    }

    pub fn members(&self) -> &[ConversionDict] {
        &self.members
    }

    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn lookup<'a>(&'a self, text: &str, pos: usize) -> Option<Match<'a>> {
        let remaining = text.len().saturating_sub(pos);
        let mut best: Option<Match<'a>> = None;
        for member in &self.members {
            let Some(found) = member.lookup(text, pos) else {
                continue;
            };
            if best.map_or(true, |b| found.len > b.len) {
                best = Some(found);
                // Nothing can be longer than the rest of the input.
                if found.len == remaining {
                    break;
                }
            }
        }
        best
    }

    /// Every key length matched by any member at `pos`, longest first. For a
    /// length matched by several members, the earliest member's entry is kept.
    pub fn match_all_prefixes<'a>(&'a self, text: &str, pos: usize) -> Vec<Match<'a>> {
        let mut merged: Vec<Match<'a>> = Vec::new();
        for member in &self.members {
            for m in member.match_all_prefixes(text, pos) {
                if !merged.iter().any(|e| e.len == m.len) {
                    merged.push(m);
                }
            }
        }
        merged.sort_by(|a, b| b.len.cmp(&a.len));
        merged
    }
}
