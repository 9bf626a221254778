use super::{label, DoubleArray, Unit, END_OF_KEY, FREE, MAX_LABEL, ROOT};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("key #{0} is empty")]
    EmptyKey(usize),

    #[error("key #{0} is not strictly greater than the previous key")]
    Unsorted(usize),

    #[error("too many keys: {0}")]
    TooManyKeys(usize),
}

/// One pending node: its unit index and the key range `lo..hi` sharing the
/// first `depth` bytes.
struct Pending {
    node: usize,
    lo: usize,
    hi: usize,
    depth: usize,
}

pub(super) fn build<K: AsRef<[u8]>>(keys: &[K]) -> Result<DoubleArray, BuildError> {
    if keys.len() >= i32::MAX as usize {
        return Err(BuildError::TooManyKeys(keys.len()));
    }
    for (i, key) in keys.iter().enumerate() {
        if key.as_ref().is_empty() {
            return Err(BuildError::EmptyKey(i));
        }
        if i > 0 && keys[i - 1].as_ref() >= key.as_ref() {
            return Err(BuildError::Unsorted(i));
        }
    }

    let mut b = Builder {
        units: vec![Unit { base: 1, check: 0 }],
        next_free: 1,
    };

    let mut stack = vec![Pending {
        node: ROOT,
        lo: 0,
        hi: keys.len(),
        depth: 0,
    }];
    let mut children: Vec<(usize, usize, usize)> = Vec::new();

    while let Some(p) = stack.pop() {
        if p.lo == p.hi {
            continue;
        }
        collect_children(keys, &p, &mut children);
        let base = b.find_base(&children);
        b.units[p.node].base = base as i32;
        for &(code, _, _) in &children {
            b.units[base + code].check = p.node as i32;
        }
        for &(code, lo, hi) in children.iter().rev() {
            if code == END_OF_KEY {
                // Keys are unique, so the end-of-key group holds exactly `lo`.
                b.units[base].base = -(lo as i32) - 1;
            } else {
                stack.push(Pending {
                    node: base + code,
                    lo,
                    hi,
                    depth: p.depth + 1,
                });
            }
        }
    }

    while b.units.len() > 1 && b.units.last().is_some_and(|u| u.check == FREE) {
        b.units.pop();
    }
    b.units.shrink_to_fit();

    let max_key_len = keys.iter().map(|k| k.as_ref().len()).max().unwrap_or(0);
    Ok(DoubleArray {
        units: b.units,
        num_keys: keys.len(),
        max_key_len,
    })
}

#[inline]
fn code_at(key: &[u8], depth: usize) -> usize {
    key.get(depth).map_or(END_OF_KEY, |&b| label(b))
}

/// Group `p.lo..p.hi` by the edge label at `p.depth`. Sorted keys make the
/// labels ascending, with the end-of-key label first when present.
fn collect_children<K: AsRef<[u8]>>(
    keys: &[K],
    p: &Pending,
    out: &mut Vec<(usize, usize, usize)>,
) {
    out.clear();
    let mut i = p.lo;
    while i < p.hi {
        let code = code_at(keys[i].as_ref(), p.depth);
        let start = i;
        while i < p.hi && code_at(keys[i].as_ref(), p.depth) == code {
            i += 1;
        }
        out.push((code, start, i));
    }
}

struct Builder {
    units: Vec<Unit>,
    next_free: usize,
}

impl Builder {
    fn reserve(&mut self, len: usize) {
        if self.units.len() < len {
            let target = len.max(self.units.len() * 2);
            self.units.resize(target, Unit::EMPTY);
        }
    }

    fn is_free(&self, pos: usize) -> bool {
        self.units.get(pos).map_or(true, |u| u.check == FREE)
    }

    fn find_base(&mut self, children: &[(usize, usize, usize)]) -> usize {
        while !self.is_free(self.next_free) {
            self.next_free += 1;
        }

        let first = children[0].0;
        let mut pos = self.next_free.max(first + 1);
        loop {
            if self.is_free(pos) {
                let base = pos - first;
                if children.iter().all(|&(code, _, _)| self.is_free(base + code)) {
                    self.reserve(base + MAX_LABEL + 1);
                    return base;
                }
            }
            pos += 1;
        }
    }
}
