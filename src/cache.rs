use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use hanconv_core::{DictError, TrieDictionary};
use tracing::debug;

/// Shared, load-once store of opened dictionaries keyed by canonical path.
///
/// Loads of one path are serialized by a per-path gate; the entry map is
/// only locked to read or insert. Entries are immutable, so a poisoned lock
/// still guards consistent data.
#[derive(Default)]
pub struct DictionaryCache {
    entries: RwLock<HashMap<PathBuf, Arc<TrieDictionary>>>,
    loading: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl DictionaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the dictionary at `path`, opening it on first use.
    ///
    /// Concurrent first requests for the same file open it once; later callers
    /// share the same `Arc`. Loading one file never blocks lookups of others.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<TrieDictionary>, DictError> {
        let key = match path.canonicalize() {
            Ok(p) => p,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DictError::FileNotFound(path.to_path_buf()))
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(dict) = self.cached(&key) {
            return Ok(dict);
        }

        let gate = Arc::clone(
            self.loading
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .entry(key.clone())
                .or_default(),
        );
        let _loading = gate.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(dict) = self.cached(&key) {
            return Ok(dict);
        }

        let loaded = TrieDictionary::open(&key).map(Arc::new);
        if let Ok(dict) = &loaded {
            debug!(path = %key.display(), keys = dict.len(), "cached dictionary");
            self.entries
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key.clone(), Arc::clone(dict));
        }
        self.loading
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key);
        loaded
    }

    fn cached(&self, key: &Path) -> Option<Arc<TrieDictionary>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
