use std::fs::{self, File};
use std::io;
use std::path::Path;

use memmap2::Mmap;
use tracing::{debug, debug_span};

use crate::trie::DoubleArray;

use super::trie_dict::{TrieDictionary, HEADER_SIZE, MAGIC, VERSION};
use super::DictError;

#[inline]
fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn section_len(len: usize, what: &str) -> Result<u32, DictError> {
    len.try_into()
        .map_err(|_| DictError::Corrupt(format!("{what} exceeds u32::MAX")))
}

impl TrieDictionary {
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let trie_data = self.trie.as_bytes();
        let values_data = bincode::serialize(&self.values).map_err(DictError::Serialize)?;

        let key_count = section_len(self.values.len(), "key count")?;
        let trie_len = section_len(trie_data.len(), "trie data")?;
        let values_len = section_len(values_data.len(), "value table")?;

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&trie_data);
        hasher.update(&values_data);
        let crc = hasher.finalize();

        let mut buf = Vec::with_capacity(HEADER_SIZE + trie_data.len() + values_data.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&[0u8; 3]); // reserved
        buf.extend_from_slice(&key_count.to_le_bytes());
        buf.extend_from_slice(&trie_len.to_le_bytes());
        buf.extend_from_slice(&values_len.to_le_bytes());
        buf.extend_from_slice(&crc.to_le_bytes());
        buf.extend_from_slice(&trie_data);
        buf.extend_from_slice(&values_data);

        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        let _span = debug_span!("dict_from_bytes", bytes = data.len()).entered();
        if data.len() < 5 {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }

        let key_count = read_u32(data, 8) as usize;
        let trie_len = read_u32(data, 12) as usize;
        let values_len = read_u32(data, 16) as usize;
        let expected_crc = read_u32(data, 20);

        let expected = HEADER_SIZE + trie_len + values_len;
        if data.len() < expected {
            return Err(DictError::InvalidHeader);
        }
        if data.len() > expected {
            return Err(DictError::Corrupt(format!(
                "{} trailing bytes after value table",
                data.len() - expected
            )));
        }

        let trie_start = HEADER_SIZE;
        let values_start = trie_start + trie_len;
        let payload = &data[trie_start..];

        let actual_crc = crc32fast::hash(payload);
        if actual_crc != expected_crc {
            return Err(DictError::ChecksumMismatch {
                expected: expected_crc,
                actual: actual_crc,
            });
        }

        let trie = DoubleArray::from_bytes(&data[trie_start..values_start])?;
        let values: Vec<Vec<String>> =
            bincode::deserialize(&data[values_start..]).map_err(DictError::Deserialize)?;

        let dict = Self::from_parts(trie, values, key_count)?;
        debug!(key_count, max_key_len = dict.max_key_len(), "loaded dictionary");
        Ok(dict)
    }

    /// Open a dictionary file through a read-only memory map.
    ///
    /// The structures are copied out of the mapping, which is dropped before
    /// returning.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let _span = debug_span!("dict_open", path = %path.display()).entered();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DictError::FileNotFound(path.to_path_buf()),
            _ => DictError::Io(e),
        })?;
        if file.metadata()?.len() == 0 {
            return Err(DictError::InvalidHeader);
        }
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after deserialization completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}
