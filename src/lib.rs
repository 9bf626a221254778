//! Chinese script conversion built on [`hanconv_core`].
//!
//! This crate resolves conversion options and named presets into recipes,
//! opens the named dictionaries from a directory through a shared
//! [`DictionaryCache`], and assembles them into a [`Converter`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use hanconv::{DictionaryCache, DictionaryLoader};
//!
//! let loader = DictionaryLoader::new("/usr/share/hanconv", Arc::new(DictionaryCache::new()));
//! let s2t = loader.converter_for_preset("s2t")?;
//! assert_eq!(s2t.convert("头发"), "頭髮");
//! # Ok::<(), hanconv::Error>(())
//! ```

mod cache;
mod error;
mod loader;
pub mod options;
pub mod settings;
mod trace_init;

pub use cache::DictionaryCache;
pub use error::Error;
pub use loader::DictionaryLoader;
pub use options::{DictionaryName, Options, Recipe};
pub use trace_init::init_tracing;

pub use hanconv_core::{
    converter, dict, trie, ConversionChain, ConversionDict, ConvertError, Converter, DictError,
    DictGroup, ErrorKind, ExplainResult, Match, TrieDictionary,
};
