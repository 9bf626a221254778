//! Resolve dictionary names and recipes into conversion chains.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use hanconv_core::{ConversionChain, ConversionDict, Converter, DictError, TrieDictionary};
use tracing::debug_span;

use crate::cache::DictionaryCache;
use crate::options::{is_valid_dictionary_name, Options, Recipe};
use crate::settings::{settings, Settings};
use crate::Error;

/// Opens named dictionaries from one directory through a shared cache.
///
/// A name resolves to `<dir>/<name>.<extension>`; the extension and the
/// extra presets come from [`Settings`].
pub struct DictionaryLoader {
    dir: PathBuf,
    extension: String,
    presets: BTreeMap<String, Recipe>,
    cache: Arc<DictionaryCache>,
}

impl DictionaryLoader {
    /// Loader configured from the global settings.
    pub fn new(dir: impl Into<PathBuf>, cache: Arc<DictionaryCache>) -> Self {
        Self::with_settings(dir, cache, settings())
    }

    pub fn with_settings(
        dir: impl Into<PathBuf>,
        cache: Arc<DictionaryCache>,
        settings: &Settings,
    ) -> Self {
        let presets = settings
            .preset_names()
            .filter_map(|name| Some((name.to_string(), settings.preset(name)?)))
            .collect();
        Self {
            dir: dir.into(),
            extension: settings.dictionary.extension.clone(),
            presets,
            cache,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn cache(&self) -> &Arc<DictionaryCache> {
        &self.cache
    }

    pub fn path_for(&self, name: &str) -> Result<PathBuf, Error> {
        if !is_valid_dictionary_name(name) {
            return Err(Error::InvalidDictionaryName(name.to_string()));
        }
        Ok(self.dir.join(format!("{name}.{}", self.extension)))
    }

    pub fn dict(&self, name: &str) -> Result<Arc<TrieDictionary>, Error> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(DictError::FileNotFound(path).into());
        }
        Ok(self.cache.get_or_load(&path)?)
    }

    /// One chain stage: `None` for an empty name list, a single dictionary
    /// for one name, a group otherwise.
    pub fn stage(&self, names: &[String]) -> Result<Option<ConversionDict>, Error> {
        match names {
            [] => Ok(None),
            [name] => Ok(Some(ConversionDict::single(self.dict(name)?))),
            _ => {
                let members = names
                    .iter()
                    .map(|n| self.dict(n).map(ConversionDict::single))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Some(ConversionDict::group(members)))
            }
        }
    }

    pub fn chain_for(&self, recipe: &Recipe) -> Result<ConversionChain, Error> {
        let _span = debug_span!("chain_for", stages = recipe.stages().len()).entered();
        let mut stages = Vec::with_capacity(recipe.stages().len());
        for names in recipe.stages() {
            if let Some(stage) = self.stage(names)? {
                stages.push(stage);
            }
        }
        Ok(ConversionChain::build(stages))
    }

    pub fn converter_for(&self, options: Options) -> Result<Converter, Error> {
        let chain = self.chain_for(&options.recipe())?;
        Ok(Converter::new(options.name().unwrap_or("custom"), chain))
    }

    /// Converter for a built-in preset or one defined in the settings.
    pub fn converter_for_preset(&self, name: &str) -> Result<Converter, Error> {
        let recipe = match Options::preset(name) {
            Some(options) => options.recipe(),
            None => self
                .presets
                .get(name)
                .cloned()
                .ok_or_else(|| Error::UnknownPreset(name.to_string()))?,
        };
        let chain = self.chain_for(&recipe)?;
        Ok(Converter::new(name, chain))
    }

    /// Names of every preset this loader can build.
    pub fn preset_names(&self) -> Vec<&str> {
        Options::PRESETS
            .iter()
            .map(|&(n, _)| n)
            .chain(self.presets.keys().map(String::as_str))
            .collect()
    }
}
