use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use hanconv::{
    settings, ConversionChain, ConversionDict, Converter, DictionaryCache, DictionaryLoader,
    Error,
};

pub struct ConvertOptions {
    pub preset: String,
    pub dict_files: Vec<String>,
    pub dict_dir: String,
    pub settings_file: Option<String>,
    pub explain: bool,
    pub trace_dir: Option<String>,
    pub text: Option<String>,
}

/// Chain of explicit dictionary files, one stage each, in the given order.
pub fn converter_from_files(files: &[String]) -> Result<Converter, Error> {
    let cache = DictionaryCache::new();
    let stages = files
        .iter()
        .map(|f| -> Result<ConversionDict, Error> {
            Ok(ConversionDict::single(cache.get_or_load(Path::new(f))?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Converter::new("custom", ConversionChain::build(stages)))
}

pub fn build_converter(opts: &ConvertOptions) -> Result<Converter, Error> {
    if !opts.dict_files.is_empty() {
        return converter_from_files(&opts.dict_files);
    }
    let loader = DictionaryLoader::new(&opts.dict_dir, Arc::new(DictionaryCache::new()));
    loader.converter_for_preset(&opts.preset)
}

fn read_input(text: Option<&str>) -> io::Result<Vec<u8>> {
    match text {
        Some(t) => Ok(t.as_bytes().to_vec()),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn init_settings(settings_file: Option<&str>) {
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error: {}");
    }
}

pub fn convert_cmd(opts: &ConvertOptions) {
    if let Some(dir) = &opts.trace_dir {
        die!(fs::create_dir_all(dir), "Error creating {dir}: {}");
        hanconv::init_tracing(Path::new(dir));
    }
    init_settings(opts.settings_file.as_deref());

    let converter = die!(build_converter(opts), "Error loading dictionaries: {}");
    let input = die!(read_input(opts.text.as_deref()), "Error reading input: {}");

    if opts.explain {
        let text = die!(
            std::str::from_utf8(&input).map_err(|e| hanconv::ConvertError::InvalidUtf8 {
                valid_up_to: e.valid_up_to()
            }),
            "Error: {}"
        );
        let report = converter.explain(text);
        let out = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{out}");
        return;
    }

    let output = die!(converter.convert_bytes(&input), "Error: {}");
    print!("{output}");
    if opts.text.is_some() && !output.ends_with('\n') {
        println!();
    }
}

pub fn list_presets(dict_dir: &str, settings_file: Option<&str>) {
    init_settings(settings_file);
    let loader = DictionaryLoader::new(dict_dir, Arc::new(DictionaryCache::new()));
    for name in loader.preset_names() {
        println!("{name}");
    }
}
