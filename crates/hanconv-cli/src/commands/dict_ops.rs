use std::fs;
use std::path::Path;
use std::process;

use hanconv::{DictError, TrieDictionary};
use serde::Serialize;

/// Parse a text dictionary and write it in binary form.
///
/// Returns `(keys, candidates)` of the compiled dictionary.
pub fn compile_file(input: &Path, output: &Path) -> Result<(usize, usize), DictError> {
    let dict = TrieDictionary::from_text_file(input)?;
    dict.save(output)?;
    let (keys, candidates, _) = dict.stats();
    Ok((keys, candidates))
}

/// Write a binary dictionary back out in text form. Returns the key count.
pub fn decompile_file(input: &Path, output: &Path) -> Result<usize, DictError> {
    let dict = TrieDictionary::open(input)?;
    fs::write(output, dict.to_text())?;
    Ok(dict.len())
}

fn open(dict_file: &str) -> TrieDictionary {
    die!(
        TrieDictionary::open(Path::new(dict_file)),
        "Error opening dictionary: {}"
    )
}

fn file_size_mb(file: &str) -> f64 {
    fs::metadata(file).map(|m| m.len()).unwrap_or(0) as f64 / 1_048_576.0
}

pub fn compile(input_file: &str, output_file: &str) {
    eprintln!("Compiling {input_file}...");
    let (keys, candidates) = die!(
        compile_file(Path::new(input_file), Path::new(output_file)),
        "Error compiling dictionary: {}"
    );
    eprintln!("  {keys} keys ({candidates} candidates)");
    eprintln!("Wrote {output_file} ({:.1} MB)", file_size_mb(output_file));
}

pub fn decompile(input_file: &str, output_file: &str) {
    let keys = die!(
        decompile_file(Path::new(input_file), Path::new(output_file)),
        "Error decompiling dictionary: {}"
    );
    eprintln!("Wrote {output_file} ({keys} keys)");
}

pub fn info(file: &str) {
    let magic = fs::read(file)
        .ok()
        .and_then(|b| b.get(..4).map(|s| s.to_vec()));

    match magic.as_deref() {
        Some(b"HCDX") => info_dict(file),
        Some(other) => {
            eprintln!(
                "Unknown file format (magic: {:?})",
                String::from_utf8_lossy(other)
            );
            process::exit(1);
        }
        None => {
            eprintln!("Error reading file: {file}");
            process::exit(1);
        }
    }
}

fn info_dict(dict_file: &str) {
    let dict = open(dict_file);
    let (keys, candidates, distinct) = dict.stats();

    println!("Dictionary: {dict_file}");
    println!("File size:  {:.1} MB", file_size_mb(dict_file));
    println!("Keys:       {keys}");
    println!("Candidates: {candidates} ({distinct} distinct)");
    println!("Longest key: {} bytes", dict.max_key_len());

    println!();
    println!("Sample entries:");
    for (key, cands) in dict.iter().take(5) {
        println!("  {key} → {}", cands.join(" "));
    }
}

#[derive(Serialize)]
struct LookupReport<'a> {
    key: &'a str,
    found: bool,
    candidates: &'a [String],
}

pub fn lookup(dict_file: &str, key: &str, json: bool) {
    let dict = open(dict_file);
    let candidates = dict.get(key).unwrap_or(&[]);
    if json {
        let report = LookupReport {
            key,
            found: !candidates.is_empty(),
            candidates,
        };
        let out = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{out}");
    } else if candidates.is_empty() {
        println!("{key}: not found");
    } else {
        println!("{key}: {} candidates", candidates.len());
        for c in candidates {
            println!("  {c}");
        }
    }
}

pub fn prefix(dict_file: &str, query: &str) {
    let dict = open(dict_file);
    let results = dict.match_all_prefixes(query, 0);
    if results.is_empty() {
        println!("{query}: no prefix matches");
        return;
    }
    println!("{query}: {} prefix matches", results.len());
    for m in results {
        println!("  {} → {}", &query[..m.len], m.candidates.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_then_decompile() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("STPhrases.txt");
        let bin = dir.path().join("STPhrases.hcd");
        let back = dir.path().join("back.txt");
        fs::write(&txt, "语言\t語言\n头发\t頭髮\n发\t發 髮\n").unwrap();

        let (keys, candidates) = compile_file(&txt, &bin).unwrap();
        assert_eq!((keys, candidates), (3, 4));

        assert_eq!(decompile_file(&bin, &back).unwrap(), 3);
        let reparsed = TrieDictionary::from_text_file(&back).unwrap();
        assert_eq!(reparsed.get("发").unwrap(), ["發", "髮"]);
        assert_eq!(reparsed.len(), 3);
    }

    #[test]
    fn compile_reports_bad_line() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("bad.txt");
        fs::write(&txt, "语言\t語言\nno tab here\n").unwrap();
        let err = compile_file(&txt, &dir.path().join("bad.hcd")).unwrap_err();
        assert!(matches!(err, DictError::InvalidTextDictionary { line: 2, .. }));
    }

    #[test]
    fn compile_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = compile_file(&dir.path().join("none.txt"), &dir.path().join("x.hcd"))
            .unwrap_err();
        assert!(matches!(err, DictError::FileNotFound(_)));
    }
}
