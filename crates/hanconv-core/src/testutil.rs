use std::sync::Arc;

use crate::dict::{ConversionDict, TrieDictionary};

/// Build a dictionary from `(key, "cand1 cand2 ...")` pairs.
pub(crate) fn dict_of(entries: &[(&str, &str)]) -> TrieDictionary {
    TrieDictionary::from_entries(entries.iter().map(|(k, vs)| {
        (
            k.to_string(),
            vs.split(' ').map(str::to_string).collect::<Vec<_>>(),
        )
    }))
    .unwrap()
}

/// Single-dictionary stage from `(key, "cand1 cand2 ...")` pairs.
pub(crate) fn stage_of(entries: &[(&str, &str)]) -> ConversionDict {
    ConversionDict::single(Arc::new(dict_of(entries)))
}

/// A small simplified → traditional phrase and character set.
pub(crate) fn s2t_stages() -> (ConversionDict, ConversionDict) {
    let phrases = stage_of(&[
        ("语言", "語言"),
        ("头发", "頭髮"),
        ("发展", "發展"),
        ("干燥", "乾燥"),
    ]);
    let characters = stage_of(&[
        ("语", "語"),
        ("发", "發 髮"),
        ("头", "頭"),
        ("干", "幹 乾 干"),
        ("后", "後 后"),
        ("习", "習"),
        ("学", "學"),
    ]);
    (phrases, characters)
}
