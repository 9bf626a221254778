//! Named dictionaries, conversion options and the recipes they resolve to.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The standard dictionary set shipped with conversion data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DictionaryName {
    STCharacters,
    STPhrases,
    TSCharacters,
    TSPhrases,
    TWPhrases,
    TWPhrasesRev,
    TWVariants,
    TWVariantsRev,
    TWVariantsRevPhrases,
    HKVariants,
    HKVariantsRev,
    HKVariantsRevPhrases,
    JPVariants,
}

impl DictionaryName {
    pub const ALL: [DictionaryName; 13] = [
        DictionaryName::STCharacters,
        DictionaryName::STPhrases,
        DictionaryName::TSCharacters,
        DictionaryName::TSPhrases,
        DictionaryName::TWPhrases,
        DictionaryName::TWPhrasesRev,
        DictionaryName::TWVariants,
        DictionaryName::TWVariantsRev,
        DictionaryName::TWVariantsRevPhrases,
        DictionaryName::HKVariants,
        DictionaryName::HKVariantsRev,
        DictionaryName::HKVariantsRevPhrases,
        DictionaryName::JPVariants,
    ];

    /// File stem of the compiled dictionary.
    pub fn as_str(self) -> &'static str {
        match self {
            DictionaryName::STCharacters => "STCharacters",
            DictionaryName::STPhrases => "STPhrases",
            DictionaryName::TSCharacters => "TSCharacters",
            DictionaryName::TSPhrases => "TSPhrases",
            DictionaryName::TWPhrases => "TWPhrases",
            DictionaryName::TWPhrasesRev => "TWPhrasesRev",
            DictionaryName::TWVariants => "TWVariants",
            DictionaryName::TWVariantsRev => "TWVariantsRev",
            DictionaryName::TWVariantsRevPhrases => "TWVariantsRevPhrases",
            DictionaryName::HKVariants => "HKVariants",
            DictionaryName::HKVariantsRev => "HKVariantsRev",
            DictionaryName::HKVariantsRevPhrases => "HKVariantsRevPhrases",
            DictionaryName::JPVariants => "JPVariants",
        }
    }
}

impl fmt::Display for DictionaryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DictionaryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        DictionaryName::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| Error::InvalidDictionaryName(s.to_string()))
    }
}

/// A dictionary name usable as a file stem: non-empty, no path separators.
pub(crate) fn is_valid_dictionary_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// Ordered stages of dictionary names.
///
/// Empty stages are skipped when the chain is built; a stage with one name
/// is a single dictionary, a stage with several is a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    stages: Vec<Vec<String>>,
}

impl Recipe {
    pub fn new(stages: Vec<Vec<String>>) -> Self {
        Self { stages }
    }

    fn from_names(stages: &[&[DictionaryName]]) -> Self {
        Self::new(
            stages
                .iter()
                .map(|stage| stage.iter().map(|n| n.as_str().to_string()).collect())
                .collect(),
        )
    }

    pub fn stages(&self) -> &[Vec<String>] {
        &self.stages
    }

    pub fn is_empty(&self) -> bool {
        self.stages.iter().all(Vec::is_empty)
    }
}

impl From<Vec<Vec<String>>> for Recipe {
    fn from(stages: Vec<Vec<String>>) -> Self {
        Self::new(stages)
    }
}

/// Conversion flags, combined into a recipe by [`Options::recipe`].
///
/// `traditionalize` takes precedence over `simplify` when both are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Options {
    pub traditionalize: bool,
    pub simplify: bool,
    pub tw_standard: bool,
    pub hk_standard: bool,
    pub tw_idiom: bool,
}

impl Options {
    pub const TRADITIONALIZE: Options = Options {
        traditionalize: true,
        simplify: false,
        tw_standard: false,
        hk_standard: false,
        tw_idiom: false,
    };

    pub const SIMPLIFY: Options = Options {
        traditionalize: false,
        simplify: true,
        tw_standard: false,
        hk_standard: false,
        tw_idiom: false,
    };

    pub const PRESETS: [(&'static str, Options); 8] = [
        ("s2t", Options::TRADITIONALIZE),
        ("t2s", Options::SIMPLIFY),
        ("s2hk", Options::TRADITIONALIZE.hk()),
        ("hk2s", Options::SIMPLIFY.hk()),
        ("s2tw", Options::TRADITIONALIZE.tw()),
        ("tw2s", Options::SIMPLIFY.tw()),
        ("s2twp", Options::TRADITIONALIZE.tw().idiom()),
        ("tw2sp", Options::SIMPLIFY.tw().idiom()),
    ];

    const fn hk(mut self) -> Options {
        self.hk_standard = true;
        self
    }

    const fn tw(mut self) -> Options {
        self.tw_standard = true;
        self
    }

    const fn idiom(mut self) -> Options {
        self.tw_idiom = true;
        self
    }

    pub fn preset(name: &str) -> Option<Options> {
        Options::PRESETS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, o)| o)
    }

    /// The preset name these options correspond to, if any.
    pub fn name(&self) -> Option<&'static str> {
        Options::PRESETS
            .iter()
            .find(|(_, o)| o == self)
            .map(|&(n, _)| n)
    }

    pub fn recipe(&self) -> Recipe {
        use DictionaryName::*;

        let mut stages: Vec<&[DictionaryName]> = Vec::new();
        if self.traditionalize {
            stages.push(&[STPhrases, STCharacters]);
            if self.tw_idiom {
                stages.push(&[TWPhrases]);
            }
            if self.hk_standard {
                stages.push(&[HKVariants]);
            } else if self.tw_standard {
                stages.push(&[TWVariants]);
            }
        } else if self.simplify {
            if self.hk_standard {
                stages.push(&[HKVariantsRevPhrases, HKVariantsRev]);
            } else if self.tw_standard {
                stages.push(&[TWVariantsRevPhrases, TWVariantsRev]);
            }
            if self.tw_idiom {
                stages.push(&[TWPhrasesRev]);
            }
            stages.push(&[TSPhrases, TSCharacters]);
        } else if self.hk_standard {
            stages.push(&[HKVariants]);
        } else if self.tw_standard {
            stages.push(&[TWVariants]);
        }
        Recipe::from_names(&stages)
    }
}

impl FromStr for Options {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Options::preset(s).ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}
