use proptest::prelude::*;

use crate::converter::{apply, ConversionChain};
use crate::testutil::{s2t_stages, stage_of};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn unmapped_text_is_unchanged(text in "[a-z0-9 ,.!?\n]{0,64}") {
        let (phrases, characters) = s2t_stages();
        let chain = ConversionChain::build([phrases, characters]);
        prop_assert_eq!(chain.convert(&text), text);
    }

    #[test]
    fn directional_chain_is_idempotent(text in "[语言头发学习干燥后展abc ]{0,32}") {
        // no replacement value is itself a key of either stage
        let (phrases, characters) = s2t_stages();
        let chain = ConversionChain::build([phrases, characters]);
        let once = chain.convert(&text);
        let twice = chain.convert(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn chain_is_composition_of_stages(text in "[abcd]{0,32}") {
        let first = stage_of(&[("a", "b"), ("cd", "x")]);
        let second = stage_of(&[("b", "cd"), ("x", "a")]);
        let chain = ConversionChain::build([first.clone(), second.clone()]);
        let manual = apply(&second, &apply(&first, &text));
        prop_assert_eq!(chain.convert(&text), manual);
    }

    #[test]
    fn output_keeps_unmatched_char_count(text in "\\PC{0,32}") {
        let stage = stage_of(&[("\u{4e00}", "\u{58f9}")]);
        let out = apply(&stage, &text);
        prop_assert_eq!(out.chars().count(), text.chars().count());
    }
}
