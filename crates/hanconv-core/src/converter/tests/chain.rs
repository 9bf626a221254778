use crate::converter::{ConversionChain, Converter};
use crate::dict::ConversionDict;
use crate::testutil::{s2t_stages, stage_of};

#[test]
fn test_empty_chain_is_identity() {
    let conv = Converter::new("noop", ConversionChain::default());
    assert!(conv.chain().is_empty());
    assert_eq!(conv.convert("学习语言"), "学习语言");
    assert!(conv.explain("abc").stages.is_empty());
}

#[test]
fn test_stages_see_previous_output() {
    let first = stage_of(&[("a", "b")]);
    let second = stage_of(&[("b", "c")]);
    let chain = ConversionChain::build([first, second]);
    assert_eq!(chain.convert("ab"), "cc");
}

#[test]
fn test_stage_order_matters() {
    let (phrases, characters) = s2t_stages();

    let phrase_first = ConversionChain::build([phrases.clone(), characters.clone()]);
    assert_eq!(phrase_first.convert("头发"), "頭髮");

    // characters first leaves nothing for the phrase stage to match
    let chars_first = ConversionChain::build([characters, phrases]);
    assert_eq!(chars_first.convert("头发"), "頭發");
}

#[test]
fn test_group_stage() {
    let (phrases, characters) = s2t_stages();
    let group = ConversionDict::group(vec![phrases, characters]);
    let chain = ConversionChain::build([group]);
    assert_eq!(chain.convert("学习语言"), "學習語言");
    assert_eq!(chain.convert("头发"), "頭髮");
}

#[test]
fn test_group_tie_break_in_chain() {
    let a = stage_of(&[("发", "發")]);
    let b = stage_of(&[("发", "髮")]);
    let ab = ConversionChain::build([ConversionDict::group(vec![a.clone(), b.clone()])]);
    let ba = ConversionChain::build([ConversionDict::group(vec![b, a])]);
    assert_eq!(ab.convert("发"), "發");
    assert_eq!(ba.convert("发"), "髮");
}

#[test]
fn test_nested_group() {
    let inner = ConversionDict::group(vec![stage_of(&[("x", "y")]), stage_of(&[("xy", "z")])]);
    let outer = ConversionDict::group(vec![inner, stage_of(&[("q", "r")])]);
    assert_eq!(outer.max_key_len(), 2);
    let chain = ConversionChain::build([outer]);
    assert_eq!(chain.convert("xyxq"), "zyr");
}
