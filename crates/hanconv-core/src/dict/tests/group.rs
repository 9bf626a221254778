use std::sync::Arc;

use crate::dict::{ConversionDict, DictGroup};
use crate::testutil::{dict_of, stage_of};

fn phrases() -> ConversionDict {
    stage_of(&[("头发", "頭髮"), ("发展", "發展")])
}

fn characters() -> ConversionDict {
    stage_of(&[("头", "頭"), ("发", "發 髮"), ("展", "展")])
}

#[test]
fn test_longest_member_wins() {
    let group = DictGroup::new(vec![characters(), phrases()]);
    let m = group.lookup("头发很长", 0).unwrap();
    assert_eq!(m.len, "头发".len());
    assert_eq!(m.value(), "頭髮");
}

#[test]
fn test_tie_goes_to_earlier_member() {
    let a = stage_of(&[("发", "發")]);
    let b = stage_of(&[("发", "髮")]);

    let ab = DictGroup::new(vec![a.clone(), b.clone()]);
    assert_eq!(ab.lookup("发", 0).unwrap().value(), "發");

    let ba = DictGroup::new(vec![b, a]);
    assert_eq!(ba.lookup("发", 0).unwrap().value(), "髮");
}

#[test]
fn test_no_member_matches() {
    let group = DictGroup::new(vec![characters(), phrases()]);
    assert!(group.lookup("abc", 0).is_none());
}

#[test]
fn test_empty_group() {
    let group = DictGroup::new(Vec::new());
    assert!(group.lookup("头发", 0).is_none());
    assert_eq!(group.max_key_len(), 0);
    assert!(group.members().is_empty());
}

#[test]
fn test_nested_group() {
    let inner = ConversionDict::group(vec![stage_of(&[("后", "後")])]);
    let outer = ConversionDict::group(vec![inner, stage_of(&[("后", "后"), ("皇后", "皇后")])]);
    assert_eq!(outer.lookup("后来", 0).unwrap().value(), "後");
    assert_eq!(outer.lookup("皇后", 0).unwrap().value(), "皇后");
    assert_eq!(outer.max_key_len(), "皇后".len());
}

#[test]
fn test_members_share_dictionaries() {
    let shared = Arc::new(dict_of(&[("发", "發")]));
    let g1 = ConversionDict::group(vec![ConversionDict::single(Arc::clone(&shared))]);
    let g2 = ConversionDict::group(vec![ConversionDict::single(Arc::clone(&shared))]);
    assert_eq!(Arc::strong_count(&shared), 3);
    assert_eq!(g1.lookup("发", 0), g2.lookup("发", 0));
}

#[test]
fn test_match_all_prefixes_merges_lengths() {
    let group = DictGroup::new(vec![
        stage_of(&[("发", "發")]),
        stage_of(&[("发", "髮"), ("发展", "發展")]),
    ]);
    let found: Vec<(usize, &str)> = group
        .match_all_prefixes("发展中", 0)
        .iter()
        .map(|m| (m.len, m.value()))
        .collect();
    assert_eq!(found, vec![("发展".len(), "發展"), ("发".len(), "發")]);
}
