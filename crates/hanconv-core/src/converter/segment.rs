use crate::dict::ConversionDict;

/// One step of a maximum-match pass: either a dictionary key and its
/// replacement, or a single unmapped code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Byte offset of `source` in the pass input.
    pub offset: usize,
    pub source: &'a str,
    /// `None` when no key starts at `offset`.
    pub replacement: Option<&'a str>,
}

impl<'a> Segment<'a> {
    pub fn output(&self) -> &'a str {
        self.replacement.unwrap_or(self.source)
    }
}

/// Left-to-right maximum-match segmentation of `text` against `dict`.
pub struct MaxMatch<'a> {
    dict: &'a ConversionDict,
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for MaxMatch<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let (dict, text, offset) = (self.dict, self.text, self.pos);
        if offset >= text.len() {
            return None;
        }

        let (len, replacement) = match dict.lookup(text, offset) {
            Some(m) => (m.len, Some(m.value())),
            None => {
                let width = text[offset..].chars().next().map_or(1, char::len_utf8);
                (width, None)
            }
        };

        self.pos = offset + len;
        Some(Segment {
            offset,
            source: &text[offset..offset + len],
            replacement,
        })
    }
}

pub fn segment<'a>(dict: &'a ConversionDict, text: &'a str) -> MaxMatch<'a> {
    MaxMatch { dict, text, pos: 0 }
}

/// Run one conversion pass: every matched key is replaced by its first
/// candidate, everything else is copied through.
pub fn apply(dict: &ConversionDict, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for seg in segment(dict, text) {
        out.push_str(seg.output());
    }
    out
}
