use serde::Serialize;

use super::segment::{segment, Segment};
use super::ConversionChain;

/// Stage-by-stage trace of a chain conversion.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub output: String,
    pub stages: Vec<ExplainStage>,
}

#[derive(Debug, Serialize)]
pub struct ExplainStage {
    pub index: usize,
    pub input: String,
    pub output: String,
    pub segments: Vec<ExplainSegment>,
}

impl ExplainStage {
    /// Segments whose text was replaced by a dictionary value.
    pub fn replaced(&self) -> impl Iterator<Item = &ExplainSegment> {
        self.segments.iter().filter(|s| s.replacement.is_some())
    }
}

#[derive(Debug, Serialize)]
pub struct ExplainSegment {
    pub offset: usize,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

impl From<Segment<'_>> for ExplainSegment {
    fn from(s: Segment<'_>) -> Self {
        Self {
            offset: s.offset,
            source: s.source.to_string(),
            replacement: s.replacement.map(str::to_string),
        }
    }
}

pub fn explain(chain: &ConversionChain, text: &str) -> ExplainResult {
    let mut stages = Vec::with_capacity(chain.len());
    let mut current = text.to_string();
    for (index, stage) in chain.stages().iter().enumerate() {
        let mut output = String::with_capacity(current.len());
        let mut segments = Vec::new();
        for seg in segment(stage, &current) {
            output.push_str(seg.output());
            segments.push(ExplainSegment::from(seg));
        }
        stages.push(ExplainStage {
            index,
            input: std::mem::replace(&mut current, output.clone()),
            output,
            segments,
        });
    }
    ExplainResult {
        input: text.to_string(),
        output: current,
        stages,
    }
}
