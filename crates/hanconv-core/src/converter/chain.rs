use tracing::{debug, debug_span};

use crate::dict::ConversionDict;

use super::segment;

/// An ordered pipeline of conversion stages.
///
/// Stage `i + 1` sees exactly the output of stage `i`. An empty chain is the
/// identity conversion.
#[derive(Clone, Default)]
pub struct ConversionChain {
    stages: Vec<ConversionDict>,
}

impl ConversionChain {
    pub fn build(stages: impl IntoIterator<Item = ConversionDict>) -> Self {
        let stages: Vec<ConversionDict> = stages.into_iter().collect();
        debug!(stages = stages.len(), "built conversion chain");
        Self { stages }
    }

    pub fn stages(&self) -> &[ConversionDict] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn convert(&self, text: &str) -> String {
        let _span = debug_span!("chain_convert", stages = self.stages.len(), bytes = text.len())
            .entered();
        let mut current = text.to_string();
        for stage in &self.stages {
            current = segment::apply(stage, &current);
        }
        current
    }
}
