//! Text conversion via maximum-match segmentation.
//!
//! Each stage of a `ConversionChain` runs one left-to-right pass that
//! replaces the longest dictionary key at every position with its first
//! candidate. A `Converter` is a named, immutable chain.

mod chain;
pub mod explain;
pub mod segment;

#[cfg(test)]
mod tests;

use tracing::debug_span;

use crate::ErrorKind;

pub use chain::ConversionChain;
pub use explain::{explain, ExplainResult};
pub use segment::{apply, Segment};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
        }
    }
}

/// A named conversion (e.g. "s2twp") over a fixed chain.
///
/// Immutable and `Send + Sync`; `convert` may be called concurrently.
#[derive(Clone)]
pub struct Converter {
    name: String,
    chain: ConversionChain,
}

impl Converter {
    pub fn new(name: impl Into<String>, chain: ConversionChain) -> Self {
        Self {
            name: name.into(),
            chain,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chain(&self) -> &ConversionChain {
        &self.chain
    }

    pub fn convert(&self, text: &str) -> String {
        let _span = debug_span!("convert", name = %self.name).entered();
        self.chain.convert(text)
    }

    /// Convert raw bytes; the whole call fails if they are not UTF-8.
    pub fn convert_bytes(&self, input: &[u8]) -> Result<String, ConvertError> {
        let text = std::str::from_utf8(input).map_err(|e| ConvertError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;
        Ok(self.convert(text))
    }

    pub fn explain(&self, text: &str) -> ExplainResult {
        explain(&self.chain, text)
    }
}
