//! Dictionary-driven script conversion.
//!
//! Text is converted by a [`Converter`]: a chain of stages, each of which
//! segments its input by maximum match against a [`ConversionDict`] and
//! replaces every matched key with its first candidate.

pub mod converter;
pub mod dict;
mod error;
#[cfg(test)]
mod testutil;
pub mod trie;

pub use converter::{ConversionChain, ConvertError, Converter, ExplainResult};
pub use dict::{ConversionDict, DictError, DictGroup, Match, TrieDictionary};
pub use error::ErrorKind;
