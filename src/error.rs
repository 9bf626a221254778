use hanconv_core::{ConvertError, DictError, ErrorKind};

use crate::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Dict(#[from] DictError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("invalid dictionary name: {0:?}")]
    InvalidDictionaryName(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Dict(e) => e.kind(),
            Error::Convert(e) => e.kind(),
            Error::InvalidDictionaryName(_) => ErrorKind::FileNotFound,
            Error::Settings(_) | Error::UnknownPreset(_) => ErrorKind::Unknown,
        }
    }
}
