use crate::Rgb;
use thiserror::Error;

/// Crate-specific error enum.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The color name is shorter than two characters.
    #[error("The attribute name:{0} is not valid")]
    InvalidName(String),

    /// The hex value is shorter than two characters.
    #[error("The attribute hex:{0} is not valid")]
    InvalidHex(String),

    /// The rgb mapping has no channels.
    #[error("The attribute rgb:{0:?} is not valid")]
    InvalidRgb(Rgb),

    /// A lookup response did not carry a required key.
    #[error("missing field {0} in the lookup response")]
    MissingField(&'static str),

    /// The lookup does not know this color.
    #[error("The color:{0} was not found")]
    NotFound(String),

    /// The output format is not one of `hex` or `rgb`.
    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    /// [std::io::Error]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
