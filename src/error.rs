//! Error types returned by the encoding and geometry stages.

use thiserror::Error;

/// Every failure of the encoding pipeline. Stages abort on the first error,
/// no partial code string or geometry is ever returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The payload is empty.
    #[error("empty payload")]
    EmptyInput,

    /// A character has no Code 39 representation in the selected variant.
    #[error("unsupported character {character:?} at position {position}")]
    UnsupportedCharacter { character: char, position: usize },

    /// The payload contains the start/stop sentinel `*`.
    #[error("reserved start/stop character '*' at position {position}")]
    ReservedCharacterUsed { position: usize },

    /// Canvas size, target height or the area left after insets is not
    /// strictly positive.
    #[error("invalid geometry target: {0}")]
    InvalidGeometryTarget(&'static str),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
