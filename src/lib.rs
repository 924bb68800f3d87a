//! Code 39 barcode encoder.
//!
//! The pipeline goes from text to bar widths in three steps:
//!
//! 1. an optional [Variant] transform (Mod 43 check symbol, Full ASCII
//!    escaping or both),
//! 2. the core encoder, producing a [CodeString] of wide/narrow flags framed
//!    by the `*` start/stop sentinel,
//! 3. the geometry engine, turning the flags into alternating bar/space
//!    [Segment]s for a canvas or a target height.
//!
//! ```
//! use code39::{encode_mod43, compute_geometry, GeometryConfig, Insets, Target};
//!
//! let code = encode_mod43("123").unwrap();
//! assert_eq!(code.text(), "1236");
//! assert_eq!(code.len(), code39::code39_len!(4));
//!
//! let config = GeometryConfig::new().ratio(2.5).insets(Insets::uniform(4.0));
//! let layout = compute_geometry(&code, Target::Height(40.0), &config).unwrap();
//! assert_eq!(layout.width(), layout.bars_width() + 8.0);
//! ```
//!
//! Painting is left to the caller: iterate [Layout::segments], use
//! [Layout::fill] on a pixel buffer, or, with the `embedded-graphics`
//! feature, draw a [Code39Drawing].

mod tables;
pub mod pattern;
pub mod error;
pub mod encoder;
pub mod variant;
pub mod geometry;
pub mod render;

pub use encoder::CodeString;
pub use error::{Error, Result};
pub use geometry::{
    compute_geometry, default_ratio, set_default_ratio, GeometryConfig, Insets, Layout, Segment,
    Target,
};
pub use pattern::Pattern;
pub use tables::{
    index_of, pattern_of, symbol_at, ALPHABET, ALPHABET_LEN, CHECKSUM_MODULUS, SENTINEL,
};
pub use variant::{ParseVariantError, Variant};

#[cfg(feature = "embedded-graphics")]
pub use render::Code39Drawing;

/// Number of elements of a code string holding `n` symbols: the start
/// pattern, a gap and a pattern per symbol, a gap and the stop pattern.
#[macro_export]
macro_rules! code39_len {
    ($n:expr) => {
        (19 + 10 * ($n))
    };
}

/// Encodes `payload` as standard Code 39.
pub fn encode_plain(payload: &str) -> Result<CodeString> {
    Variant::Plain.encode(payload)
}

/// Encodes `payload` followed by its Mod 43 check symbol.
pub fn encode_mod43(payload: &str) -> Result<CodeString> {
    Variant::Mod43.encode(payload)
}

/// Encodes `payload` with Full ASCII escaping.
pub fn encode_full_ascii(payload: &str) -> Result<CodeString> {
    Variant::FullAscii.encode(payload)
}

/// Encodes `payload` with Full ASCII escaping and a Mod 43 check symbol over
/// the escaped symbols.
pub fn encode_extended_mod43(payload: &str) -> Result<CodeString> {
    Variant::ExtendedMod43.encode(payload)
}

/// Encodes `payload` with the given variant.
pub fn encode(payload: &str, variant: Variant) -> Result<CodeString> {
    variant.encode(payload)
}
