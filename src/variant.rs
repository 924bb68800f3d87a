//! Mod 43 check symbol and Full ASCII escaping.

use core::{fmt, str::FromStr};

use log::trace;

use crate::encoder::{self, CodeString};
use crate::error::{Error, Result};
use crate::tables::{self, ALPHABET, CHECKSUM_MODULUS, SENTINEL};

/// Code 39 flavours. The variant is an input of the pipeline only, nothing
/// about it is stored in the resulting [CodeString] besides its symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Variant {
    /// Standard Code 39.
    #[default]
    Plain,
    /// Code 39 followed by a Mod 43 check symbol.
    Mod43,
    /// Full ASCII Code 39, lowercase and punctuation escaped with `$ % / +`.
    FullAscii,
    /// Full ASCII escaping, then a Mod 43 check symbol over the escaped text.
    ExtendedMod43,
}

impl Variant {
    pub const ALL: [Variant; 4] =
        [Variant::Plain, Variant::Mod43, Variant::FullAscii, Variant::ExtendedMod43];

    pub const fn name(&self) -> &'static str {
        match self {
            Variant::Plain => "plain",
            Variant::Mod43 => "mod43",
            Variant::FullAscii => "full-ascii",
            Variant::ExtendedMod43 => "extended-mod43",
        }
    }

    /// Transforms `payload` into the symbols handed to the core encoder.
    pub fn prepare(&self, payload: &str) -> Result<String> {
        if payload.is_empty() {
            return Err(Error::EmptyInput);
        }

        match self {
            Variant::Plain => Ok(payload.to_owned()),
            Variant::Mod43 => apply_mod43(payload),
            Variant::FullAscii => escape_full_ascii(payload),
            Variant::ExtendedMod43 => apply_mod43(&escape_full_ascii(payload)?),
        }
    }

    /// Runs the whole pipeline of this variant.
    pub fn encode(&self, payload: &str) -> Result<CodeString> {
        let symbols = self.prepare(payload)?;
        trace!("{} variant: {:?} -> {:?}", self.name(), payload, symbols);
        encoder::encode(&symbols)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [Variant] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown Code 39 variant {0:?}")]
pub struct ParseVariantError(String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL.into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseVariantError(s.to_owned()))
    }
}

/// Computes the Mod 43 check symbol of `symbols` (already upper-cased).
pub fn mod43_check_symbol(symbols: &str) -> Result<char> {
    let mut sum = 0usize;
    for (position, c) in symbols.chars().enumerate() {
        if c == SENTINEL {
            return Err(Error::ReservedCharacterUsed { position });
        }
        sum += tables::index_of(c).ok_or(Error::UnsupportedCharacter { character: c, position })?;
    }

    // CHECKSUM_MODULUS < ALPHABET.len(), the sentinel is never a check symbol
    Ok(ALPHABET[sum % CHECKSUM_MODULUS] as char)
}

/// Upper-cases `payload` and appends its Mod 43 check symbol.
pub fn apply_mod43(payload: &str) -> Result<String> {
    if payload.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut out = payload.to_ascii_uppercase();
    let check = mod43_check_symbol(&out)?;
    out.push(check);
    Ok(out)
}

/// Two-symbol Full ASCII sequence of a character outside the alphabet.
fn escape(c: char) -> Option<[char; 2]> {
    let seq = match c {
        'a'..='z' => ['+', c.to_ascii_uppercase()],
        '!' => ['/', 'A'],
        '"' => ['/', 'B'],
        '#' => ['/', 'C'],
        '&' => ['/', 'F'],
        '\'' => ['/', 'G'],
        '(' => ['/', 'H'],
        ')' => ['/', 'I'],
        '*' => ['/', 'J'],
        ',' => ['/', 'L'],
        ':' => ['/', 'Z'],
        ';' => ['%', 'F'],
        '<' => ['%', 'G'],
        '=' => ['%', 'H'],
        '>' => ['%', 'I'],
        '?' => ['%', 'J'],
        '@' => ['%', 'V'],
        '[' => ['%', 'K'],
        '\\' => ['%', 'L'],
        ']' => ['%', 'M'],
        '^' => ['%', 'N'],
        '_' => ['%', 'O'],
        '`' => ['%', 'W'],
        '{' => ['%', 'P'],
        '|' => ['%', 'Q'],
        '}' => ['%', 'R'],
        '~' => ['%', 'S'],
        '\t' => ['$', 'I'],
        '\n' => ['$', 'M'],
        _ => return None,
    };
    Some(seq)
}

/// Expands `payload` to Code 39 symbols with the Full ASCII escape table.
/// Alphabet symbols other than the sentinel are kept as is.
pub fn escape_full_ascii(payload: &str) -> Result<String> {
    if payload.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut out = String::with_capacity(payload.len() * 2);
    for (position, c) in payload.chars().enumerate() {
        if c != SENTINEL && tables::index_of(c).is_some() {
            out.push(c);
        } else if let Some(seq) = escape(c) {
            out.extend(seq);
        } else {
            return Err(Error::UnsupportedCharacter { character: c, position });
        }
    }

    Ok(out)
}
