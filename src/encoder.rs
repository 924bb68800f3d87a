//! Payload to code string conversion.

use core::fmt;

use log::trace;

use crate::error::{Error, Result};
use crate::pattern::Pattern;
use crate::tables::{self, SENTINEL, SENTINEL_PATTERN};

/// The complete flag sequence of an encoded message: start pattern, one
/// narrow gap and the symbol pattern per payload symbol, a narrow gap and
/// the stop pattern. `true` marks a wide element. Even indexes are bars,
/// odd indexes are spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeString {
    text: String,
    bits: Vec<bool>,
}

impl CodeString {
    /// Symbols encoded between the start/stop sentinels, check symbol
    /// included. Never contains the sentinel itself.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Number of elements, always `code39_len!(symbols)`.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of wide elements.
    pub fn wide_count(&self) -> usize {
        self.bits.iter().filter(|&&w| w).count()
    }

    /// Copies the flags into the beginning of `target`.
    ///
    /// # Panics
    ///
    /// Panics if `target` holds fewer than [len](CodeString::len) elements.
    pub fn fill_bits(&self, target: &mut [bool]) {
        assert!(target.len() >= self.bits.len(),
            "target must hold at least {} elements", self.bits.len());
        target[..self.bits.len()].copy_from_slice(&self.bits);
    }
}

impl fmt::Display for CodeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &wide in &self.bits {
            f.write_str(if wide { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CodeString {
    type Item = &'a bool;
    type IntoIter = core::slice::Iter<'a, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter()
    }
}

fn push_pattern(bits: &mut Vec<bool>, pattern: Pattern) {
    bits.extend(pattern);
}

/// Encodes `payload` as plain Code 39. ASCII letters are upper-cased first,
/// every other character must belong to the alphabet and the sentinel is
/// rejected.
pub fn encode(payload: &str) -> Result<CodeString> {
    if payload.is_empty() {
        return Err(Error::EmptyInput);
    }

    let symbols = payload.chars().count();
    let mut text = String::with_capacity(symbols);
    let mut bits = Vec::with_capacity(crate::code39_len!(symbols));
    push_pattern(&mut bits, SENTINEL_PATTERN);

    for (position, c) in payload.chars().enumerate() {
        let c = c.to_ascii_uppercase();
        if c == SENTINEL {
            return Err(Error::ReservedCharacterUsed { position });
        }
        let pattern = tables::pattern_of(c)
            .ok_or(Error::UnsupportedCharacter { character: c, position })?;

        bits.push(false);
        push_pattern(&mut bits, pattern);
        text.push(c);
    }

    bits.push(false);
    push_pattern(&mut bits, SENTINEL_PATTERN);

    trace!("encoded {} symbols into {} elements", symbols, bits.len());
    Ok(CodeString { text, bits })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_single_symbol() {
        let code = encode("A").unwrap();
        assert_eq!(code.to_string(), "010010100".to_owned() + "0100001001" + "0010010100");
        assert_eq!(code.text(), "A");
    }

    #[test]
    fn test_encode_length() {
        for payload in ["0", "HELLO", "CODE 39-$/+%.", "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ"] {
            let code = encode(payload).unwrap();
            assert_eq!(code.len(), crate::code39_len!(payload.len()));
            assert_eq!(code.len(), 19 + 10 * payload.len());
        }
    }

    #[test]
    fn test_encode_uppercases_letters() {
        assert_eq!(encode("abc").unwrap(), encode("ABC").unwrap());
    }

    #[test]
    fn test_encode_structure() {
        let code = encode("12").unwrap();
        let bits = code.bits();
        // gaps between symbols are narrow spaces
        assert!(!bits[9]);
        assert!(!bits[19]);
        assert!(!bits[29]);
        assert_eq!(&bits[..9], &bits[30..]);
        assert_eq!(code.wide_count(), 3 * 4);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(""), Err(Error::EmptyInput));
    }

    #[test]
    fn test_encode_reserved() {
        assert_eq!(encode("AB*C"), Err(Error::ReservedCharacterUsed { position: 2 }));
    }

    #[test]
    fn test_encode_unsupported() {
        assert_eq!(encode("AB#"), Err(Error::UnsupportedCharacter { character: '#', position: 2 }));
        assert_eq!(encode("é"), Err(Error::UnsupportedCharacter { character: 'é', position: 0 }));
    }

    #[test]
    fn test_fill_bits() {
        let code = encode("X").unwrap();
        let mut storage = [true; crate::code39_len!(1) + 2];
        code.fill_bits(&mut storage);
        assert_eq!(&storage[..code.len()], code.bits());
        assert!(storage[code.len()]);
    }

    #[test]
    #[should_panic(expected = "target must hold at least 29 elements")]
    fn test_fill_bits_short_target() {
        let code = encode("X").unwrap();
        let mut storage = [false; 28];
        code.fill_bits(&mut storage);
    }

    #[test]
    fn test_text_has_no_sentinel() {
        let code = crate::Variant::Mod43.encode("123").unwrap();
        assert_eq!(code.text(), "1236");
        assert!(!code.text().contains(SENTINEL));
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(encode("IDEMPOTENT").unwrap(), encode("IDEMPOTENT").unwrap());
    }
}
