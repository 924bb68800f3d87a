use crate::pattern::Pattern;

/// Number of symbols in the Code 39 alphabet, sentinel included.
pub const ALPHABET_LEN: usize = 44;
/// Modulus of the Mod 43 check symbol (alphabet size without the sentinel).
pub const CHECKSUM_MODULUS: usize = ALPHABET_LEN - 1;
/// Start/stop sentinel, reserved for framing.
pub const SENTINEL: char = '*';

/// Code 39 symbols ordered by value. The position of a symbol is the value
/// summed by the Mod 43 checksum.
pub const ALPHABET: [u8; ALPHABET_LEN] = *b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%*";

// bar-space-bar-space-bar-space-bar-space-bar, first element in the MSB,
// 1 = wide
const PATTERNS: [u16; ALPHABET_LEN] = [
    0b000110100, // 0
    0b100100001, // 1
    0b001100001, // 2
    0b101100000, // 3
    0b000110001, // 4
    0b100110000, // 5
    0b001110000, // 6
    0b000100101, // 7
    0b100100100, // 8
    0b001100100, // 9
    0b100001001, // A
    0b001001001, // B
    0b101001000, // C
    0b000011001, // D
    0b100011000, // E
    0b001011000, // F
    0b000001101, // G
    0b100001100, // H
    0b001001100, // I
    0b000011100, // J
    0b100000011, // K
    0b001000011, // L
    0b101000010, // M
    0b000010011, // N
    0b100010010, // O
    0b001010010, // P
    0b000000111, // Q
    0b100000110, // R
    0b001000110, // S
    0b000010110, // T
    0b110000001, // U
    0b011000001, // V
    0b111000000, // W
    0b010010001, // X
    0b110010000, // Y
    0b011010000, // Z
    0b010000101, // -
    0b110000100, // .
    0b011000100, // space
    0b010101000, // $
    0b010100010, // /
    0b010001010, // +
    0b000101010, // %
    0b010010100, // *
];

/// Pattern of the start/stop sentinel.
pub const SENTINEL_PATTERN: Pattern = Pattern::new(PATTERNS[ALPHABET_LEN - 1]);

/// Returns the value (zero-based position) of `symbol` in the alphabet.
pub fn index_of(symbol: char) -> Option<usize> {
    if !symbol.is_ascii() {
        return None;
    }
    let b = symbol as u8;
    ALPHABET.iter().position(|&s| s == b)
}

/// Returns the bar/space pattern of `symbol`.
pub fn pattern_of(symbol: char) -> Option<Pattern> {
    index_of(symbol).map(|i| Pattern::new(PATTERNS[i]))
}

/// Returns the symbol with the given value.
#[inline]
pub fn symbol_at(index: usize) -> Option<char> {
    ALPHABET.get(index).map(|&b| b as char)
}
