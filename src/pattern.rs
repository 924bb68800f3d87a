use core::iter;

/// Number of elements (5 bars, 4 spaces) in a symbol pattern.
pub const PATTERN_LEN: u8 = 9;

/// Wide/narrow flags of one Code 39 symbol, first element in the most
/// significant of the nine low bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u16);

impl Pattern {
    pub const fn new(bits: u16) -> Self {
        debug_assert!(bits < (1 << PATTERN_LEN), "pattern is too wide");

        Self(bits)
    }

    #[inline]
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Number of wide elements, 3 for every standard symbol.
    #[inline]
    pub const fn wide_count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Returns whether the element at `index` (0 = leading bar) is wide.
    #[inline]
    pub const fn is_wide(&self, index: u8) -> bool {
        debug_assert!(index < PATTERN_LEN);
        (self.0 >> (PATTERN_LEN - 1 - index)) & 1 != 0
    }
}

impl iter::IntoIterator for Pattern {
    type Item = bool;
    type IntoIter = Elements;

    fn into_iter(self) -> Self::IntoIter {
        Elements { value: self.0, count: PATTERN_LEN as u32 }
    }
}

/// Iterator over the elements of a [Pattern], `true` for wide.
#[derive(Debug, Clone)]
pub struct Elements {
    value: u16,
    count: u32,
}

impl iter::Iterator for Elements {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.count > 0 {
            self.count -= 1;
            Some((self.value >> self.count) & 1 != 0)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count as usize;
        (count, Some(count))
    }
}

impl iter::DoubleEndedIterator for Elements {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.count > 0 {
            let bit = (self.value & 1) != 0;
            self.value >>= 1;
            self.count -= 1;
            Some(bit)
        } else {
            None
        }
    }
}

impl iter::ExactSizeIterator for Elements {}
impl iter::FusedIterator for Elements {}
