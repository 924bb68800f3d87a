use core::iter;

/// One bar or space of the rendered barcode.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// `true` for a bar (drawn), `false` for a space.
    pub is_bar: bool,
    pub width: f64,
}

/// Lazily turns code string elements into [Segment]s. Elements alternate
/// between bars and spaces, starting with a bar.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    elements: &'a [bool],
    index: usize,
    narrow: f64,
    wide: f64,
}

impl<'a> Segments<'a> {
    pub fn new(elements: &'a [bool], narrow: f64, wide: f64) -> Self {
        Self { elements, index: 0, narrow, wide }
    }

    /// Width in narrow units of `elements` at the given ratio.
    pub fn units(elements: &[bool], ratio: f64) -> f64 {
        elements.iter().map(|&wide| if wide { ratio } else { 1.0 }).sum()
    }
}

impl<'a> iter::Iterator for Segments<'a> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        let (&wide, rest) = self.elements.split_first()?;
        self.elements = rest;

        let segment = Segment {
            is_bar: self.index % 2 == 0,
            width: if wide { self.wide } else { self.narrow },
        };
        self.index += 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.elements.len();
        (count, Some(count))
    }
}

impl<'a> ExactSizeIterator for Segments<'a> {}
impl<'a> iter::FusedIterator for Segments<'a> {}
