use crate::domain::Range;

/// Trait for mapping between host offsets and the byte offsets used by the engine
pub trait OffsetMapper {
    /// Convert a host offset to a byte offset in the document
    fn offset_to_byte(&self, offset: usize) -> Option<usize>;

    /// Convert a byte offset to a host offset
    fn byte_to_offset(&self, offset: usize) -> Option<usize>;

    /// Convert a host `[start, end)` pair to a byte Range
    fn offsets_to_byte_range(&self, start: usize, end: usize) -> Option<Range> {
        let range = Range::new(self.offset_to_byte(start)?, self.offset_to_byte(end)?);
        (range.start <= range.end).then_some(range)
    }

    /// Convert a byte Range to a host `(start, end)` pair
    fn byte_range_to_offsets(&self, range: Range) -> Option<(usize, usize)> {
        Some((self.byte_to_offset(range.start)?, self.byte_to_offset(range.end)?))
    }
}

/// Maps Unicode scalar value offsets, as most editors count "characters"
pub struct CharOffsetMapper<'a> {
    text: &'a str,
}

impl<'a> CharOffsetMapper<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl OffsetMapper for CharOffsetMapper<'_> {
    fn offset_to_byte(&self, offset: usize) -> Option<usize> {
        self.text
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(std::iter::once(self.text.len()))
            .nth(offset)
    }

    fn byte_to_offset(&self, offset: usize) -> Option<usize> {
        if !self.text.is_char_boundary(offset) {
            return None;
        }
        self.text.get(..offset).map(|prefix| prefix.chars().count())
    }
}

/// Maps UTF-16 code unit offsets, as used by LSP and JavaScript-based hosts
///
/// Offsets that point into the middle of a surrogate pair are rejected.
pub struct Utf16OffsetMapper<'a> {
    text: &'a str,
}

impl<'a> Utf16OffsetMapper<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl OffsetMapper for Utf16OffsetMapper<'_> {
    fn offset_to_byte(&self, offset: usize) -> Option<usize> {
        let mut units = 0;
        for (byte, ch) in self.text.char_indices() {
            if units == offset {
                return Some(byte);
            }
            if units > offset {
                return None;
            }
            units += ch.len_utf16();
        }
        (units == offset).then_some(self.text.len())
    }

    fn byte_to_offset(&self, offset: usize) -> Option<usize> {
        if !self.text.is_char_boundary(offset) {
            return None;
        }
        self.text
            .get(..offset)
            .map(|prefix| prefix.encode_utf16().count())
    }
}
