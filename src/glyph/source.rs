//! Glyph resolution: (character, font code) -> pixel bitmap.
//!
//! Resolution order: the project's font table first, the embedded reference
//! font second, the blank 5-column glyph last. Resolution never fails —
//! real device content carries stray bytes and must still render.

use std::collections::HashMap;

use super::builtin::{columns, BUILTIN_HEIGHT, BUILTIN_WIDTH};
use crate::model::{Font, FontCharacter};

/// A resolved glyph: either a row of the project's font table or an
/// embedded reference glyph.
///
/// Both shapes expose the same pixel view so the rasterizer never branches
/// on the source.
#[derive(Debug, Clone, Copy)]
pub enum Glyph<'a> {
    /// Bitmap from a project font.
    Table(&'a FontCharacter),
    /// Column bytes from the embedded reference font (LSB = top row).
    Builtin([u8; 5]),
}

impl Glyph<'_> {
    /// Advance width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        match self {
            Self::Table(ch) => ch.width(),
            Self::Builtin(_) => BUILTIN_WIDTH,
        }
    }

    /// Height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        match self {
            Self::Table(ch) => ch.height(),
            Self::Builtin(_) => BUILTIN_HEIGHT,
        }
    }

    /// Whether the pixel at (x, y) is lit. Out-of-bounds reads are unlit.
    #[inline]
    pub fn is_set(&self, x: u16, y: u16) -> bool {
        match self {
            Self::Table(ch) => ch.pixel(x, y),
            Self::Builtin(cols) => {
                x < BUILTIN_WIDTH && y < 8 && cols[x as usize] & (1 << y) != 0
            }
        }
    }
}

/// Resolves characters against a project's font table with builtin
/// fallback.
///
/// Stateless apart from the borrowed table; a single source may serve any
/// number of render targets concurrently.
#[derive(Debug, Clone, Copy)]
pub struct GlyphSource<'a> {
    fonts: &'a HashMap<char, Font>,
}

impl<'a> GlyphSource<'a> {
    /// Create a source over a project's font table.
    pub const fn new(fonts: &'a HashMap<char, Font>) -> Self {
        Self { fonts }
    }

    /// Resolve a character under a font code.
    ///
    /// Falls back to the embedded reference font when the code is unknown
    /// or the font does not define the character, and to the blank glyph
    /// when the reference font does not either. Always 5 columns wide on
    /// the fallback paths.
    pub fn resolve(&self, ch: char, code: char) -> Glyph<'a> {
        if let Some(found) = self.fonts.get(&code).and_then(|font| font.character(ch)) {
            return Glyph::Table(found);
        }
        let cols = columns(ch).unwrap_or([0; 5]);
        Glyph::Builtin(cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_FONT_CODE;

    fn table_with_wide_a() -> HashMap<char, Font> {
        let mut font = Font::new("Medium", 14);
        let mut ch = FontCharacter::new('A', 8, 14);
        ch.set_pixel(0, 0, true);
        font.insert(ch);

        let mut fonts = HashMap::new();
        fonts.insert('2', font);
        fonts
    }

    #[test]
    fn test_font_table_hit() {
        let fonts = table_with_wide_a();
        let source = GlyphSource::new(&fonts);

        let glyph = source.resolve('A', '2');
        assert_eq!(glyph.width(), 8);
        assert_eq!(glyph.height(), 14);
        assert!(glyph.is_set(0, 0));
        assert!(!glyph.is_set(1, 0));
    }

    #[test]
    fn test_fallback_on_unknown_code() {
        let fonts = table_with_wide_a();
        let source = GlyphSource::new(&fonts);

        // Code 'Z' is not in the table; 'A' resolves via the reference font.
        let glyph = source.resolve('A', 'Z');
        assert_eq!(glyph.width(), 5);
        assert_eq!(glyph.height(), 7);
    }

    #[test]
    fn test_fallback_on_missing_character() {
        let fonts = table_with_wide_a();
        let source = GlyphSource::new(&fonts);

        // Font '2' exists but has no 'B'.
        let glyph = source.resolve('B', '2');
        assert_eq!(glyph.width(), 5);
    }

    #[test]
    fn test_every_printable_ascii_resolves_without_fonts() {
        let fonts = HashMap::new();
        let source = GlyphSource::new(&fonts);

        for code in 0x20u8..=0x7e {
            let glyph = source.resolve(code as char, DEFAULT_FONT_CODE);
            assert_eq!(glyph.width(), 5);
            assert_eq!(glyph.height(), 7);
        }
    }

    #[test]
    fn test_unknown_character_is_blank() {
        let fonts = HashMap::new();
        let source = GlyphSource::new(&fonts);

        let glyph = source.resolve('語', DEFAULT_FONT_CODE);
        assert_eq!(glyph.width(), 5);
        for x in 0..5 {
            for y in 0..7 {
                assert!(!glyph.is_set(x, y));
            }
        }
    }

    #[test]
    fn test_out_of_bounds_reads_unlit() {
        let fonts = HashMap::new();
        let source = GlyphSource::new(&fonts);

        let glyph = source.resolve('H', DEFAULT_FONT_CODE);
        assert!(!glyph.is_set(5, 0));
        assert!(!glyph.is_set(0, 7));
    }
}
