//! Glyph resolution with an embedded reference font.
//!
//! Turns (character, font code) pairs into pixel bitmaps. Project fonts win
//! when they define the character; everything else falls back to the
//! built-in 5x7 font shipped with every sign controller.

mod builtin;
mod source;

pub use builtin::{columns, BUILTIN_HEIGHT, BUILTIN_WIDTH};
pub use source::{Glyph, GlyphSource};
