//! Text rasterizer.
//!
//! Blits a text string onto a frame buffer, one glyph at a time, resolving
//! each character through a [`GlyphSource`] with the font code at the same
//! index. The rasterizer is a pure function of its inputs and never errors:
//! unknown characters degrade to the fallback glyph, pixels landing outside
//! the section are dropped.

use super::frame::FrameBuffer;
use crate::glyph::GlyphSource;
use crate::model::DEFAULT_FONT_CODE;

/// Line separator control character: recognized, never rendered, zero
/// advance.
pub const LINE_SEPARATOR: char = '|';

/// Alternate line separator accepted in legacy content.
pub const LINE_SEPARATOR_ALT: char = '¦';

/// Column spacer control character: no glyph, exactly one column of
/// advance.
pub const COLUMN_SPACER: char = '²';

/// Columns of spacing inserted after every rendered glyph.
const GLYPH_SPACING: i32 = 1;

/// Rasterize `text` onto `frame`, starting the horizontal cursor at
/// `origin_x`.
///
/// `fonts` carries one font code per character of `text`; where it is
/// shorter, [`DEFAULT_FONT_CODE`] applies. A negative `origin_x` is how
/// scrolling renders text partially (or fully) left of the viewport.
///
/// Each glyph is vertically centered with integer division, leaving the
/// larger half of any odd spare space below the glyph. Every lit glyph
/// pixel inside the frame bounds is written; everything else is dropped
/// without error.
///
/// Returns the total rendered width in columns — the final cursor position
/// relative to `origin_x` — which scroll logic uses to detect full exit
/// from the viewport. Empty text renders nothing and returns 0.
pub fn render_text(
    frame: &mut FrameBuffer,
    text: &str,
    fonts: &str,
    glyphs: &GlyphSource<'_>,
    origin_x: i32,
) -> i32 {
    let codes: Vec<char> = fonts.chars().collect();
    let frame_width = i32::from(frame.width());
    let frame_height = i32::from(frame.height());

    let mut cursor = origin_x;

    for (index, ch) in text.chars().enumerate() {
        match ch {
            LINE_SEPARATOR | LINE_SEPARATOR_ALT => continue,
            COLUMN_SPACER => {
                cursor += 1;
                continue;
            }
            _ => {}
        }

        let code = codes.get(index).copied().unwrap_or(DEFAULT_FONT_CODE);
        let glyph = glyphs.resolve(ch, code);

        let y_start = (frame_height - i32::from(glyph.height())) / 2;

        for gy in 0..glyph.height() {
            for gx in 0..glyph.width() {
                if !glyph.is_set(gx, gy) {
                    continue;
                }
                let px = cursor + i32::from(gx);
                let py = y_start + i32::from(gy);
                if (0..frame_width).contains(&px) && (0..frame_height).contains(&py) {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    frame.set(px as u16, py as u16, true);
                }
            }
        }

        cursor += i32::from(glyph.width()) + GLYPH_SPACING;
    }

    cursor - origin_x
}
