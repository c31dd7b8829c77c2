//! Frame-sequence recorder for encoding collaborators.
//!
//! GIF/video export lives outside this crate; what the encoder needs is an
//! ordered sequence of (frame, duration) pairs. The recorder produces that
//! sequence deterministically, without a clock, by unrolling an animation.

use std::time::Duration;

use crate::glyph::GlyphSource;
use crate::model::{Message, Section};
use crate::render::{render_text, FrameBuffer};

/// Duration used for a header-only fallback frame.
const HEADER_ONLY_DURATION: Duration = Duration::from_millis(3000);

/// One recorded frame and how long it stays up.
#[derive(Debug, Clone)]
pub struct Recorded {
    /// The rendered frame.
    pub frame: FrameBuffer,
    /// Display duration for this frame.
    pub duration: Duration,
}

/// Unroll a message's alternance cycle into frames.
///
/// One frame per non-empty alternance, header prefixed, each lasting the
/// alternance's duration (deciseconds, zero clamped to one). A message with
/// only a header yields a single 3-second frame; a fully empty message
/// yields an empty sequence.
pub fn record_cycle(
    message: &Message,
    glyphs: &GlyphSource<'_>,
    section: Section,
) -> Vec<Recorded> {
    let mut frames = Vec::new();

    for alt in &message.alternances {
        if alt.is_empty() {
            continue;
        }
        let (text, fonts) =
            super::scheduler::join_header(&message.header, &message.header_fonts, &alt.text, &alt.fonts);

        let mut frame = FrameBuffer::new(section.width, section.height);
        render_text(&mut frame, &text, &fonts, glyphs, 0);
        frames.push(Recorded {
            frame,
            duration: Duration::from_millis(100) * u32::from(alt.duration_decis.max(1)),
        });
    }

    if frames.is_empty() && !message.header.is_empty() {
        let mut frame = FrameBuffer::new(section.width, section.height);
        render_text(&mut frame, &message.header, &message.header_fonts, glyphs, 0);
        frames.push(Recorded {
            frame,
            duration: HEADER_ONLY_DURATION,
        });
    }

    frames
}

/// Unroll one full scroll pass into frames.
///
/// Frames run from the in-place position through full exit and back to the
/// wrap point, one column per frame, each lasting `step`.
pub fn record_scroll(
    text: &str,
    fonts: &str,
    glyphs: &GlyphSource<'_>,
    section: Section,
    step: Duration,
) -> Vec<Recorded> {
    let mut probe = FrameBuffer::new(section.width, section.height);
    let width = render_text(&mut probe, text, fonts, glyphs, 0);

    let last_offset = width + i32::from(section.width);
    let mut frames = Vec::new();

    for offset in 0..=last_offset {
        let mut frame = FrameBuffer::new(section.width, section.height);
        render_text(&mut frame, text, fonts, glyphs, -offset);
        frames.push(Recorded {
            frame,
            duration: step,
        });
    }

    frames
}
