//! Pixel rasterization for LED display sections.
//!
//! A [`FrameBuffer`] holds the lit/unlit state of one section; the
//! [`render_text`] rasterizer fills it from text and font codes. Bimode
//! displays are rendered by invoking the engine once per section with that
//! section's own frame — the engine is single-section and stateless.

mod engine;
mod frame;

pub use engine::{render_text, COLUMN_SPACER, LINE_SEPARATOR, LINE_SEPARATOR_ALT};
pub use frame::FrameBuffer;
