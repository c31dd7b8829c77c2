//! # Dotsign
//!
//! A deterministic codec and LED-matrix animation engine for destination
//! signs ("girouettes").
//!
//! Dotsign turns the legacy line-oriented project format used by LED
//! destination-sign tooling into an in-memory model, rasterizes message text
//! onto simulated LED sections, and drives the timed animations real signs
//! perform: static display, wrap-around left scrolling, blinking, and
//! duration-driven alternance cycling.
//!
//! ## Core Concepts
//!
//! - **Tolerant reader, strict writer**: the project-file parser accepts the
//!   variable padding different producers emit; the serializer always writes
//!   one canonical shape.
//! - **Pure rasterization**: [`render_text`] is a function of its explicit
//!   inputs — text, font codes, glyph source, origin — and blits into a
//!   plain [`FrameBuffer`] of lit/unlit cells.
//! - **Deadline-driven animation**: an [`Animator`] never owns a thread or
//!   loop; the host polls it and it fires exactly when its deadline passes.
//!
//! ## Example
//!
//! ```rust,ignore
//! use dotsign::{FrameBuffer, GlyphSource, render_text};
//!
//! let fonts = std::collections::HashMap::new();
//! let glyphs = GlyphSource::new(&fonts);
//! let mut frame = FrameBuffer::new(84, 16);
//!
//! let width = render_text(&mut frame, "CENTRE-VILLE", "", &glyphs, 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod anim;
pub mod codec;
pub mod error;
pub mod glyph;
pub mod model;
pub mod render;

// Re-exports for convenience
pub use anim::{Animator, Metronome, Recorded, Tick};
pub use error::{Error, Result};
pub use glyph::{Glyph, GlyphSource};
pub use model::{
    Alternance, AnimationMode, ColorEntry, DisplayConfig, DisplayFlags, Font, FontCharacter,
    Message, Palette, Project, Rgb, Section,
};
pub use render::{render_text, FrameBuffer};
