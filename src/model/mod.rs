//! Canonical in-memory entities for destination-sign projects.
//!
//! The tree is strictly owned: a [`Project`] owns its messages, fonts,
//! palette, and display configs; a [`FontCharacter`] owns its pixel matrix.
//! Nothing is shared across projects.

mod display;
mod font;
mod message;
mod palette;
mod project;

pub use display::{DisplayConfig, DisplayFlags, Section};
pub use font::{Font, FontCharacter};
pub use message::{
    Alternance, AnimationMode, Message, ALTERNANCE_COUNT, DEFAULT_DURATION_DECIS,
    DEFAULT_FONT_CODE,
};
pub use palette::{ColorEntry, Palette, Rgb};
pub use project::{Project, MESSAGE_NUMBER_MAX, MESSAGE_NUMBER_MIN};
