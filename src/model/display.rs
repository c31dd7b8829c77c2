//! Display hardware description.
//!
//! A display ("girouette") has one or two independently addressed LED
//! sections. Configs parsed from a project file start as name-only stubs;
//! geometry is filled in from a catalogue by the caller.

use bitflags::bitflags;

bitflags! {
    /// Hardware capability flags for a display.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DisplayFlags: u8 {
        /// The display carries a dedicated icon zone.
        const ICON = 0b0000_0001;
        /// The display supports per-pixel color.
        const COLOR = 0b0000_0010;
    }
}

impl std::fmt::Debug for DisplayFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Dimensions of one LED section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Section {
    /// Width in LED columns.
    pub width: u16,
    /// Height in LED rows.
    pub height: u16,
}

impl Section {
    /// Create a new section.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Check whether the section has no addressable pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Configuration for one display position (front, side, or rear).
///
/// A config freshly parsed from a project file carries only a `name`; its
/// geometry stays zero until resolved against a catalogue. Zero-geometry
/// configs are legal and simply render nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    /// Catalogue name, e.g. `"16x084"`.
    pub name: String,
    /// Free-form description from the catalogue.
    pub description: String,
    /// Primary section height in rows.
    pub height1: u16,
    /// Primary section width in columns.
    pub width1: u16,
    /// Secondary section height (0 = no secondary section).
    pub height2: u16,
    /// Secondary section width (0 = no secondary section).
    pub width2: u16,
    /// Hardware capability flags.
    pub flags: DisplayFlags,
}

impl DisplayConfig {
    /// Create a name-only stub with zero geometry.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A display is bimode iff both secondary dimensions are non-zero.
    #[inline]
    pub const fn is_bimode(&self) -> bool {
        self.height2 > 0 && self.width2 > 0
    }

    /// Dimensions of the primary section.
    #[inline]
    pub const fn primary(&self) -> Section {
        Section::new(self.width1, self.height1)
    }

    /// Dimensions of the secondary section, if the display is bimode.
    #[inline]
    pub const fn secondary(&self) -> Option<Section> {
        if self.is_bimode() {
            Some(Section::new(self.width2, self.height2))
        } else {
            None
        }
    }
}
