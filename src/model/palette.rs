//! Palette: ordered LED color entries.
//!
//! A sign palette pairs the color shown on screen with the value the device
//! firmware expects. Index 0 is conventionally the off/background state.

/// True-color RGB representation.
///
/// Uses 3 bytes for 24-bit color depth. Display hardware rarely resolves
/// that much, but the preview side needs exact colors for realistic LEDs.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unlit LED (near-black).
    pub const OFF: Self = Self::new(0x1a, 0x1a, 0x1a);
    /// Classic amber sign LED.
    pub const AMBER: Self = Self::new(0xff, 0x66, 0x00);
    /// Green LED.
    pub const GREEN: Self = Self::new(0x00, 0xff, 0x00);
    /// Red LED.
    pub const RED: Self = Self::new(0xff, 0x00, 0x00);
    /// Yellow LED.
    pub const YELLOW: Self = Self::new(0xff, 0xff, 0x00);
    /// White LED.
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);

    /// Create from a 24-bit hex color (e.g., 0xFF6600).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse a 6-digit hex string (with or without a leading `#`).
    ///
    /// Returns `None` on anything that is not exactly 6 hex digits; palette
    /// files with junk color fields fall back to black at the call site.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 {
            return None;
        }
        u32::from_str_radix(s, 16).ok().map(Self::from_u32)
    }

    /// Format as a 6-digit uppercase hex string (no `#`).
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

/// One palette slot: the preview color, the device color, and a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    /// Color used for on-screen preview.
    pub display: Rgb,
    /// Color value the device firmware expects.
    pub device: Rgb,
    /// Human-readable name (may be empty).
    pub name: String,
}

/// Ordered color palette for a sign.
///
/// Index 0 is the off/background state by convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    /// Entries in device order.
    pub colors: Vec<ColorEntry>,
}

impl Palette {
    /// Get a color by index.
    pub fn color(&self, index: usize) -> Option<&ColorEntry> {
        self.colors.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
