//! Palette file codec.
//!
//! One line per color: `<display-hex> <device-hex> [name]`, whitespace
//! separated. Blank lines and lines with fewer than two fields are skipped;
//! unparsable hex tolerates to black.

use std::path::Path;

use tracing::debug;

use super::latin1;
use crate::error::Result;
use crate::model::{ColorEntry, Palette, Rgb};

/// Parse a palette from decoded text. Never fails; junk entries are
/// skipped or defaulted.
pub fn parse_palette(text: &str) -> Palette {
    let mut palette = Palette::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(display), Some(device)) = (fields.next(), fields.next()) else {
            debug!(line, "skipping palette line with fewer than two fields");
            continue;
        };
        let name = fields.next().unwrap_or("");

        palette.colors.push(ColorEntry {
            display: Rgb::parse_hex(display).unwrap_or_default(),
            device: Rgb::parse_hex(device).unwrap_or_default(),
            name: name.to_string(),
        });
    }

    palette
}

/// Serialize a palette, one `display device name` line per entry.
pub fn write_palette(palette: &Palette) -> String {
    palette
        .colors
        .iter()
        .map(|entry| {
            if entry.name.is_empty() {
                format!("{} {}", entry.display.to_hex(), entry.device.to_hex())
            } else {
                format!(
                    "{} {} {}",
                    entry.display.to_hex(),
                    entry.device.to_hex(),
                    entry.name
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Load a palette from a Latin-1 encoded file.
pub fn load_palette(path: impl AsRef<Path>) -> Result<Palette> {
    let bytes = std::fs::read(path)?;
    Ok(parse_palette(&latin1::decode(&bytes)))
}

/// Save a palette to a Latin-1 encoded file.
pub fn save_palette(path: impl AsRef<Path>, palette: &Palette) -> Result<()> {
    std::fs::write(path, latin1::encode(&write_palette(palette)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries() {
        let text = "1A1A1A 000000 off\nFF6600 FF6600 amber\n\n00FF00 00FF00\n";
        let palette = parse_palette(text);

        assert_eq!(palette.len(), 3);
        assert_eq!(palette.color(0).unwrap().name, "off");
        assert_eq!(palette.color(1).unwrap().display, Rgb::AMBER);
        assert_eq!(palette.color(2).unwrap().name, "");
    }

    #[test]
    fn test_short_lines_skipped_bad_hex_defaults() {
        let text = "FF6600\nnothex FF0000 red\n";
        let palette = parse_palette(text);

        assert_eq!(palette.len(), 1);
        let entry = palette.color(0).unwrap();
        assert_eq!(entry.display, Rgb::default()); // tolerated to black
        assert_eq!(entry.device, Rgb::RED);
    }

    #[test]
    fn test_round_trip() {
        let text = "1A1A1A 000000 off\nFF6600 FF3300 amber";
        let palette = parse_palette(text);
        let reparsed = parse_palette(&write_palette(&palette));
        assert_eq!(palette, reparsed);
    }
}
