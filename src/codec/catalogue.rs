//! Display-geometry catalogue codec.
//!
//! The catalogue maps display names to hardware geometry in fixed 8-line
//! records: name, description, height1, width1, height2, width2, has-icon,
//! is-color. Project files carry display *names* only; resolving a
//! project's stubs against a catalogue is what gives them pixels.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::latin1;
use crate::error::Result;
use crate::model::{DisplayConfig, DisplayFlags, Project};

/// Lines per catalogue record.
const RECORD_LINES: usize = 8;

/// Parse a catalogue from decoded text.
///
/// Records are positional; blank lines between records are skipped.
/// Non-numeric dimension fields tolerate to 0.
pub fn parse_catalogue(text: &str) -> HashMap<String, DisplayConfig> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut displays = HashMap::new();

    let mut index = 0;
    while index < lines.len() {
        let name = lines[index];
        if name.is_empty() {
            index += 1;
            continue;
        }

        let field = |offset: usize| lines.get(index + offset).copied().unwrap_or("");
        let numeric = |offset: usize| field(offset).parse::<u16>().unwrap_or(0);

        let mut flags = DisplayFlags::empty();
        flags.set(DisplayFlags::ICON, numeric(6) != 0);
        flags.set(DisplayFlags::COLOR, numeric(7) != 0);

        let config = DisplayConfig {
            name: name.to_string(),
            description: field(1).to_string(),
            height1: numeric(2),
            width1: numeric(3),
            height2: numeric(4),
            width2: numeric(5),
            flags,
        };
        displays.insert(config.name.clone(), config);

        index += RECORD_LINES;
    }

    displays
}

/// Fill in geometry for every name-only display stub in a project.
///
/// Unknown names are left as zero-geometry stubs; they render nothing
/// until a catalogue that knows them is applied.
pub fn apply_geometry(project: &mut Project, catalogue: &HashMap<String, DisplayConfig>) {
    for slot in [
        &mut project.front_display,
        &mut project.side_display,
        &mut project.rear_display,
    ] {
        let Some(config) = slot else { continue };
        match catalogue.get(&config.name) {
            Some(known) => *config = known.clone(),
            None => debug!(name = %config.name, "display name not in catalogue"),
        }
    }
}

/// Load a catalogue from a Latin-1 encoded file.
pub fn load_catalogue(path: impl AsRef<Path>) -> Result<HashMap<String, DisplayConfig>> {
    let bytes = std::fs::read(path)?;
    Ok(parse_catalogue(&latin1::decode(&bytes)))
}
