//! Application settings codec.
//!
//! A minimal INI subset: `key=value` pairs, `[section]` headers and `#`
//! comments ignored on read. The writer emits a single `[Initialisation]`
//! section, matching the legacy tooling's preference files.

use std::collections::BTreeMap;
use std::path::Path;

use super::latin1;
use crate::error::Result;

/// Section header the writer emits.
const SECTION: &str = "Initialisation";

/// Parse settings from decoded text. Never fails; non-pair lines are
/// ignored.
pub fn parse_settings(text: &str) -> BTreeMap<String, String> {
    let mut settings = BTreeMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('[') || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            settings.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    settings
}

/// Serialize settings under the canonical section header.
pub fn write_settings(settings: &BTreeMap<String, String>) -> String {
    let mut lines = vec![format!("[{SECTION}]")];
    for (key, value) in settings {
        lines.push(format!("{key}={value}"));
    }
    lines.join("\n")
}

/// Load settings from a Latin-1 encoded file.
pub fn load_settings(path: impl AsRef<Path>) -> Result<BTreeMap<String, String>> {
    let bytes = std::fs::read(path)?;
    Ok(parse_settings(&latin1::decode(&bytes)))
}

/// Save settings to a Latin-1 encoded file.
pub fn save_settings(path: impl AsRef<Path>, settings: &BTreeMap<String, String>) -> Result<()> {
    std::fs::write(path, latin1::encode(&write_settings(settings)))?;
    Ok(())
}
