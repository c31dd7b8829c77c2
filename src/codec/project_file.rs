//! Project file codec.
//!
//! The legacy project format is flat, positional, and line-oriented. One
//! sentinel exists: a line consisting solely of digits opens a message
//! block. Everything else is position — six header lines, then elastic
//! message blocks padded with reserved lines whose counts vary between
//! producers.
//!
//! The reader and writer are deliberately two different grammars sharing
//! only the model: the reader tolerates whatever padding it finds, the
//! writer always emits one canonical shape.

use std::path::Path;

use tracing::debug;

use super::latin1;
use super::lines::{block_number, LineCursor};
use crate::error::{Error, Result};
use crate::model::{DisplayConfig, Message, Project, ALTERNANCE_COUNT};

/// Side-display name meaning "this installation has no side display".
pub const SIDE_NONE_SENTINEL: &str = ".Pas de Girouette";

/// Front display name written when the project has none.
const DEFAULT_FRONT_NAME: &str = "16x084";

/// Rear display name written when the project has none.
const DEFAULT_REAR_NAME: &str = "16x028";

/// Constant flag on header line 5. Read for presence only.
const HEADER_FLAG: &str = "1";

/// Number of fixed header lines before the message body.
const HEADER_LINES: usize = 6;

/// Reserved lines the writer emits before each alternance's text line.
const RESERVED_BEFORE_TEXT: usize = 4;

/// Reserved lines the writer emits after each duplicate font-code line.
const RESERVED_AFTER_FONTS: usize = 26;

/// Parse a project file from decoded text.
///
/// Fails only when the six-line header is missing; everything inside the
/// body is tolerated best-effort. On failure no partial [`Project`] exists —
/// the caller's state is untouched.
pub fn parse_project(text: &str) -> Result<Project> {
    let mut cursor = LineCursor::new(text);
    if cursor.len() < HEADER_LINES {
        return Err(Error::format(format!(
            "project file too short: {} lines, need {HEADER_LINES}",
            cursor.len()
        )));
    }

    let mut project = Project::new();
    project.version = cursor.next_line().unwrap_or_default().to_string();
    project.font_file = cursor.next_line().unwrap_or_default().to_string();

    let front = cursor.next_line().unwrap_or_default();
    let side = cursor.next_line().unwrap_or_default();
    let rear = cursor.next_line().unwrap_or_default();
    let _flag = cursor.next_line();

    project.front_display = (!front.is_empty()).then(|| DisplayConfig::named(front));
    project.side_display =
        (!side.is_empty() && side != SIDE_NONE_SENTINEL).then(|| DisplayConfig::named(side));
    project.rear_display = (!rear.is_empty()).then(|| DisplayConfig::named(rear));

    while let Some(line) = cursor.peek() {
        if let Some(number) = block_number(line) {
            cursor.next_line();
            let message = parse_message_block(&mut cursor, number);
            project.messages.insert(number, message);
        } else {
            if !line.is_empty() {
                debug!(line, "skipping line outside any message block");
            }
            cursor.next_line();
        }
    }

    Ok(project)
}

/// Parse one message block. The number line is already consumed.
///
/// Block length is elastic: the loop stops at end of input or when the next
/// unconsumed line opens another block, so variable padding from different
/// producers parses the same.
fn parse_message_block(cursor: &mut LineCursor<'_>, number: u16) -> Message {
    let mut message = Message::new(number);

    // Header pair: the two positional lines right after the number.
    // Legacy producers leave both blank, which reads back as no header.
    message.header = cursor.next_line().unwrap_or_default().to_string();
    message.header_fonts = cursor.next_line().unwrap_or_default().to_string();

    cursor.skip_blank();

    for slot in 0..ALTERNANCE_COUNT {
        if cursor.is_at_end() {
            break;
        }

        let text = cursor.next_line().unwrap_or_default();
        let fonts = cursor.next_line().unwrap_or_default();
        // Structural redundancy in the format: the font codes appear twice.
        cursor.next_line();
        // Reserved fields (timing, animation) follow as a non-blank run.
        cursor.skip_nonblank();
        cursor.skip_blank();

        if !text.is_empty() || !fonts.is_empty() {
            message.alternances[slot].text = text.to_string();
            message.alternances[slot].fonts = fonts.to_string();
        }

        if cursor.peek_block_start().is_some() {
            break;
        }
    }

    message
}

/// Serialize a project to the canonical file shape.
///
/// The writer is stricter than the reader on purpose: fixed header order,
/// message blocks in ascending number order, and exact reserved-line
/// padding, regardless of what shape was originally read.
pub fn write_project(project: &Project) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(project.version.clone());
    lines.push(project.font_file.clone());
    lines.push(display_name(project.front_display.as_ref(), DEFAULT_FRONT_NAME));
    lines.push(display_name(project.side_display.as_ref(), SIDE_NONE_SENTINEL));
    lines.push(display_name(project.rear_display.as_ref(), DEFAULT_REAR_NAME));
    lines.push(HEADER_FLAG.to_string());

    for message in project.messages.values() {
        lines.push(String::new());
        lines.push(message.number.to_string());
        lines.push(message.header.clone());
        lines.push(message.header_fonts.clone());

        for alt in &message.alternances {
            for _ in 0..RESERVED_BEFORE_TEXT {
                lines.push(String::new());
            }
            lines.push(alt.text.clone());
            lines.push(alt.fonts.clone());
            lines.push(alt.fonts.clone());
            for _ in 0..RESERVED_AFTER_FONTS {
                lines.push(String::new());
            }
        }
    }

    lines.join("\n")
}

fn display_name(config: Option<&DisplayConfig>, absent: &str) -> String {
    config.map_or_else(|| absent.to_string(), |d| d.name.clone())
}

/// Load a project from a Latin-1 encoded file.
pub fn load_project(path: impl AsRef<Path>) -> Result<Project> {
    let bytes = std::fs::read(path)?;
    parse_project(&latin1::decode(&bytes))
}

/// Save a project to a Latin-1 encoded file in canonical shape.
pub fn save_project(path: impl AsRef<Path>, project: &Project) -> Result<()> {
    std::fs::write(path, latin1::encode(&write_project(project)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lines the writer emits per message: separator, number, header pair,
    /// three padded alternance groups.
    const LINES_PER_MESSAGE: usize =
        4 + ALTERNANCE_COUNT * (RESERVED_BEFORE_TEXT + 3 + RESERVED_AFTER_FONTS);

    fn sample_project() -> Project {
        let mut project = Project::new();
        project.font_file = "STANDARD.POL".to_string();
        project.front_display = Some(DisplayConfig::named("16x084"));
        project.rear_display = Some(DisplayConfig::named("16x028"));

        let msg = project.add_message(1).unwrap();
        msg.header = "LIGNE 7 ".to_string();
        msg.header_fonts = "22222222".to_string();
        msg.alternances[0].text = "CENTRE-VILLE".to_string();
        msg.alternances[0].fonts = "222222222222".to_string();
        project
    }

    #[test]
    fn test_too_short_is_format_error() {
        let result = parse_project("2.0\nfonts.pol\n16x084\n");
        assert!(matches!(result, Err(Error::Format { .. })));
    }

    #[test]
    fn test_parse_header() {
        let text = "2.0\nSTANDARD.POL\n16x084\n.Pas de Girouette\n16x028\n1";
        let project = parse_project(text).unwrap();

        assert_eq!(project.version, "2.0");
        assert_eq!(project.font_file, "STANDARD.POL");
        assert_eq!(project.front_display.as_ref().unwrap().name, "16x084");
        assert!(project.side_display.is_none()); // sentinel
        assert_eq!(project.rear_display.as_ref().unwrap().name, "16x028");
        assert!(project.messages.is_empty());
    }

    #[test]
    fn test_parse_side_display_present() {
        let text = "2.0\nfonts.pol\n16x084\n08x112\n16x028\n1";
        let project = parse_project(text).unwrap();
        assert_eq!(project.side_display.as_ref().unwrap().name, "08x112");
    }

    #[test]
    fn test_display_stubs_have_zero_geometry() {
        let text = "2.0\nfonts.pol\n16x084\n.Pas de Girouette\n16x028\n1";
        let project = parse_project(text).unwrap();
        let front = project.front_display.as_ref().unwrap();
        assert_eq!(front.width1, 0);
        assert_eq!(front.height1, 0);
    }

    #[test]
    fn test_parse_legacy_block_without_header_pair() {
        // The shape the historical tooling wrote: blank padding right after
        // the number, no header lines. The header pair reads back empty.
        let text = "2.0\nfonts.pol\n16x084\n.Pas de Girouette\n16x028\n1\n\n12\n\n\n\n\nDEPOT\n22222\n22222\n\n\n";
        let project = parse_project(text).unwrap();

        let msg = project.message(12).unwrap();
        assert_eq!(msg.header, "");
        assert_eq!(msg.header_fonts, "");
        assert_eq!(msg.alternances[0].text, "DEPOT");
        assert_eq!(msg.alternances[0].fonts, "22222");
    }

    #[test]
    fn test_parse_elastic_padding() {
        // Same content with wildly different padding: one blank before the
        // text instead of four, reserved junk after the fonts, and the next
        // block starting immediately after it.
        let text = concat!(
            "2.0\nfonts.pol\n16x084\n.Pas de Girouette\n16x028\n1\n",
            "\n", "5\n", "\n\n",      // number + blank header pair
            "GARE SNCF\n22222222 2\n22222222 2\n30\n0\n", // reserved junk after fonts
            "\n",                     // single blank separator, not 26
            "7\n", "\n\n",            // next block
            "\n\n\n\n", "DEPOT\n22222\n22222\n",
        );
        let project = parse_project(text).unwrap();

        assert_eq!(project.message(5).unwrap().alternances[0].text, "GARE SNCF");
        assert_eq!(project.message(7).unwrap().alternances[0].text, "DEPOT");
    }

    #[test]
    fn test_junk_lines_between_blocks_are_skipped() {
        let text = concat!(
            "2.0\nfonts.pol\n16x084\n.Pas de Girouette\n16x028\n1\n",
            "stray annotation\n",
            "1234567890\n", // digit run too large to be a message number
            "\n3\n\n\n\n\n\n\nTERMINUS\n22222222\n22222222\n",
        );
        let project = parse_project(text).unwrap();

        assert_eq!(project.messages.len(), 1);
        assert_eq!(project.message(3).unwrap().alternances[0].text, "TERMINUS");
    }

    #[test]
    fn test_writer_canonical_shape() {
        let project = sample_project();
        let text = write_project(&project);
        // split keeps the trailing blank reserved lines that lines() elides
        let lines: Vec<&str> = text.split('\n').collect();

        assert_eq!(lines.len(), HEADER_LINES + LINES_PER_MESSAGE);
        assert_eq!(lines[0], "2.0");
        assert_eq!(lines[3], SIDE_NONE_SENTINEL);
        assert_eq!(lines[5], HEADER_FLAG);
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "1");
        assert_eq!(lines[8], "LIGNE 7 ");
        // Alternance group: 4 reserved, text, fonts, duplicate fonts.
        assert_eq!(lines[14], "CENTRE-VILLE");
        assert_eq!(lines[15], "222222222222");
        assert_eq!(lines[16], "222222222222");
    }

    #[test]
    fn test_writer_defaults_for_absent_displays() {
        let mut project = Project::new();
        project.front_display = None;
        project.rear_display = None;
        let text = write_project(&project);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[2], DEFAULT_FRONT_NAME);
        assert_eq!(lines[3], SIDE_NONE_SENTINEL);
        assert_eq!(lines[4], DEFAULT_REAR_NAME);
    }

    #[test]
    fn test_round_trip_content() {
        let project = sample_project();
        let reparsed = parse_project(&write_project(&project)).unwrap();

        let numbers: Vec<u16> = reparsed.message_numbers().collect();
        assert_eq!(numbers, vec![1]);

        let msg = reparsed.message(1).unwrap();
        assert_eq!(msg.header, "LIGNE 7 ");
        assert_eq!(msg.header_fonts, "22222222");
        assert_eq!(msg.alternances[0].text, "CENTRE-VILLE");
        assert_eq!(msg.alternances[0].fonts, "222222222222");
        assert_eq!(msg.alternances[1].text, "");
        assert_eq!(msg.alternances[2].text, "");
        // Durations are not persisted; the format default survives.
        assert_eq!(msg.alternances[0].duration_decis, 30);
    }

    #[test]
    fn test_round_trip_many_messages_ascending() {
        let mut project = Project::new();
        for n in [900, 4, 77] {
            let msg = project.add_message(n).unwrap();
            msg.alternances[0].text = format!("DEST {n}");
        }

        let reparsed = parse_project(&write_project(&project)).unwrap();
        let numbers: Vec<u16> = reparsed.message_numbers().collect();
        assert_eq!(numbers, vec![4, 77, 900]);
        assert_eq!(reparsed.message(77).unwrap().alternances[0].text, "DEST 77");
    }

    #[test]
    fn test_round_trip_compacts_empty_leading_slots() {
        // Blank alternances serialize as blank lines and vanish into the
        // padding; non-empty slots shift up on re-parse. Content survives,
        // slot positions do not — matching the historical tooling.
        let mut project = Project::new();
        let msg = project.add_message(2).unwrap();
        msg.alternances[1].text = "NAVETTE".to_string();
        msg.alternances[1].fonts = "2222222".to_string();

        let reparsed = parse_project(&write_project(&project)).unwrap();
        let msg = reparsed.message(2).unwrap();
        assert_eq!(msg.alternances[0].text, "NAVETTE");
        assert_eq!(msg.alternances[1].text, "");
    }

    #[test]
    fn test_digit_header_round_trips() {
        let mut project = Project::new();
        let msg = project.add_message(8).unwrap();
        msg.header = "7".to_string();
        msg.alternances[0].text = "PISCINE".to_string();

        let reparsed = parse_project(&write_project(&project)).unwrap();
        assert_eq!(reparsed.messages.len(), 1);
        assert_eq!(reparsed.message(8).unwrap().header, "7");
        assert_eq!(reparsed.message(8).unwrap().alternances[0].text, "PISCINE");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_project("/nonexistent/path/to/project.dsw");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_save_load_latin1() {
        let mut project = sample_project();
        project
            .message_mut(1)
            .unwrap()
            .alternances[0]
            .text = "HÔTEL DE VILLE".to_string();

        let path = std::env::temp_dir().join("dotsign-codec-test.dsw");
        save_project(&path, &project).unwrap();
        let loaded = load_project(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            loaded.message(1).unwrap().alternances[0].text,
            "HÔTEL DE VILLE"
        );
    }
}
