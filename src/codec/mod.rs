//! File format codecs for the legacy sign tooling.
//!
//! All formats are line-oriented Latin-1 text. The project format is
//! positional with elastic message blocks; the palette, catalogue, and
//! settings formats are simple record shapes. Readers are tolerant,
//! writers are canonical — two grammars sharing only the model.

mod catalogue;
mod latin1;
mod lines;
mod palette_file;
mod project_file;
mod settings;

pub use catalogue::{apply_geometry, load_catalogue, parse_catalogue};
pub use latin1::{decode as decode_latin1, encode as encode_latin1};
pub use lines::{block_number, LineCursor};
pub use palette_file::{load_palette, parse_palette, save_palette, write_palette};
pub use project_file::{
    load_project, parse_project, save_project, write_project, SIDE_NONE_SENTINEL,
};
pub use settings::{load_settings, parse_settings, save_settings, write_settings};
