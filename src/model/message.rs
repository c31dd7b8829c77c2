//! Messages and their timed variants.
//!
//! A message is what a driver selects by number: a fixed header plus exactly
//! three alternance slots the sign cycles through. Slots with empty text are
//! present but skipped at display time — the arity never changes.

/// Number of alternance slots every message carries.
pub const ALTERNANCE_COUNT: usize = 3;

/// Default font code applied where a font-code string is shorter than its
/// text.
pub const DEFAULT_FONT_CODE: char = '2';

/// Default alternance duration in deciseconds (3 seconds).
pub const DEFAULT_DURATION_DECIS: u16 = 30;

/// How an alternance's text is animated on the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationMode {
    /// Text is shown in place.
    #[default]
    Static,
    /// Text scrolls right-to-left, wrapping around.
    ScrollLeft,
    /// Text blinks on and off.
    Blink,
}

/// One timed text variant of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternance {
    /// Text shown for this variant.
    pub text: String,
    /// Per-character font codes, parallel to `text`. May be shorter;
    /// missing entries use [`DEFAULT_FONT_CODE`].
    pub fonts: String,
    /// Display duration in deciseconds (tenths of a second).
    pub duration_decis: u16,
    /// Animation applied while this variant is up.
    pub mode: AnimationMode,
    /// Palette index for lit pixels.
    pub text_color: u8,
    /// Palette index for the background.
    pub bg_color: u8,
}

impl Default for Alternance {
    fn default() -> Self {
        Self {
            text: String::new(),
            fonts: String::new(),
            duration_decis: DEFAULT_DURATION_DECIS,
            mode: AnimationMode::Static,
            text_color: 1,
            bg_color: 0,
        }
    }
}

impl Alternance {
    /// An alternance with no text is never displayed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A destination message, selected by number on the sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message number (unique per project, 1-9999).
    pub number: u16,
    /// Fixed prefix shown in every variant.
    pub header: String,
    /// Font codes for the header, parallel to `header`.
    pub header_fonts: String,
    /// The three variant slots. Fixed arity — slots may be empty but are
    /// never absent.
    pub alternances: [Alternance; ALTERNANCE_COUNT],
    /// Film roll number (legacy fleet bookkeeping).
    pub film_number: String,
    /// Operating-aid (SAE) code.
    pub sae_code: String,
    /// Interior display: terminus text.
    pub terminus: String,
    /// Interior display: terminus font codes.
    pub terminus_fonts: String,
    /// Interior display: next-stop text.
    pub next_stop: String,
    /// Interior display: next-stop font codes.
    pub next_stop_fonts: String,
    /// Interior display: first stop-list entry shown.
    pub stop_list_start: u16,
    /// Interior display: last stop-list entry shown.
    pub stop_list_end: u16,
}

impl Message {
    /// Create an empty message with the given number.
    pub fn new(number: u16) -> Self {
        Self {
            number,
            header: String::new(),
            header_fonts: String::new(),
            alternances: std::array::from_fn(|_| Alternance::default()),
            film_number: String::new(),
            sae_code: String::new(),
            terminus: String::new(),
            terminus_fonts: String::new(),
            next_stop: String::new(),
            next_stop_fonts: String::new(),
            stop_list_start: 0,
            stop_list_end: 0,
        }
    }

    /// Check whether any alternance has text to show.
    pub fn has_content(&self) -> bool {
        self.alternances.iter().any(|alt| !alt.is_empty())
    }
}
