//! Animator: the per-target animation state machine.
//!
//! One animator drives one render target (one display section). It owns a
//! frame buffer and a state over {Stopped, Static, ScrollLeft, Blink,
//! AlternanceCycle}; each active state carries only its own payload, period,
//! and progress, dispatched by exhaustive matching.
//!
//! The animator is passive: it never starts a thread or loop. The host
//! event loop calls [`Animator::poll`] with the current time and the
//! animator fires exactly when its deadline has passed — so a fixed-rate
//! host tick drives variable-period states (alternance cycling) correctly.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::glyph::GlyphSource;
use crate::model::{Alternance, Section, ALTERNANCE_COUNT, DEFAULT_FONT_CODE};
use crate::render::{render_text, FrameBuffer};

/// Default scroll step period (one column per step).
pub const DEFAULT_SCROLL_PERIOD: Duration = Duration::from_millis(50);

/// Default blink half-period.
pub const DEFAULT_BLINK_PERIOD: Duration = Duration::from_millis(500);

/// The file format's native timing unit.
const DECISECOND: Duration = Duration::from_millis(100);

/// One slot of an alternance cycle: the payload the cycle state owns.
#[derive(Debug, Clone, Default)]
pub struct CycleSlot {
    /// Variant text. Empty slots are skipped, never displayed.
    pub text: String,
    /// Per-character font codes for `text`.
    pub fonts: String,
    /// Display duration in deciseconds. Zero is clamped to one.
    pub duration_decis: u16,
}

impl CycleSlot {
    fn duration(&self) -> Duration {
        DECISECOND * u32::from(self.duration_decis.max(1))
    }
}

impl From<&Alternance> for CycleSlot {
    fn from(alt: &Alternance) -> Self {
        Self {
            text: alt.text.clone(),
            fonts: alt.fonts.clone(),
            duration_decis: alt.duration_decis,
        }
    }
}

/// Animation state. Each variant owns exactly the fields its tick logic
/// needs.
#[derive(Debug)]
enum State {
    Stopped,
    Static,
    ScrollLeft {
        text: String,
        fonts: String,
        period: Duration,
        /// Columns scrolled; rendering origin is `-offset`.
        offset: i32,
        /// Rendered text width, fixed at start.
        width: i32,
    },
    Blink {
        text: String,
        fonts: String,
        period: Duration,
        visible: bool,
    },
    Cycle {
        header: String,
        header_fonts: String,
        slots: [CycleSlot; ALTERNANCE_COUNT],
        index: usize,
    },
}

/// Drives timed animations for one render target.
#[derive(Debug)]
pub struct Animator {
    section: Section,
    frame: FrameBuffer,
    state: State,
    next_due: Option<Instant>,
}

impl Animator {
    /// Create a stopped animator for a display section.
    pub fn new(section: Section) -> Self {
        Self {
            section,
            frame: FrameBuffer::new(section.width, section.height),
            state: State::Stopped,
            next_due: None,
        }
    }

    /// The section this animator renders for.
    pub const fn section(&self) -> Section {
        self.section
    }

    /// The last rendered frame.
    pub const fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Whether an animation is active.
    pub const fn is_running(&self) -> bool {
        !matches!(self.state, State::Stopped)
    }

    /// The pending deadline, if the active state has a recurring tick.
    pub const fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Current scroll offset, when a scroll is active.
    pub const fn scroll_offset(&self) -> Option<i32> {
        match self.state {
            State::ScrollLeft { offset, .. } => Some(offset),
            _ => None,
        }
    }

    /// Stop the running animation.
    ///
    /// Idempotent, callable from any context. Clears the pending deadline,
    /// so no stale fire can occur afterwards; the last frame stays up.
    pub fn stop(&mut self) {
        if self.is_running() {
            debug!("animation stopped");
        }
        self.state = State::Stopped;
        self.next_due = None;
    }

    /// Show text in place. Renders once; no recurring tick.
    pub fn play_static(&mut self, text: &str, fonts: &str, glyphs: &GlyphSource<'_>) -> &FrameBuffer {
        self.stop();
        self.frame.clear();
        render_text(&mut self.frame, text, fonts, glyphs, 0);
        self.state = State::Static;
        &self.frame
    }

    /// Start a left scroll.
    ///
    /// Each due tick moves the text one column left. Once the offset
    /// exceeds rendered-width + section-width the offset wraps to
    /// `-section_width`, so the text re-enters from the trailing edge
    /// without a visible jump.
    pub fn play_scroll(
        &mut self,
        now: Instant,
        text: &str,
        fonts: &str,
        period: Duration,
        glyphs: &GlyphSource<'_>,
    ) -> &FrameBuffer {
        self.stop();
        self.frame.clear();
        let width = render_text(&mut self.frame, text, fonts, glyphs, 0);
        self.state = State::ScrollLeft {
            text: text.to_string(),
            fonts: fonts.to_string(),
            period,
            offset: 0,
            width,
        };
        self.next_due = Some(now + period);
        &self.frame
    }

    /// Start blinking: full render and cleared frame alternate every
    /// period.
    pub fn play_blink(
        &mut self,
        now: Instant,
        text: &str,
        fonts: &str,
        period: Duration,
        glyphs: &GlyphSource<'_>,
    ) -> &FrameBuffer {
        self.stop();
        self.frame.clear();
        render_text(&mut self.frame, text, fonts, glyphs, 0);
        self.state = State::Blink {
            text: text.to_string(),
            fonts: fonts.to_string(),
            period,
            visible: true,
        };
        self.next_due = Some(now + period);
        &self.frame
    }

    /// Start cycling through alternance slots.
    ///
    /// Each slot shows header + slot text for its own duration. Empty slots
    /// are skipped; if every slot is empty the animator parks in Stopped
    /// with a cleared frame.
    pub fn play_cycle(
        &mut self,
        now: Instant,
        header: &str,
        header_fonts: &str,
        slots: [CycleSlot; ALTERNANCE_COUNT],
        glyphs: &GlyphSource<'_>,
    ) -> &FrameBuffer {
        self.stop();
        self.frame.clear();

        let Some(index) = first_nonempty(&slots, 0) else {
            return &self.frame;
        };

        let due = now + slots[index].duration();
        self.state = State::Cycle {
            header: header.to_string(),
            header_fonts: header_fonts.to_string(),
            slots,
            index,
        };
        self.render_cycle_slot(glyphs);
        self.next_due = Some(due);
        &self.frame
    }

    /// Advance the animation if its deadline has passed.
    ///
    /// Returns the freshly rendered frame on a fire, `None` otherwise.
    pub fn poll(&mut self, now: Instant, glyphs: &GlyphSource<'_>) -> Option<&FrameBuffer> {
        let due = self.next_due?;
        if now < due {
            return None;
        }

        match &mut self.state {
            State::Stopped | State::Static => return None,
            State::ScrollLeft {
                text,
                fonts,
                period,
                offset,
                width,
            } => {
                *offset += 1;
                if *offset > *width + i32::from(self.section.width) {
                    // Wrap to the trailing edge, not to zero: the text
                    // slides back in instead of jumping.
                    *offset = -i32::from(self.section.width);
                }
                let origin = -*offset;
                let period = *period;
                self.frame.clear();
                render_text(&mut self.frame, text, fonts, glyphs, origin);
                self.next_due = Some(now + period);
            }
            State::Blink {
                text,
                fonts,
                period,
                visible,
            } => {
                *visible = !*visible;
                let period = *period;
                if *visible {
                    self.frame.clear();
                    render_text(&mut self.frame, text, fonts, glyphs, 0);
                } else {
                    self.frame.clear();
                }
                self.next_due = Some(now + period);
            }
            State::Cycle { slots, index, .. } => {
                let next = first_nonempty(slots, (*index + 1) % ALTERNANCE_COUNT)
                    .unwrap_or(*index);
                *index = next;
                let due = now + slots[next].duration();
                self.render_cycle_slot(glyphs);
                self.next_due = Some(due);
            }
        }

        Some(&self.frame)
    }

    /// Render the active cycle slot: header prefix plus slot text.
    fn render_cycle_slot(&mut self, glyphs: &GlyphSource<'_>) {
        let State::Cycle {
            header,
            header_fonts,
            slots,
            index,
        } = &self.state
        else {
            return;
        };

        let slot = &slots[*index];
        let (text, fonts) = join_header(header, header_fonts, &slot.text, &slot.fonts);

        self.frame.clear();
        render_text(&mut self.frame, &text, &fonts, glyphs, 0);
    }
}

/// Concatenate header and variant text with their font codes.
///
/// The header's code string is padded to the header length first, so the
/// variant's codes stay aligned with the variant's characters.
pub(crate) fn join_header(
    header: &str,
    header_fonts: &str,
    text: &str,
    fonts: &str,
) -> (String, String) {
    let joined_text = format!("{header}{text}");
    let header_len = header.chars().count();

    let mut joined_fonts = String::with_capacity(header_len + fonts.len());
    joined_fonts.extend(
        header_fonts
            .chars()
            .chain(std::iter::repeat(DEFAULT_FONT_CODE))
            .take(header_len),
    );
    joined_fonts.push_str(fonts);

    (joined_text, joined_fonts)
}

/// First non-empty slot index probing at most one full turn from `start`.
fn first_nonempty(slots: &[CycleSlot; ALTERNANCE_COUNT], start: usize) -> Option<usize> {
    (0..ALTERNANCE_COUNT)
        .map(|step| (start + step) % ALTERNANCE_COUNT)
        .find(|&i| !slots[i].text.is_empty())
}
