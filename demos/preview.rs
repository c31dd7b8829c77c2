//! Terminal LED preview: drive an animator from a metronome.
//!
//! Renders a 84x16 front section as a dot matrix in the terminal, cycling
//! through a sample message's alternances, then a scroll, then a blink.
//!
//! Press 'q' or Escape to quit, space to switch animation.

use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use crossterm::{cursor, execute, terminal};

use dotsign::anim::CycleSlot;
use dotsign::{Animator, GlyphSource, Metronome, Project, Section};

/// Animations the demo rotates through on space.
#[derive(Clone, Copy)]
enum Mode {
    Cycle,
    Scroll,
    Blink,
}

fn main() -> std::io::Result<()> {
    let mut project = Project::new();
    let msg = project
        .add_message(7)
        .expect("fresh project accepts message 7");
    msg.header = "LIGNE 7 ".to_string();
    msg.alternances[0].text = "CENTRE-VILLE".to_string();
    msg.alternances[0].duration_decis = 20;
    msg.alternances[1].text = "GARE SNCF".to_string();
    msg.alternances[1].duration_decis = 20;

    let section = Section::new(84, 16);
    let mut animator = Animator::new(section);
    let metronome = Metronome::spawn(Duration::from_millis(25));

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

    let mut mode = Mode::Cycle;
    start(&mut animator, &project, mode);
    draw(&mut out, &animator)?;

    'outer: loop {
        // Drain input without blocking the tick loop.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break 'outer,
                    KeyCode::Char(' ') => {
                        mode = match mode {
                            Mode::Cycle => Mode::Scroll,
                            Mode::Scroll => Mode::Blink,
                            Mode::Blink => Mode::Cycle,
                        };
                        start(&mut animator, &project, mode);
                        draw(&mut out, &animator)?;
                    }
                    _ => {}
                }
            }
        }

        if let Ok(tick) = metronome.receiver().recv_timeout(Duration::from_millis(100)) {
            let glyphs = GlyphSource::new(&project.fonts);
            if animator.poll(tick.at, &glyphs).is_some() {
                draw(&mut out, &animator)?;
            }
        }
    }

    animator.stop();
    metronome.join();
    execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()
}

fn start(animator: &mut Animator, project: &Project, mode: Mode) {
    let glyphs = GlyphSource::new(&project.fonts);
    let msg = project.message(7).expect("demo message");
    let now = std::time::Instant::now();

    match mode {
        Mode::Cycle => {
            let slots: [CycleSlot; 3] = std::array::from_fn(|i| (&msg.alternances[i]).into());
            animator.play_cycle(now, &msg.header, &msg.header_fonts, slots, &glyphs);
        }
        Mode::Scroll => {
            animator.play_scroll(
                now,
                "CENTRE-VILLE PAR GARE SNCF",
                "",
                Duration::from_millis(40),
                &glyphs,
            );
        }
        Mode::Blink => {
            animator.play_blink(now, "DEPOT", "", Duration::from_millis(500), &glyphs);
        }
    }
}

fn draw(out: &mut impl Write, animator: &Animator) -> std::io::Result<()> {
    execute!(out, cursor::MoveTo(0, 0))?;

    let mut text = String::new();
    for row in animator.frame().rows() {
        for &lit in row {
            text.push(if lit { '●' } else { ' ' });
        }
        text.push_str("\r\n");
    }
    text.push_str("\r\n[space] switch animation   [q] quit");

    out.write_all(text.as_bytes())?;
    out.flush()
}
