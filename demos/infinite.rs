//! Infinite slider demo - wraps past either end through cloned slides.
//!
//! Hold an arrow key and watch the strip loop; the snap back into the
//! real slide range happens with animation suppressed, so the seam is
//! never visible. Press q or Esc to quit.
//!
//! Run with: cargo run --example infinite

use std::io::{self, stdout, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::style::Color;
use crossterm::terminal;

use glide_tui::{Slide, Slider, SliderOptions, TerminalView};

const VIEWPORT_WIDTH: u16 = 72;
const VIEWPORT_HEIGHT: u16 = 9;

fn main() -> io::Result<()> {
    let view = Rc::new(TerminalView::new(vec![
        Slide::new("mercury", Color::DarkBlue),
        Slide::new("venus", Color::DarkGreen),
        Slide::new("earth", Color::DarkMagenta),
        Slide::new("mars", Color::DarkRed),
        Slide::new("jupiter", Color::DarkYellow),
        Slide::new("saturn", Color::DarkCyan),
        Slide::new("uranus", Color::Blue),
    ]));

    let slider = Slider::new(
        view.clone(),
        SliderOptions {
            visible_slides: 2,
            step: 3,
            infinite: true,
        },
    );

    let mut out = stdout();
    terminal::enable_raw_mode()?;
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut out, &slider, &view);

    execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

fn run(out: &mut impl Write, slider: &Slider<TerminalView>, view: &TerminalView) -> io::Result<()> {
    view.draw(out, VIEWPORT_WIDTH, VIEWPORT_HEIGHT, Instant::now())?;

    loop {
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Left => slider.prev(),
                        KeyCode::Right => slider.next(),
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        _ => {}
                    }
                }
            }
        }

        let now = Instant::now();
        if view.tick(now) {
            view.draw(out, VIEWPORT_WIDTH, VIEWPORT_HEIGHT, now)?;
        }
    }
}
