//! Finite slider demo - two slides per page, two slides per step.
//!
//! Left/Right arrows navigate; the prev arrow starts hidden and the next
//! arrow disappears at the last page. Press q or Esc to quit.
//!
//! Run with: cargo run --example basic

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
        Slide::new("one", Color::DarkBlue),
        Slide::new("two", Color::DarkGreen),
        Slide::new("three", Color::DarkMagenta),
        Slide::new("four", Color::DarkCyan),
        Slide::new("five", Color::DarkYellow),
        Slide::new("six", Color::DarkRed),
    ]));

    let slider = Slider::new(
        view.clone(),
        SliderOptions {
            visible_slides: 2,
            step: 2,
            infinite: false,
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
