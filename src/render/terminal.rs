use super::chart;
use crate::prelude::*;
use crossbeam::channel::{bounded, Receiver};
use std::{io, thread, time::Duration};
use termion::{
  event::Key, input::TermRead, raw::IntoRawMode, screen::AlternateScreen,
};
use tui::{backend::TermionBackend, Terminal};

enum Event<I> {
  Input(I),
  Tick,
}

pub struct TerminalRenderer {
  tick: Duration,
}

impl TerminalRenderer {
  pub fn new() -> Self {
    TerminalRenderer {
      tick: Duration::from_millis(250),
    }
  }

  fn events(&self) -> Receiver<Event<Key>> {
    let (tx, events) = bounded(0);

    thread::spawn({
      let tx = tx.clone();
      move || {
        let stdin = io::stdin();
        for key in stdin.keys().flatten() {
          if tx.send(Event::Input(key)).is_err() {
            return;
          }
        }
      }
    });

    // redraw now and then so resizes are picked up
    let tick = self.tick;
    thread::spawn(move || {
      while tx.send(Event::Tick).is_ok() {
        thread::sleep(tick);
      }
    });

    events
  }
}

impl Render for TerminalRenderer {
  fn render(&mut self, figure: &Figure) -> Result<()> {
    let events = self.events();

    let stdout = io::stdout().into_raw_mode()?;
    let stdout = AlternateScreen::from(stdout);
    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    debug!("Plot open, waiting for q, esc or enter");

    loop {
      terminal.draw(|f| chart::draw(f, figure))?;

      match events.recv()? {
        Event::Input(Key::Char('q'))
        | Event::Input(Key::Char('Q'))
        | Event::Input(Key::Char('\n'))
        | Event::Input(Key::Esc)
        | Event::Input(Key::Ctrl('c')) => break,
        Event::Input(_) | Event::Tick => (),
      }
    }

    terminal.show_cursor()?;
    Ok(())
  }
}
