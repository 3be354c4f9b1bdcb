use super::chart;
use crate::prelude::*;
use std::{
  fs,
  io::{self, Write},
  path::PathBuf,
};
use tui::{backend::TestBackend, Terminal};

const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 8;

pub struct TextRenderer {
  width: u16,
  height: u16,
  path: Option<PathBuf>,
}

impl TextRenderer {
  pub fn new(width: u16, height: u16, path: Option<PathBuf>) -> Self {
    TextRenderer {
      width: width.max(MIN_WIDTH),
      height: height.max(MIN_HEIGHT),
      path,
    }
  }

  pub fn to_text(&self, figure: &Figure) -> Result<String> {
    let backend = TestBackend::new(self.width, self.height);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|f| chart::draw(f, figure))?;

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
      let row: String = (0..buffer.area.width)
        .map(|x| buffer.get(x, y).symbol.as_str())
        .collect();
      text.push_str(row.trim_end());
      text.push('\n');
    }
    Ok(text)
  }
}

impl Render for TextRenderer {
  fn render(&mut self, figure: &Figure) -> Result<()> {
    let text = self.to_text(figure)?;
    match &self.path {
      Some(path) => {
        fs::write(path, text)?;
        info!("Wrote plot to {}", path.display());
      }
      None => {
        let mut out = io::stdout();
        out.write_all(text.as_bytes())?;
        out.flush()?;
      }
    }
    Ok(())
  }
}
