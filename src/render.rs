pub mod chart;
mod terminal;
mod text;

pub use terminal::TerminalRenderer;
pub use text::TextRenderer;

use crate::prelude::*;
use std::io;

/// Returns once the figure has been dismissed or written out.
pub trait Render {
  fn render(&mut self, figure: &Figure) -> Result<()>;
}

pub fn for_config(output: &OutputConfig) -> Box<dyn Render> {
  match output.mode {
    RenderMode::Terminal if termion::is_tty(&io::stdout()) => {
      Box::new(TerminalRenderer::new())
    }
    RenderMode::Terminal => {
      info!("stdout is not a terminal, printing the plot as text");
      Box::new(TextRenderer::new(output.width, output.height, None))
    }
    RenderMode::Text => Box::new(TextRenderer::new(
      output.width,
      output.height,
      output.path.clone(),
    )),
  }
}
