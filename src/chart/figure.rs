use super::{Segment, Solution, ViewBounds};
use crate::config::StyleConfig;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ink {
  Default,
  Black,
  White,
  Gray,
  Red,
  Green,
  Blue,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Pattern {
  Solid,
  Dashed,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Stroke {
  pub segment: Segment,
  pub pattern: Pattern,
  pub weight: f64,
  pub ink: Ink,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Spine {
  pub visible: bool,
  pub weight: f64,
  pub ink: Ink,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Spines {
  pub top: Spine,
  pub right: Spine,
  pub bottom: Spine,
  pub left: Spine,
}

/// Everything a renderer needs to draw the two functions. Carries no title or
/// axis labels; tick values are the only text on the plot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
  pub strokes: Vec<Stroke>,
  pub bounds: ViewBounds,
  pub spines: Spines,
  pub ticks: usize,
  pub tick_ink: Ink,
  pub background: Ink,
  // dash and gap lengths in data units
  pub dash: (f64, f64),
}

impl Figure {
  pub fn new(
    solution: &Solution,
    bounds: ViewBounds,
    style: &StyleConfig,
  ) -> Self {
    let solid = |segment: Segment| Stroke {
      segment,
      pattern: Pattern::Solid,
      weight: style.line_width,
      ink: style.ink,
    };
    let dashed = |segment: Segment| Stroke {
      segment,
      pattern: Pattern::Dashed,
      weight: style.guide_width,
      ink: style.ink,
    };
    let hidden = Spine {
      visible: false,
      weight: style.line_width,
      ink: style.ink,
    };
    let shown = Spine {
      visible: true,
      ..hidden
    };

    let diagonal = bounds.x_limit.abs().hypot(bounds.y_limit.abs());

    Figure {
      strokes: vec![
        solid(solution.segment_a()),
        solid(solution.segment_b()),
        dashed(solution.vertical_guide()),
        dashed(solution.horizontal_guide()),
      ],
      bounds,
      spines: Spines {
        top: hidden,
        right: hidden,
        bottom: shown,
        left: shown,
      },
      ticks: style.ticks,
      tick_ink: style.ink,
      background: style.background,
      dash: (diagonal * style.dash_ratio, diagonal * style.gap_ratio),
    }
  }

  pub fn pieces(&self, stroke: &Stroke) -> Vec<Segment> {
    let window = ((0.0, self.bounds.x_limit), (0.0, self.bounds.y_limit));
    let visible = match stroke.segment.clip(window.0, window.1) {
      Some(segment) => segment,
      None => return vec![],
    };
    let pieces = match stroke.pattern {
      Pattern::Solid => vec![visible],
      Pattern::Dashed => visible.dashes(self.dash.0, self.dash.1),
    };
    pieces
      .into_iter()
      .map(|s| {
        Segment::new(
          s.start().clamp(window.0, window.1),
          s.end().clamp(window.0, window.1),
        )
      })
      .collect()
  }

  pub fn tick_values(&self, limit: f64) -> Vec<f64> {
    match self.ticks {
      0 => vec![],
      n => {
        let n = n.max(2);
        (0..n).map(|i| limit * i as f64 / (n - 1) as f64).collect()
      }
    }
  }
}
