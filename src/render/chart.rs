use crate::{
  chart::{figure::Spine, Stroke},
  prelude::*,
};
use tui::{
  backend::Backend,
  layout::Constraint,
  style::{Color, Modifier, Style},
  symbols::Marker,
  text::Span,
  widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
  Frame,
};

pub fn draw<B: Backend>(f: &mut Frame<B>, figure: &Figure) {
  let traces: Vec<(Vec<(f64, f64)>, Style)> = figure
    .strokes
    .iter()
    .flat_map(|stroke| {
      figure
        .pieces(stroke)
        .into_iter()
        .map(move |piece| {
          let data: Vec<(f64, f64)> =
            vec![piece.start().into(), piece.end().into()];
          (data, stroke_style(stroke))
        })
    })
    .collect();

  let datasets = traces
    .iter()
    .map(|(data, style)| {
      Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(*style)
        .data(data)
    })
    .collect();

  let background = Style::default().bg(color(figure.background));
  let spines = &figure.spines;

  let mut borders = Borders::NONE;
  if spines.top.visible {
    borders |= Borders::TOP;
  }
  if spines.right.visible {
    borders |= Borders::RIGHT;
  }
  let block = Block::default()
    .borders(borders)
    .border_style(spine_style(&spines.top, figure.background));

  let chart = Chart::new(datasets)
    .style(background)
    .block(block)
    .x_axis(axis(figure, figure.bounds.x_limit, &spines.bottom))
    .y_axis(axis(figure, figure.bounds.y_limit, &spines.left))
    .hidden_legend_constraints((
      Constraint::Ratio(0, 1),
      Constraint::Ratio(0, 1),
    ));

  f.render_widget(chart, f.size());
}

fn axis<'a>(figure: &Figure, limit: f64, spine: &Spine) -> Axis<'a> {
  let tick_style = Style::default().fg(color(figure.tick_ink));
  let mut labels: Vec<Span> = figure
    .tick_values(limit)
    .into_iter()
    .map(|v| Span::styled(tick_label(v), tick_style))
    .collect();

  // the axis line is only drawn when there are labels
  if labels.is_empty() && spine.visible {
    labels = vec![Span::raw(""), Span::raw("")];
  }

  let axis = Axis::default()
    .bounds([0.0, limit])
    .style(spine_style(spine, figure.background));
  if labels.is_empty() {
    return axis;
  }
  axis.labels(labels)
}

fn stroke_style(stroke: &Stroke) -> Style {
  Style::default()
    .fg(color(stroke.ink))
    .add_modifier(weight(stroke.weight))
}

fn spine_style(spine: &Spine, background: Ink) -> Style {
  // a hidden spine is painted in the background colour
  let ink = if spine.visible { spine.ink } else { background };
  Style::default().fg(color(ink)).add_modifier(weight(spine.weight))
}

fn weight(weight: f64) -> Modifier {
  if weight > 1.0 {
    Modifier::BOLD
  } else if weight < 1.0 {
    Modifier::DIM
  } else {
    Modifier::empty()
  }
}

pub fn color(ink: Ink) -> Color {
  match ink {
    Ink::Default => Color::Reset,
    Ink::Black => Color::Black,
    Ink::White => Color::White,
    Ink::Gray => Color::Gray,
    Ink::Red => Color::Red,
    Ink::Green => Color::Green,
    Ink::Blue => Color::Blue,
  }
}

pub fn tick_label(value: f64) -> String {
  let label = format!("{:.2}", value);
  let label = label.trim_end_matches('0').trim_end_matches('.');
  match label {
    "-0" | "" => "0".to_string(),
    label => label.to_string(),
  }
}
