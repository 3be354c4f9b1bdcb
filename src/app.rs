use crate::{
  input::Prompter,
  prelude::*,
  report::{diagnostic, Report},
};
use std::io::{BufRead, Write};

#[derive(Debug, PartialEq)]
pub enum Outcome {
  Rendered(Solution),
  Degenerate(DegenerateInput),
}

pub fn plot<W, R>(
  params: LineParams,
  bounds: ViewBounds,
  style: &StyleConfig,
  out: &mut W,
  renderer: &mut R,
) -> Result<Outcome>
where
  W: Write,
  R: Render + ?Sized,
{
  let solution = match params.solve() {
    Ok(solution) => solution,
    Err(err) => {
      writeln!(out, "{}", diagnostic(&err))?;
      info!("Not plotting {:?}: {:?}", params, err);
      return Ok(Outcome::Degenerate(err));
    }
  };

  write!(out, "{}", Report(&solution))?;
  out.flush()?;
  debug!(
    "Solved {:?}: {:?}, segment B slope {:?}",
    params,
    solution,
    solution.segment_b().slope()
  );

  if !bounds.is_viewable() {
    warn!("View range {:?} leaves nothing to see", bounds);
  }

  let figure = Figure::new(&solution, bounds, style);
  renderer.render(&figure)?;
  Ok(Outcome::Rendered(solution))
}

pub fn run<I, W, R>(
  input: I,
  out: &mut W,
  style: &StyleConfig,
  renderer: &mut R,
) -> Result<Outcome>
where
  I: BufRead,
  W: Write,
  R: Render + ?Sized,
{
  let (params, bounds) = Prompter::new(input, &mut *out).collect()?;
  plot(params, bounds, style, out, renderer)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  #[derive(Default)]
  struct Recorder {
    figures: Vec<Figure>,
  }

  impl Render for Recorder {
    fn render(&mut self, figure: &Figure) -> Result<()> {
      self.figures.push(figure.clone());
      Ok(())
    }
  }

  fn run_with(input: &str) -> (Result<Outcome>, String, Recorder) {
    let mut out = vec![];
    let mut recorder = Recorder::default();
    let result = run(
      Cursor::new(input),
      &mut out,
      &StyleConfig::default(),
      &mut recorder,
    );
    (result, String::from_utf8_lossy(&out).into_owned(), recorder)
  }

  #[test]
  fn plots_valid_input_once() -> Result<()> {
    let (result, out, recorder) = run_with("2\n-1\n3\n5\n5\n");

    let solution = match result? {
      Outcome::Rendered(solution) => solution,
      other => panic!("expected a plot, got {:?}", other),
    };
    assert_eq!(solution.intersection, Point::new(1.0, 2.0));
    assert!(out.contains("Intersection of Function 1 & 2: (1.0000, 2.0000)"));
    assert!(out.contains("Function 2 X-Axis Intercept:    (3.0000, 0.0000)"));

    assert_eq!(recorder.figures.len(), 1);
    let figure = &recorder.figures[0];
    assert_eq!(figure.bounds, ViewBounds::new(5.0, 5.0));
    assert_eq!(figure.strokes[0].segment, solution.segment_a());
    assert_eq!(figure.strokes[1].segment, solution.segment_b());
    Ok(())
  }

  #[test]
  fn identical_slopes_skip_render() -> Result<()> {
    let (result, out, recorder) = run_with("1\n1\n5\n10\n10\n");

    assert_eq!(result?, Outcome::Degenerate(DegenerateInput::IdenticalSlopes));
    assert!(out.contains(
      "[!] Error: Slopes are identical. The lines will never intersect."
    ));
    assert!(!out.contains("CALCULATED POINTS"));
    assert!(recorder.figures.is_empty());
    Ok(())
  }

  #[test]
  fn flat_second_line_skips_render() -> Result<()> {
    let (result, out, recorder) = run_with("2\n0\n4\n10\n10\n");

    assert_eq!(
      result?,
      Outcome::Degenerate(DegenerateInput::FlatSecondLine {
        intersection: Point::new(2.0, 4.0)
      })
    );
    assert!(out.contains(
      "[!] Error: Second slope is 0, line will never intersect the x-axis."
    ));
    assert!(recorder.figures.is_empty());
    Ok(())
  }

  #[test]
  fn non_numeric_input_never_solves() {
    let (result, out, recorder) = run_with("abc\n");

    let err = match result {
      Err(err) => err,
      Ok(outcome) => panic!("expected an input error, got {:?}", outcome),
    };
    assert!(matches!(
      err.downcast_ref::<InputError>(),
      Some(InputError::Invalid { .. })
    ));
    assert!(!out.contains("CALCULATED POINTS"));
    assert!(recorder.figures.is_empty());
  }

  #[test]
  fn text_at_any_prompt_stops_the_run() {
    for i in 0..5 {
      let mut lines = vec!["4"; 5];
      lines[i] = "abc";
      let (result, out, recorder) = run_with(&(lines.join("\n") + "\n"));

      let err = match result {
        Err(err) => err,
        Ok(outcome) => panic!("line {}: got {:?}", i + 1, outcome),
      };
      assert!(matches!(
        err.downcast_ref::<InputError>(),
        Some(InputError::Invalid { .. })
      ));
      // prompts are numbered 1 to 5
      for later in i + 2..=5 {
        assert!(!out.contains(&format!("{}. ", later)), "asked for {}", later);
      }
      assert!(!out.contains("CALCULATED POINTS"));
      assert!(recorder.figures.is_empty());
    }
  }

  #[test]
  fn renderer_errors_propagate() {
    struct Broken;
    impl Render for Broken {
      fn render(&mut self, _: &Figure) -> Result<()> { bail!("no display") }
    }

    let mut out = vec![];
    let result = plot(
      LineParams::new(2.0, -1.0, 3.0),
      ViewBounds::new(5.0, 5.0),
      &StyleConfig::default(),
      &mut out,
      &mut Broken,
    );
    assert!(result.is_err());
  }
}
