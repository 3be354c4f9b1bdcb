use super::{Point, Segment};
use crate::error::DegenerateInput;
use serde::Serialize;

/// Line A is `y = m1 * x`, line B is `y = m2 * x + c2`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct LineParams {
  pub m1: f64,
  pub m2: f64,
  pub c2: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ViewBounds {
  pub x_limit: f64,
  pub y_limit: f64,
}

impl ViewBounds {
  pub fn new(x_limit: f64, y_limit: f64) -> Self {
    ViewBounds { x_limit, y_limit }
  }

  pub fn is_viewable(&self) -> bool {
    self.x_limit.is_finite()
      && self.y_limit.is_finite()
      && self.x_limit > 0.0
      && self.y_limit > 0.0
  }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Solution {
  pub intersection: Point,
  pub x_intercept: Point,
}

impl LineParams {
  pub fn new(m1: f64, m2: f64, c2: f64) -> Self { LineParams { m1, m2, c2 } }

  pub fn solve(&self) -> Result<Solution, DegenerateInput> {
    if self.m1 == self.m2 {
      return Err(DegenerateInput::IdenticalSlopes);
    }

    // m1 * x = m2 * x + c2
    let x = self.c2 / (self.m1 - self.m2);
    let intersection = Point::new(x, self.m1 * x);

    if self.m2 == 0.0 {
      return Err(DegenerateInput::FlatSecondLine { intersection });
    }

    Ok(Solution {
      intersection,
      x_intercept: Point::new(-self.c2 / self.m2, 0.0),
    })
  }
}

impl Solution {
  pub fn segment_a(&self) -> Segment {
    Segment::new(Point::ORIGIN, self.intersection)
  }

  pub fn segment_b(&self) -> Segment {
    Segment::new(self.intersection, self.x_intercept)
  }

  pub fn vertical_guide(&self) -> Segment {
    Segment::new(Point::new(self.intersection.x, 0.0), self.intersection)
  }

  pub fn horizontal_guide(&self) -> Segment {
    Segment::new(Point::new(0.0, self.intersection.y), self.intersection)
  }
}
