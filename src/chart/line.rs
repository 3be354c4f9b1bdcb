use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

  pub fn new(x: f64, y: f64) -> Self { Point { x, y } }

  // unlike f64::clamp, an inverted range does not panic
  pub fn clamp(self, (x0, x1): (f64, f64), (y0, y1): (f64, f64)) -> Self {
    Point {
      x: self.x.max(x0).min(x1),
      y: self.y.max(y0).min(y1),
    }
  }
}

impl From<Point> for (f64, f64) {
  fn from(p: Point) -> Self { (p.x, p.y) }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Segment(pub Point, pub Point);

impl Segment {
  pub fn new(start: Point, end: Point) -> Self { Segment(start, end) }
  pub fn start(&self) -> Point { self.0 }
  pub fn end(&self) -> Point { self.1 }

  pub fn length(&self) -> f64 {
    (self.1.x - self.0.x).hypot(self.1.y - self.0.y)
  }

  pub fn slope(&self) -> Option<f64> {
    let run = self.1.x - self.0.x;
    if run == 0.0 {
      return None;
    }
    Some((self.1.y - self.0.y) / run)
  }

  pub fn lerp(&self, t: f64) -> Point {
    Point {
      x: self.0.x + (self.1.x - self.0.x) * t,
      y: self.0.y + (self.1.y - self.0.y) * t,
    }
  }

  /// Cuts the segment into pieces `dash` long separated by `gap`, walking
  /// from start to end. The last dash is clipped to the end point.
  pub fn dashes(&self, dash: f64, gap: f64) -> Vec<Segment> {
    let length = self.length();
    if !length.is_finite() || length <= 0.0 || dash.is_nan() || dash <= 0.0 {
      return vec![*self];
    }
    let stride = dash + gap.max(0.0);

    let mut dashes = vec![];
    let mut along = 0f64;
    while along < length {
      let end = (along + dash).min(length);
      dashes.push(Segment(self.lerp(along / length), self.lerp(end / length)));
      along += stride;
    }
    dashes
  }

  /// The part of the segment inside the box `[x0, x1] x [y0, y1]`, if any.
  pub fn clip(
    &self,
    (x0, x1): (f64, f64),
    (y0, y1): (f64, f64),
  ) -> Option<Segment> {
    let dx = self.1.x - self.0.x;
    let dy = self.1.y - self.0.y;
    let (mut t0, mut t1) = (0f64, 1f64);

    for (p, q) in [
      (-dx, self.0.x - x0),
      (dx, x1 - self.0.x),
      (-dy, self.0.y - y0),
      (dy, y1 - self.0.y),
    ] {
      if p == 0.0 {
        // parallel to this edge and outside it
        if q < 0.0 {
          return None;
        }
        continue;
      }
      let t = q / p;
      if p < 0.0 {
        t0 = t0.max(t);
      } else {
        t1 = t1.min(t);
      }
      if t0 > t1 {
        return None;
      }
    }

    // lerp can land an ulp past the edge; renderers drop such points
    let inside = |p: Point| p.clamp((x0, x1), (y0, y1));
    Some(Segment(inside(self.lerp(t0)), inside(self.lerp(t1))))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dashes_cover_segment_in_order() {
    let s = Segment::new(Point::ORIGIN, Point::new(10.0, 0.0));
    let dashes = s.dashes(2.0, 1.0);

    // 0-2, 3-5, 6-8, 9-10
    assert_eq!(dashes.len(), 4);
    assert_eq!(dashes[0], Segment::new(Point::ORIGIN, Point::new(2.0, 0.0)));
    assert_eq!(dashes[1].start(), Point::new(3.0, 0.0));
    assert_eq!(dashes[3].end(), Point::new(10.0, 0.0));
    assert!(dashes.windows(2).all(|w| w[0].end().x < w[1].start().x));
  }

  #[test]
  fn clip_keeps_inside_part() {
    let window = ((0.0, 4.0), (0.0, 4.0));
    let s = Segment::new(Point::new(2.0, 2.0), Point::new(6.0, 2.0));
    assert_eq!(
      s.clip(window.0, window.1),
      Some(Segment::new(Point::new(2.0, 2.0), Point::new(4.0, 2.0)))
    );

    let inside = Segment::new(Point::new(1.0, 1.0), Point::new(3.0, 3.0));
    assert_eq!(inside.clip(window.0, window.1), Some(inside));

    // crosses the corner region without entering
    let outside = Segment::new(Point::new(-1.0, 4.0), Point::new(3.0, 8.0));
    assert_eq!(outside.clip(window.0, window.1), None);

    let left = Segment::new(Point::new(-2.0, 1.0), Point::new(-2.0, 3.0));
    assert_eq!(left.clip(window.0, window.1), None);
  }

  #[test]
  fn clipped_ends_never_leave_the_box() {
    // y = 5.18 * x meets y = 0.84 at an x whose lerp rounds past 0.84
    let s = Segment::new(Point::ORIGIN, Point::new(1.0, 5.18));
    let window = ((0.0, 1.1), (0.0, 0.84));
    let clipped = s.clip(window.0, window.1);

    assert!(clipped.is_some());
    for p in clipped.iter().flat_map(|c| [c.start(), c.end()]) {
      assert!(p.x >= 0.0 && p.x <= 1.1);
      assert!(p.y >= 0.0 && p.y <= 0.84, "{} escapes the box", p.y);
    }
  }

  #[test]
  fn slope_of_vertical_is_none() {
    let s = Segment::new(Point::new(2.0, 1.0), Point::new(2.0, 5.0));
    assert_eq!(s.slope(), None);

    let s = Segment::new(Point::new(1.0, 1.0), Point::new(3.0, -3.0));
    assert_eq!(s.slope(), Some(-2.0));
  }

  #[test]
  fn dashes_of_point_is_itself() {
    let s = Segment::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0));
    assert_eq!(s.dashes(0.5, 0.5), vec![s]);

    let s = Segment::new(Point::ORIGIN, Point::new(0.0, 4.0));
    assert_eq!(s.dashes(0.0, 1.0), vec![s]);
  }
}
