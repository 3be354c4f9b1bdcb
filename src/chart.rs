pub mod figure;
pub mod geometry;
pub mod line;

pub use self::figure::{Figure, Ink, Stroke};
pub use self::geometry::{LineParams, Solution, ViewBounds};
pub use self::line::{Point, Segment};
