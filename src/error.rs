use crate::{chart::Point, input::Field};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
  #[error("{field} is not a valid number: {value:?}")]
  Invalid { field: Field, value: String },
  #[error("input closed before {field} was entered")]
  Closed { field: Field },
  #[error("could not read input: {0}")]
  Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DegenerateInput {
  #[error("Slopes are identical. The lines will never intersect.")]
  IdenticalSlopes,
  /// The intersection exists but the second line runs parallel to the x-axis.
  #[error("Second slope is 0, line will never intersect the x-axis.")]
  FlatSecondLine { intersection: Point },
}
