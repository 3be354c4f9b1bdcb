use crate::prelude::*;
use std::{
  fmt,
  io::{BufRead, Write},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
  FirstSlope,
  SecondSlope,
  SecondIntercept,
  XLimit,
  YLimit,
}

impl Field {
  pub const ALL: [Field; 5] = [
    Field::FirstSlope,
    Field::SecondSlope,
    Field::SecondIntercept,
    Field::XLimit,
    Field::YLimit,
  ];

  fn prompt(self) -> &'static str {
    match self {
      Field::FirstSlope => {
        "1. Slope of the first function (starts at origin): "
      }
      Field::SecondSlope => "2. Slope of the second function: ",
      Field::SecondIntercept => "3. Y-intercept of the second function: ",
      Field::XLimit => "4. Max display range for X-axis: ",
      Field::YLimit => "5. Max display range for Y-axis: ",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Field::FirstSlope => "first slope",
      Field::SecondSlope => "second slope",
      Field::SecondIntercept => "second y-intercept",
      Field::XLimit => "x-axis range",
      Field::YLimit => "y-axis range",
    })
  }
}

pub struct Prompter<R, W> {
  reader: R,
  writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
  pub fn new(reader: R, writer: W) -> Self { Prompter { reader, writer } }

  pub fn collect(&mut self) -> Result<(LineParams, ViewBounds), InputError> {
    writeln!(self.writer, "--- LINEAR FUNCTION PLOTTER INTERFACE ---")?;
    writeln!(self.writer, "Please enter the following parameters:\n")?;

    let mut values = [0f64; 5];
    for (value, field) in values.iter_mut().zip(Field::ALL) {
      if field == Field::XLimit {
        writeln!(self.writer, "\n--- GRAPH SETTINGS ---")?;
      }
      *value = self.read_number(field)?;
    }

    let [m1, m2, c2, x_limit, y_limit] = values;
    debug!("Read m1={} m2={} c2={} x={} y={}", m1, m2, c2, x_limit, y_limit);
    Ok((LineParams::new(m1, m2, c2), ViewBounds::new(x_limit, y_limit)))
  }

  fn read_number(&mut self, field: Field) -> Result<f64, InputError> {
    write!(self.writer, "{}", field.prompt())?;
    self.writer.flush()?;

    let mut line = String::new();
    if self.reader.read_line(&mut line)? == 0 {
      return Err(InputError::Closed { field });
    }
    parse_number(field, &line)
  }
}

pub fn parse_number(field: Field, raw: &str) -> Result<f64, InputError> {
  let trimmed = raw.trim();
  match trimmed.parse::<f64>() {
    Ok(value) if value.is_finite() => Ok(value),
    _ => Err(InputError::Invalid {
      field,
      value: trimmed.to_string(),
    }),
  }
}
