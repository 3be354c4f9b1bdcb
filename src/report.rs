use crate::prelude::*;
use std::fmt;

const RULE_WIDTH: usize = 40;

pub struct Report<'a>(pub &'a Solution);

impl fmt::Display for Report<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    let Solution {
      intersection: p,
      x_intercept: end,
    } = self.0;

    writeln!(f)?;
    writeln!(f, "{}", rule)?;
    writeln!(f, "           CALCULATED POINTS           ")?;
    writeln!(f, "{}", rule)?;
    writeln!(f, "Intersection of Function 1 & 2: ({:.4}, {:.4})", p.x, p.y)?;
    writeln!(
      f,
      "Function 2 X-Axis Intercept:    ({:.4}, {:.4})",
      end.x, end.y
    )?;
    writeln!(f, "{}\n", rule)
  }
}

pub fn diagnostic(err: &impl fmt::Display) -> String {
  format!("\n[!] Error: {}", err)
}
