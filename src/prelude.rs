pub use crate::{
  chart::{Figure, Ink, LineParams, Point, Solution, ViewBounds},
  config::{Config, OutputConfig, RenderMode, StyleConfig},
  error::{DegenerateInput, InputError},
  render::Render,
};
pub use anyhow::{bail, Result};
pub use log::{debug, info, warn};
pub use serde::{Deserialize, Serialize};

lazy_static! {
  pub static ref CONFIG: Config = Config::load();
}
