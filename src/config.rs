use crate::prelude::*;
use std::{
  env, fs,
  path::{Path, PathBuf},
};

const CONF_FILE: &str = "line_cross.json";
const CONF_ENV: &str = "LINE_CROSS_CONFIG";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
  pub style: StyleConfig,
  pub output: OutputConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
  // stroke weight of both functions and of the visible spines
  pub line_width: f64,
  pub guide_width: f64,
  pub ink: Ink,
  pub background: Ink,
  // dash and gap as a fraction of the viewport diagonal
  pub dash_ratio: f64,
  pub gap_ratio: f64,
  pub ticks: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
  pub mode: RenderMode,
  // text mode only, stdout when unset
  pub path: Option<PathBuf>,
  pub width: u16,
  pub height: u16,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
  Terminal,
  Text,
}

impl ::std::default::Default for StyleConfig {
  fn default() -> Self {
    Self {
      line_width: 1.5,
      guide_width: 1.0,
      ink: Ink::Black,
      background: Ink::White,
      dash_ratio: 0.02,
      gap_ratio: 0.012,
      ticks: 5,
    }
  }
}

impl ::std::default::Default for OutputConfig {
  fn default() -> Self {
    Self {
      mode: RenderMode::Terminal,
      path: None,
      width: 100,
      height: 30,
    }
  }
}

impl Config {
  pub fn load() -> Self {
    let path = Self::path();
    match Self::try_load(&path) {
      Ok(config) => config,
      Err(err) => {
        warn!("Using default config, {}: {:#}", path.display(), err);
        Self::default()
      }
    }
  }

  pub fn path() -> PathBuf {
    env::var_os(CONF_ENV)
      .map(PathBuf::from)
      .unwrap_or_else(|| PathBuf::from(CONF_FILE))
  }

  pub fn try_load(path: &Path) -> Result<Self> {
    if !path.exists() {
      write_default(path);
      return Ok(Self::default());
    }
    let config = serde_json::from_str(&fs::read_to_string(path)?)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
  }
}

fn write_default(path: &Path) {
  let written = serde_json::to_string_pretty(&Config::default())
    .map_err(anyhow::Error::from)
    .and_then(|json| Ok(fs::write(path, json)?));
  match written {
    Ok(()) => info!("Wrote default config to {}", path.display()),
    Err(err) => warn!("Could not write default config: {:#}", err),
  }
}
