//! Project configuration loader naming the bundle sources and output.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::project::BundleLayout;

const DEFAULT_CONFIG_FILE: &str = "onefile.config.json";

/// Discoverable project configuration naming the files the bundler uses.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
  /// Stylesheet source file, relative to the project root.
  pub stylesheet_file: String,
  /// Script source file, relative to the project root.
  pub script_file: String,
  /// Bundled HTML document, relative to the project root.
  pub output_file: String,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      stylesheet_file: "style.css".into(),
      script_file: "script.js".into(),
      output_file: "onefile.html".into(),
    }
  }
}

impl ProjectConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// When the configuration file does not exist or fails to parse we fall back to default
  /// values so downstream callers can continue operating with sensible assumptions.
  pub fn discover(project_dir: &Path) -> Self {
    let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }

  /// Convert the configuration into an owned layout description.
  pub fn into_layout(self) -> BundleLayout {
    BundleLayout {
      stylesheet_file: self.stylesheet_file,
      script_file: self.script_file,
      output_file: self.output_file,
    }
  }

  /// Borrowing conversion into a layout, cloning the underlying strings.
  pub fn to_layout(&self) -> BundleLayout {
    BundleLayout {
      stylesheet_file: self.stylesheet_file.clone(),
      script_file: self.script_file.clone(),
      output_file: self.output_file.clone(),
    }
  }
}
