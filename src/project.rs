//! Filesystem layout of a onefile bundle project.

use std::path::{Path, PathBuf};

/// Relative file names the bundler reads from and writes to.
///
/// All three names are interpreted relative to a project root supplied by
/// the caller, so the same layout value works for the real working
/// directory and for temporary test roots.
#[derive(Debug, Clone)]
pub struct BundleLayout {
  /// Stylesheet source inlined into the `<style>` block.
  pub stylesheet_file: String,
  /// Script source inlined into the `<script>` block.
  pub script_file: String,
  /// HTML document the bundler writes.
  pub output_file: String,
}

impl BundleLayout {
  /// Path of the stylesheet source under `root`.
  pub fn stylesheet_path(&self, root: &Path) -> PathBuf {
    root.join(&self.stylesheet_file)
  }

  /// Path of the script source under `root`.
  pub fn script_path(&self, root: &Path) -> PathBuf {
    root.join(&self.script_file)
  }

  /// Path of the bundled HTML document under `root`.
  pub fn output_path(&self, root: &Path) -> PathBuf {
    root.join(&self.output_file)
  }
}
