//! Reading the bundle sources and writing the single-file HTML artifact.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bundle::document::render_document;
use crate::project::BundleLayout;

/// Errors raised while producing the onefile document.
#[derive(Debug)]
pub enum BundleError {
  /// An input file could not be opened or read.
  ReadInput {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// The output file could not be created or written.
  WriteOutput {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
}

impl std::fmt::Display for BundleError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::ReadInput { path, .. } => {
        write!(f, "failed to read {}", path.display())
      }
      Self::WriteOutput { path, .. } => {
        write!(f, "failed to write {}", path.display())
      }
    }
  }
}

impl std::error::Error for BundleError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::ReadInput { source, .. } | Self::WriteOutput { source, .. } => Some(source),
    }
  }
}

/// Bundle one stylesheet and one script into a single HTML document.
///
/// Both inputs are read in full before the output is opened, so a missing
/// or unreadable input leaves any existing file at `output_path`
/// untouched. The write truncates an existing output first; a failure
/// during the write itself can therefore leave a truncated document
/// behind. Every file handle is released when the call returns, on the
/// success and the error paths alike.
pub fn bundle(
  stylesheet_path: &Path,
  script_path: &Path,
  output_path: &Path,
) -> Result<(), BundleError> {
  let stylesheet = read_input(stylesheet_path)?;
  let script = read_input(script_path)?;

  let document = render_document(&stylesheet, &script);
  fs::write(output_path, document).map_err(|source| BundleError::WriteOutput {
    path: output_path.to_path_buf(),
    source,
  })
}

/// Bundle the files named by `layout`, resolved against `root`.
///
/// Returns the path of the document that was written.
pub fn write_onefile(layout: &BundleLayout, root: &Path) -> Result<PathBuf, BundleError> {
  let output_path = layout.output_path(root);
  bundle(
    &layout.stylesheet_path(root),
    &layout.script_path(root),
    &output_path,
  )?;
  Ok(output_path)
}

fn read_input(path: &Path) -> Result<String, BundleError> {
  fs::read_to_string(path).map_err(|source| BundleError::ReadInput {
    path: path.to_path_buf(),
    source,
  })
}
