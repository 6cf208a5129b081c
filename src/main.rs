//! No-argument entry point that bundles the current directory's sources.

use std::env;

use anyhow::{Context, Result};
use onefile_bundler::{ProjectConfig, write_onefile};

fn main() -> Result<()> {
  let root = env::current_dir().context("failed to determine the working directory")?;
  let layout = ProjectConfig::discover(&root).into_layout();
  write_onefile(&layout, &root)?;
  Ok(())
}
