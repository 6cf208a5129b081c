#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod bundle;
pub mod config;
pub mod project;

pub use bundle::document::render_document;
pub use bundle::onefile::{BundleError, bundle, write_onefile};
pub use config::ProjectConfig;
pub use project::BundleLayout;
