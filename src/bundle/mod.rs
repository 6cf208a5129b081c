//! Turning a stylesheet and a script into one self-contained HTML file.

pub mod document;
pub mod onefile;
