//! The fixed HTML skeleton a onefile document is rendered from.

/// Render the single-file HTML document for the given stylesheet and
/// script contents.
///
/// Both blobs are inserted verbatim with no escaping and no trimming.
/// The surrounding skeleton is fixed: a `<style>` block, two blank lines,
/// an empty `<body></body>`, two blank lines and a `<script>` block, with
/// no trailing newline after the closing tag. The output is a pure
/// function of the two arguments, so identical inputs always produce a
/// byte-identical document.
pub fn render_document(stylesheet: &str, script: &str) -> String {
  format!(
    r#"<style>
{stylesheet}
</style>


<body></body>


<script>
{script}
</script>"#
  )
}

#[cfg(test)]
mod tests {
  use super::render_document;

  #[test]
  fn renders_contents_into_the_fixed_skeleton() {
    let html = render_document("body{color:red}", "console.log(1)");

    assert_eq!(
      html,
      "<style>\nbody{color:red}\n</style>\n\n\n<body></body>\n\n\n<script>\nconsole.log(1)\n</script>"
    );
  }

  #[test]
  fn renders_empty_inputs_as_blank_lines() {
    let html = render_document("", "");

    assert_eq!(
      html,
      "<style>\n\n</style>\n\n\n<body></body>\n\n\n<script>\n\n</script>"
    );
  }

  #[test]
  fn does_not_escape_closing_tags_inside_content() {
    let html = render_document("/* </style> */", "let tag = \"</script>\";");

    assert!(html.contains("/* </style> */"));
    assert!(html.contains("let tag = \"</script>\";"));
  }

  #[test]
  fn preserves_internal_newlines_and_trailing_whitespace() {
    let stylesheet = "a {\n  color: blue;\n}\n\n";
    let script = "first();\nsecond();  ";
    let html = render_document(stylesheet, script);

    assert!(html.contains("<style>\na {\n  color: blue;\n}\n\n\n</style>"));
    assert!(html.contains("<script>\nfirst();\nsecond();  \n</script>"));
  }

  #[test]
  fn emits_no_trailing_newline() {
    let html = render_document("css", "js");

    assert!(html.ends_with("</script>"));
  }
}
