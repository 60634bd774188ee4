use crate::domain::model::EmbedDocument;

/// Render the standalone shell page around an assembled document.
///
/// Placeholder substitution instead of `format!()`: the template's CSS blocks
/// contain `{}` which would collide with Rust format strings.
pub fn render_shell(document: &EmbedDocument, title: &str, description: &str) -> String {
    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>__TITLE__</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  header p { color: #777; font-size: 14px; margin: 4px 0 0; }
  main { padding: 12px 16px; }
  iframe { width: 100%; border: 1px solid #eee; border-radius: 8px; }
</style>
</head>
<body>
<header>
  <h1>__TITLE__</h1>
  <p>__DESCRIPTION__</p>
</header>
<main>
  <iframe srcdoc="__SRCDOC__" height="__HEIGHT__" scrolling="__SCROLLING__"></iframe>
</main>
</body>
</html>
"#;

    TEMPLATE
        .replace("__TITLE__", &escape_html(title))
        .replace("__DESCRIPTION__", &escape_html(description))
        .replace("__SRCDOC__", &escape_html(&document.html))
        .replace("__HEIGHT__", &document.height.to_string())
        .replace("__SCROLLING__", if document.scrolling { "yes" } else { "no" })
}

// `&` must go first so already-escaped entities are not double-escaped.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
