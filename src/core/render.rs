//! Output rendering for search results and HTML pages

use crate::core::error::Result;
use crate::core::types::{BookmarkRecord, Format};

const PAGE_TEMPLATE_HEAD: &str = r#"
<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Bookmarks</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@1/css/pico.min.css" />
    <link rel="icon" type="image/png" href="/favicon.png">
  </head>
  <body>
    <main class="container">
    "#;

const PAGE_TEMPLATE_TAIL: &str = r#"
    </main>
  </body>
</html>
"#;

const INDEX_CONTENT: &str = r#"Go to <a href="https://github.com/ArtBIT/bash-bookmarks">Bash bookmarks</a> for more info."#;

const FORM_CONTENT: &str = r#"
        <form action="/add" method="post">
            <label for="url">Url</label>
            <input type="text" id="url" name="url" required>
            <label for="title">Title</label>
            <input type="text" id="title" name="title" required>
            <label for="category">Category</label>
            <input type="text" id="category" name="category" required>
            <input type="submit" value="Add">
        </form>
"#;

/// Wrap `content` in the shared page template
pub fn page(content: &str) -> String {
    let mut html =
        String::with_capacity(PAGE_TEMPLATE_HEAD.len() + content.len() + PAGE_TEMPLATE_TAIL.len());
    html.push_str(PAGE_TEMPLATE_HEAD);
    html.push_str(content);
    html.push_str(PAGE_TEMPLATE_TAIL);
    html
}

/// Landing page served at `/`
pub fn index_page() -> String {
    page(INDEX_CONTENT)
}

/// Add-bookmark form served at `/form`
pub fn form_page() -> String {
    page(FORM_CONTENT)
}

/// Render search results in the requested format
pub fn render_records(records: &[BookmarkRecord], format: Format) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string(records)?),
        Format::Text => Ok(render_text(records)),
        Format::Html => Ok(render_html(records)),
    }
}

/// One url per line, no trailing newline
pub fn render_text(records: &[BookmarkRecord]) -> String {
    records
        .iter()
        .map(BookmarkRecord::url)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Unordered list of anchors inside the page template
///
/// The anchor target is the record's title and the link text is its url.
/// Existing clients depend on this layout, so it is kept as is.
pub fn render_html(records: &[BookmarkRecord]) -> String {
    let items: String = records
        .iter()
        .map(|r| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                escape_html(r.title()),
                escape_html(r.url())
            )
        })
        .collect();

    page(&format!("<ul>{items}</ul>"))
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
