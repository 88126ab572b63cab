use std::path::Path;

use super::escape::escape;
use crate::{config::SiteText, quiz::QuizItem};

/// File name of the rendered page for a quiz data file: `css.json` -> `css.html`.
pub fn page_name(file: &str) -> String {
    Path::new(file).with_extension("html").to_string_lossy().into_owned()
}

/// Renders the listing page linking every quiz, in the given order.
pub fn render_index_page(items: &[QuizItem], site: &SiteText) -> String {
    let links = items
        .iter()
        .map(|item| {
            format!(
                r#"<li><a href="./{}">{}</a></li>"#,
                escape(&page_name(item.file())),
                escape(&item.entry.title)
            )
        })
        .collect::<Vec<String>>()
        .join("\n      ");

    format!(
        r#"<!doctype html>
<html>
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{stylesheet}">
  </head>
  <body>
    <h2>{heading}</h2>
    <p>{intro}</p>
    <ul>
      {links}
    </ul>
  </body>
</html>
"#,
        title = escape(&site.title),
        stylesheet = escape(&site.stylesheet),
        heading = escape(&site.heading),
        intro = escape(&site.intro),
        links = links,
    )
}
