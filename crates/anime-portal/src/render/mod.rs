//! HTML rendering of view models.
//!
//! Produces the markup regions the static pages expect, keyed by the same
//! element ids and class names the site's stylesheet targets. All text goes
//! through `escape`.

mod components;

pub use components::{
    details_outcome, form_message, latest_updates, movie_grid, search_results, show_grid, slides,
    top_rated,
};

use crate::pages::HomeView;

/// Escape text for HTML element content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a body in a full document
pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<link rel=\"stylesheet\" href=\"assets/css/style.css\">\n\
         </head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// Homepage body: carousel, latest updates, top rated
pub fn home(view: &HomeView) -> String {
    format!(
        "<section class=\"carousel\">\n{}\n<button class=\"prev\">&#10094;</button>\
         <button class=\"next\">&#10095;</button>\n</section>\n\
         <section class=\"latest-updates\">\n<h2>Latest Updates</h2>\n<div class=\"grid\">\n{}\n</div>\n</section>\n\
         <section class=\"top-rated\">\n<h2>Top Rated</h2>\n<ul>\n{}\n</ul>\n</section>",
        slides(&view.slides),
        latest_updates(&view.latest_updates),
        top_rated(&view.top_rated),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("Tom & Jerry's <\"show\">"), "Tom &amp; Jerry&#39;s &lt;&quot;show&quot;&gt;");
        assert_eq!(escape("鋼の錬金術師"), "鋼の錬金術師");
    }

    #[test]
    fn test_document_escapes_title() {
        let html = document("A <b> - Portal", "<p>body</p>");
        assert!(html.contains("<title>A &lt;b&gt; - Portal</title>"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_home_regions() {
        let view = HomeView {
            slides: Vec::new(),
            latest_updates: Vec::new(),
            top_rated: Vec::new(),
        };
        let html = home(&view);
        assert!(html.contains("class=\"latest-updates\""));
        assert!(html.contains("class=\"top-rated\""));
    }
}
