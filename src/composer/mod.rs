use tracing::debug;

use crate::config::{RenderConfig, StyleConfig};
use crate::document::ListingContent;
use crate::fonts::FontSelection;
use crate::sanitizer::StyleSanitizer;

pub mod sections;
pub mod standard;

pub use standard::render_standard_listing;

use sections::SECTIONS;

/// Contrast rules appended after the theme, so no theme can make the details list or the
/// condition table unreadable.
pub const BASELINE_CSS: &str = "\
.details-list { display: grid; grid-template-columns: minmax(120px, 1fr) 2fr; gap: 6px 16px; }
.details-list dt { font-weight: 600; color: #1a1a1a; background-color: #f4f4f4; padding: 6px 10px; }
.details-list dd { margin: 0; color: #1a1a1a; background-color: #ffffff; padding: 6px 10px; }
.condition-table { border-collapse: collapse; width: 100%; }
.condition-table th, .condition-table td { color: #1a1a1a; background-color: #ffffff; border: 1px solid #d0d0d0; padding: 6px 10px; text-align: left; }
";

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders premium listings into the fixed template.
pub struct ListingComposer<'a> {
    config: &'a RenderConfig,
    style: StyleConfig,
}

impl<'a> ListingComposer<'a> {
    pub fn new(config: &'a RenderConfig) -> ListingComposer<'a> {
        ListingComposer {
            config,
            style: config.style_config(),
        }
    }

    pub fn render(&self, content: &ListingContent) -> String {
        let presentation = &content.presentation;
        let fonts = FontSelection::select(&presentation.fonts, &self.style, self.config.max_fonts);
        let font_link = fonts.link_tag(&self.config.font_weights);
        let css = StyleSanitizer::new(&self.style).sanitize(&presentation.css);
        debug!(
            fonts = ?fonts.families,
            css_len = css.len(),
            "composing listing"
        );

        let title = if content.seo.ebay_title.trim().is_empty() {
            &content.hero.main_title
        } else {
            &content.seo.ebay_title
        };

        let mut html = String::with_capacity(4096 + css.len());
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        if !font_link.is_empty() {
            html.push_str(&font_link);
            html.push('\n');
        }
        html.push_str("<style>\n");
        html.push_str(&css);
        html.push_str(BASELINE_CSS);
        html.push_str("</style>\n</head>\n<body>\n<div class=\"listing\">\n");
        for section in SECTIONS {
            (section.render)(content, &mut html);
        }
        html.push_str("</div>\n</body>\n</html>\n");
        html
    }
}

/// Renders a premium listing with the default configuration.
pub fn render_listing(content: &ListingContent) -> String {
    ListingComposer::new(&RenderConfig::default()).render(content)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn document_skeleton() {
        let html = render_listing(&ListingContent::default());
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n"));
        assert!(html.contains("<title></title>"));
        assert!(!html.contains("<link"));
        assert!(html.contains(&format!("<style>\n{}</style>", BASELINE_CSS)));
        assert!(html.ends_with("</div>\n</body>\n</html>\n"));
        assert!(!html.contains("undefined"));
        assert!(!html.contains("null"));
    }

    #[test]
    fn theme_and_fonts_precede_baseline() {
        let mut content = ListingContent::default();
        content.presentation.fonts = vec!["Oswald".to_string(), "Roboto".to_string()];
        content.presentation.css = ".hero { color: gold } .evil { color: red }".to_string();
        let html = render_listing(&content);

        let link = html.find("<link rel=\"stylesheet\"").unwrap();
        let style = html.find("<style>").unwrap();
        let theme = html.find(".hero { color: gold; }").unwrap();
        let baseline = html.find(BASELINE_CSS).unwrap();
        assert!(link < style && style < theme && theme < baseline);
        assert!(html.contains("family=Oswald"));
        assert!(!html.contains("Roboto"));
        assert!(!html.contains(".evil"));
    }

    #[test]
    fn over_cap_theme_keeps_baseline_intact() {
        let mut content = ListingContent::default();
        content.presentation.css =
            ".hero { color: #123456; background-color: #abcdef }\n".repeat(400);
        let html = render_listing(&content);

        let start = html.find("<style>\n").unwrap() + "<style>\n".len();
        let end = html.find("</style>").unwrap();
        let style = &html[start..end];
        assert_eq!(style.matches('{').count(), style.matches('}').count());
        assert!(style.ends_with(BASELINE_CSS));
        assert!(style.contains("; }\n.details-list { display: grid;"));
    }

    #[test]
    fn title_prefers_seo_title() {
        let mut content = ListingContent::default();
        content.hero.main_title = "Walkman".to_string();
        assert!(render_listing(&content).contains("<title>Walkman</title>"));
        content.seo.ebay_title = "Sony Walkman <WM-2>".to_string();
        assert!(render_listing(&content).contains("<title>Sony Walkman &lt;WM-2&gt;</title>"));
    }

    #[test]
    fn honours_font_cap_from_config() {
        let config = RenderConfig {
            max_fonts: 1,
            ..RenderConfig::default()
        };
        let mut content = ListingContent::default();
        content.presentation.fonts = vec!["Lora".to_string(), "Cinzel".to_string()];
        let html = ListingComposer::new(&config).render(&content);
        assert!(html.contains("family=Lora"));
        assert!(!html.contains("family=Cinzel"));
    }
}
