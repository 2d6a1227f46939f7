use url::form_urlencoded::byte_serialize;
use url::Url;

use tracing::debug;

use crate::composer::escape_html;
use crate::config::{StyleConfig, DEFAULT_FONT_WEIGHTS, DEFAULT_MAX_FONTS};
use crate::config::default::LISTING_STYLE_CONFIG;

const GOOGLE_FONTS_CSS2: &str = "https://fonts.googleapis.com/css2";

/// Allowlisted font families in the order they were requested.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontSelection {
    pub families: Vec<&'static str>,
}

impl FontSelection {
    pub fn select<S: AsRef<str>>(requested: &[S], config: &StyleConfig, max_fonts: usize) -> FontSelection {
        let families = requested
            .iter()
            .map(|name| name.as_ref().trim())
            .filter(|name| !name.is_empty())
            .filter_map(|name| {
                let family = config.allowed_fonts.get(name).copied();
                if family.is_none() {
                    debug!(font = name, "font not allowed");
                }
                family
            })
            .take(max_fonts)
            .collect();
        FontSelection { families }
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Google Fonts CSS2 stylesheet URL, or `None` when nothing was selected.
    pub fn stylesheet_url(&self, weights: &[u16]) -> Option<Url> {
        if self.is_empty() {
            return None;
        }
        let weights = weights
            .iter()
            .map(|weight| weight.to_string())
            .collect::<Vec<_>>()
            .join(";");
        let mut query = self
            .families
            .iter()
            .map(|family| {
                format!(
                    "family={}:wght@{}",
                    byte_serialize(family.as_bytes()).collect::<String>(),
                    weights
                )
            })
            .collect::<Vec<_>>();
        query.push("display=swap".to_string());

        let mut url = Url::parse(GOOGLE_FONTS_CSS2).ok()?;
        url.set_query(Some(&query.join("&")));
        Some(url)
    }

    pub fn link_tag(&self, weights: &[u16]) -> String {
        match self.stylesheet_url(weights) {
            Some(url) => format!(
                "<link rel=\"stylesheet\" href=\"{}\">",
                escape_html(url.as_str())
            ),
            None => String::new(),
        }
    }
}

/// Builds the stylesheet `<link>` for the first three allowlisted fonts, or `""` if there are none.
pub fn google_fonts_link<S: AsRef<str>>(requested: &[S]) -> String {
    FontSelection::select(requested, &LISTING_STYLE_CONFIG, DEFAULT_MAX_FONTS)
        .link_tag(&DEFAULT_FONT_WEIGHTS)
}
