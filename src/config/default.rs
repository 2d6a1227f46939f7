use crate::config::fonts::FONTS;
use crate::config::properties::CSS_PROPERTIES;
use crate::config::selectors::SELECTORS;
use crate::config::{StyleConfig, DEFAULT_MAX_CSS_LEN};

lazy_static! {
    pub static ref LISTING_STYLE_CONFIG: StyleConfig = StyleConfig {
        allowed_selectors: SELECTORS.clone(),
        allowed_properties: CSS_PROPERTIES.clone(),
        allowed_fonts: FONTS.clone(),
        banned_tokens: vec![
            "@import",
            "url(",
            "expression(",
            "javascript:",
            "behavior:",
            "-moz-binding",
            "<script",
            "</style",
            "@keyframes",
        ],
        banned_value_tokens: vec!["url(", "@import", "expression(", "javascript:", "<"],
        blocked_functions: hashset! {
            "url",
            "expression",
            "image",
            "image-set",
            "-webkit-image-set",
            "cross-fade",
            "element",
        },
        max_len: DEFAULT_MAX_CSS_LEN,
    };
}
