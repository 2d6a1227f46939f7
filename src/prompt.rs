//! Prompt text sent to the model for each marketplace.
//!
//! The prompt is a fixed concatenation of instruction blocks. Pro mode asks for the premium
//! document and restates the template's selectors, properties and fonts so the model only writes
//! CSS that survives sanitizing.

use std::fmt;

use clap::ValueEnum;

use crate::config::fonts::FONT_LIST;
use crate::config::properties::CSS_PROPERTIES;
use crate::config::selectors::SELECTOR_LIST;
use crate::config::{DEFAULT_MAX_CSS_LEN, DEFAULT_MAX_FONTS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Platform {
    Ebay,
    Etsy,
    Vinted,
    Depop,
    Facebook,
}

impl Platform {
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Ebay => "eBay",
            Platform::Etsy => "Etsy",
            Platform::Vinted => "Vinted",
            Platform::Depop => "Depop",
            Platform::Facebook => "Facebook Marketplace",
        }
    }

    pub fn title_limit(self) -> usize {
        match self {
            Platform::Ebay => 80,
            Platform::Etsy => 140,
            Platform::Vinted => 100,
            Platform::Depop => 65,
            Platform::Facebook => 99,
        }
    }

    fn guidance(self) -> &'static str {
        match self {
            Platform::Ebay => "Lead the title with brand, model and the most searched keywords. Fill item specifics the way eBay category filters expect them.",
            Platform::Etsy => "Write warmly and emphasise craftsmanship, era and story. Front-load the title with the terms buyers search for.",
            Platform::Vinted => "Keep the tone friendly and concise. Mention size, brand and any flaws plainly.",
            Platform::Depop => "Use a casual, style-led voice. Mention fit, era and styling ideas.",
            Platform::Facebook => "Keep it short and local-buyer friendly. Put the key facts first.",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

const VISION_INSTRUCTIONS: &str = "\
You are an expert resale listing writer. Study every attached product photo closely.
Identify the item, brand, model, era, materials, markings and visible condition.
Only state facts you can see or reliably infer from the photos. Never invent serial numbers, \
provenance or measurements.";

const STANDARD_SCHEMA: &str = r#"Respond with a single JSON object and nothing else:
{
  "title": "listing title",
  "item_specifics": { "brand": "", "model": "", "type": "", "era": "", "color": "", "material": "" },
  "description": "plain-text description, paragraphs separated by blank lines",
  "condition_report": "plain-text condition notes",
  "condition_report_grade": "one of A, B+, B, C, D"
}"#;

const PREMIUM_SCHEMA: &str = r#"Respond with a single JSON object and nothing else:
{
  "hero": { "era_tag": "", "main_title": "", "sub_title": "", "author_line": "" },
  "seo": { "ebay_title": "" },
  "badges": ["short badge"],
  "about": { "paragraphs": ["paragraph"] },
  "details": { "items": [{ "label": "", "value": "" }] },
  "condition": { "overall": "", "components": [{ "part": "", "status": "" }] },
  "contents": ["included item"],
  "collector_points": ["point"],
  "nostalgia": { "title": "", "text": "" },
  "cta": { "headline": "", "sub": "" },
  "presentation": { "fonts": ["font family"], "css": "theme CSS" }
}
All text is plain text. Do not put HTML in any field."#;

fn platform_block(platform: Platform) -> String {
    format!(
        "Marketplace: {}. The title must be at most {} characters. {}",
        platform.display_name(),
        platform.title_limit(),
        platform.guidance()
    )
}

fn presentation_block() -> String {
    let mut properties: Vec<_> = CSS_PROPERTIES.iter().copied().collect();
    properties.sort_unstable();
    format!(
        "Theme the listing through presentation.css. Use only these selectors: {}.\n\
         Use only these properties (custom properties starting with -- are also allowed): {}.\n\
         Do not use @import, @media, @keyframes, url(), comments or nested rules. Keep the CSS \
         under {} characters.\n\
         Pick at most {} fonts for presentation.fonts from: {}.",
        SELECTOR_LIST.join(", "),
        properties.join(", "),
        DEFAULT_MAX_CSS_LEN,
        DEFAULT_MAX_FONTS,
        FONT_LIST.join(", ")
    )
}

/// Builds the prompt for `platform`; `pro_mode` selects the premium document.
pub fn build_prompt(platform: Platform, pro_mode: bool) -> String {
    let mut blocks = vec![VISION_INSTRUCTIONS.to_string(), platform_block(platform)];
    if pro_mode {
        blocks.push(PREMIUM_SCHEMA.to_string());
        blocks.push(presentation_block());
    } else {
        blocks.push(STANDARD_SCHEMA.to_string());
    }
    blocks.join("\n\n")
}
