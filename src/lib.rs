//! Renders model-written marketplace listings into safe HTML.
//!
//! Raw model output goes through [`extract`] into a typed document, then [`composer`] renders it
//! into a fixed template. The model's theme CSS is filtered by [`sanitizer`] against the
//! template's selector and property allowlists, and requested fonts are filtered by [`fonts`].

#![warn(clippy::all)]
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;

pub mod composer;
pub mod config;
pub mod css_parser;
pub mod document;
pub mod error;
pub mod extract;
pub mod fonts;
pub mod pipeline;
pub mod prompt;
pub mod proxy;
pub mod sanitizer;

pub use composer::{escape_html, render_listing, render_standard_listing, ListingComposer};
pub use config::{RenderConfig, StyleConfig};
pub use document::{ListingContent, StandardListing};
pub use error::{ListingError, ListingResult, ProxyError};
pub use extract::{extract_json, parse_listing, parse_standard_listing};
pub use fonts::{google_fonts_link, FontSelection};
pub use pipeline::{generate_listing, render_model_output, ListingMode, RenderedListing};
pub use prompt::{build_prompt, Platform};
pub use proxy::{generate_with_retry, Generation, GenerationRequest, ModelProxy, TokenUsage};
pub use sanitizer::{sanitize_css, StyleSanitizer};
