use tracing::info;

use crate::composer::{render_standard_listing, ListingComposer};
use crate::config::RenderConfig;
use crate::error::ListingResult;
use crate::extract::{parse_listing, parse_standard_listing};
use crate::prompt::{build_prompt, Platform};
use crate::proxy::{generate_with_retry, GenerationRequest, ModelProxy, TokenUsage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingMode {
    /// Flat schema, inline-styled fragment.
    Standard,
    /// Full document with a sanitized theme.
    Premium,
}

impl ListingMode {
    pub fn is_pro(self) -> bool {
        self == ListingMode::Premium
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedListing {
    pub html: String,
    pub usage: TokenUsage,
}

/// Parses raw model output and renders it for `mode`.
pub fn render_model_output(
    raw: &str,
    mode: ListingMode,
    config: &RenderConfig,
) -> ListingResult<String> {
    match mode {
        ListingMode::Premium => {
            let content = parse_listing(raw)?;
            Ok(ListingComposer::new(config).render(&content))
        }
        ListingMode::Standard => {
            let listing = parse_standard_listing(raw)?;
            Ok(render_standard_listing(&listing))
        }
    }
}

/// Builds the prompt, calls the model and renders its answer.
pub fn generate_listing<P: ModelProxy + ?Sized>(
    proxy: &P,
    platform: Platform,
    mode: ListingMode,
    image_urls: Vec<String>,
    config: &RenderConfig,
) -> ListingResult<RenderedListing> {
    let request = GenerationRequest {
        prompt: build_prompt(platform, mode.is_pro()),
        image_urls,
    };
    info!(%platform, ?mode, images = request.image_urls.len(), "requesting listing copy");
    let generation = generate_with_retry(proxy, &request, config.rate_limit_retry_delay())?;
    let html = render_model_output(&generation.text, mode, config)?;
    info!(
        html_len = html.len(),
        input_tokens = generation.usage.input_tokens,
        output_tokens = generation.usage.output_tokens,
        "listing rendered"
    );
    Ok(RenderedListing {
        html,
        usage: generation.usage,
    })
}
