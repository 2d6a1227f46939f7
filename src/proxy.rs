//! Seam to the serverless model proxy.
//!
//! The HTTP side lives outside this crate; callers implement [`ModelProxy`] over whatever client
//! they use. The only recovery done here is a single retry when the proxy reports rate limiting.

use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ProxyError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Public URLs of the uploaded product photos.
    pub image_urls: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub text: String,
    pub usage: TokenUsage,
}

pub trait ModelProxy {
    fn generate(&self, request: &GenerationRequest) -> Result<Generation, ProxyError>;
}

impl<P: ModelProxy + ?Sized> ModelProxy for &P {
    fn generate(&self, request: &GenerationRequest) -> Result<Generation, ProxyError> {
        (**self).generate(request)
    }
}

impl<P: ModelProxy + ?Sized> ModelProxy for Box<P> {
    fn generate(&self, request: &GenerationRequest) -> Result<Generation, ProxyError> {
        (**self).generate(request)
    }
}

/// Calls the proxy, retrying exactly once after `delay` if the first attempt was rate limited.
pub fn generate_with_retry<P: ModelProxy + ?Sized>(
    proxy: &P,
    request: &GenerationRequest,
    delay: Duration,
) -> Result<Generation, ProxyError> {
    match proxy.generate(request) {
        Err(ProxyError::RateLimited) => {
            warn!(delay_ms = delay.as_millis() as u64, "model proxy rate limited, retrying once");
            thread::sleep(delay);
            proxy.generate(request)
        }
        result => result,
    }
}
