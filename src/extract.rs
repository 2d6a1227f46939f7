use regex::Regex;
use serde_json::Value;

use crate::document::{ListingContent, StandardListing};
use crate::error::{ListingError, ListingResult};

lazy_static! {
    static ref CODE_FENCE: Regex = Regex::new(r"(?i)```(?:json)?").unwrap();
}

/// Pulls the JSON object out of raw model output.
///
/// Code fences are removed and the text between the first `{` and the last `}` is parsed, so
/// commentary before or after the object is ignored. A stray brace in that commentary will still
/// throw the slice off.
pub fn extract_json(raw: &str) -> ListingResult<Value> {
    let text = CODE_FENCE.replace_all(raw, "");
    let (start, end) = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => return Err(ListingError::Parse("no JSON object found".to_string())),
    };
    serde_json::from_str(&text[start..=end]).map_err(|e| ListingError::Parse(e.to_string()))
}

/// Extracts and validates a premium listing document.
pub fn parse_listing(raw: &str) -> ListingResult<ListingContent> {
    extract_json(raw).map(ListingContent::from_value)
}

/// Extracts and validates a standard listing.
pub fn parse_standard_listing(raw: &str) -> ListingResult<StandardListing> {
    extract_json(raw).map(StandardListing::from_value)
}
