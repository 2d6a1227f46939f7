use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::config::default::LISTING_STYLE_CONFIG;
use crate::config::StyleConfig;
use crate::css_parser::{parse_css_stylesheet, CssStyleRule};

lazy_static! {
    static ref CSS_COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
}

/// Turns model-written CSS into a stylesheet that only touches the listing template.
///
/// Sanitizing never fails. Input that cannot be parsed reliably produces an empty stylesheet and
/// the listing falls back to its baseline look.
pub struct StyleSanitizer<'a> {
    config: &'a StyleConfig,
    banned: Option<Regex>,
}

impl<'a> StyleSanitizer<'a> {
    pub fn new(config: &'a StyleConfig) -> StyleSanitizer<'a> {
        StyleSanitizer {
            config,
            banned: banned_token_regex(&config.banned_tokens),
        }
    }

    pub fn sanitize(&self, css: &str) -> String {
        let stripped = self.strip_banned_tokens(css);
        let stripped = CSS_COMMENT.replace_all(&stripped, "");

        let opening = stripped.matches('{').count();
        let closing = stripped.matches('}').count();
        if opening != closing {
            warn!(opening, closing, "unbalanced braces in stylesheet, dropping all CSS");
            return String::new();
        }

        let mut output = String::new();
        let mut output_len = 0;
        for rule in parse_css_stylesheet(&stripped, self.config) {
            let (rule, parsed) = match self.filter_rule(rule) {
                Some(rule) => (rule.to_string(), rule),
                None => continue,
            };
            if self.contains_banned_token(&rule) {
                debug!(%rule, "CSS rule dropped, banned construct after comment removal");
                continue;
            }
            if !self.round_trips(&rule, &parsed) {
                debug!(%rule, "CSS rule dropped, printed form parses differently");
                continue;
            }
            // Only whole rules are emitted, so the cap never leaves a block open.
            let rule_len = rule.chars().count() + 1;
            if output_len + rule_len > self.config.max_len {
                debug!(max_len = self.config.max_len, "stylesheet cap reached");
                break;
            }
            output.push_str(&rule);
            output.push('\n');
            output_len += rule_len;
        }

        output
    }

    /// Removes banned constructs until none are left, so stripping cannot splice a new one
    /// together out of the surrounding text.
    fn strip_banned_tokens(&self, css: &str) -> String {
        let banned = match self.banned {
            Some(ref banned) => banned,
            None => return css.to_string(),
        };
        let mut current = css.to_string();
        while banned.is_match(&current) {
            current = banned.replace_all(&current, "").into_owned();
        }
        current
    }

    fn contains_banned_token(&self, css: &str) -> bool {
        self.banned.as_ref().map_or(false, |banned| banned.is_match(css))
    }

    /// A printed rule must parse back to itself on its own. Values that only ended because the
    /// input did (an unterminated string or bracket) fail this and would otherwise leave the
    /// block open for whatever follows the stylesheet.
    fn round_trips(&self, printed: &str, rule: &CssStyleRule) -> bool {
        matches!(
            parse_css_stylesheet(printed, self.config).as_slice(),
            [reparsed] if reparsed == rule
        )
    }

    fn filter_rule(&self, mut rule: CssStyleRule) -> Option<CssStyleRule> {
        if let Some(selector) = rule
            .selectors
            .iter()
            .find(|selector| !self.config.allowed_selectors.contains(selector.as_str()))
        {
            debug!(%selector, selectors = ?rule.selectors, "CSS rule dropped, selector not allowed");
            return None;
        }

        rule.declarations.retain(|declaration| {
            let allowed = declaration.property.starts_with("--")
                || self
                    .config
                    .allowed_properties
                    .contains(declaration.property.as_str());
            if !allowed {
                debug!(property = %declaration.property, "CSS declaration dropped, property not allowed");
                return false;
            }
            let value = declaration.value.to_ascii_lowercase();
            if let Some(token) = self
                .config
                .banned_value_tokens
                .iter()
                .find(|token| value.contains(*token))
            {
                debug!(property = %declaration.property, token, "CSS declaration dropped, banned value");
                return false;
            }
            true
        });

        if rule.declarations.is_empty() {
            None
        } else {
            Some(rule)
        }
    }
}

fn banned_token_regex(tokens: &[&str]) -> Option<Regex> {
    if tokens.is_empty() {
        return None;
    }
    let pattern = tokens
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()
}

/// Sanitizes `css` against the listing template profile.
pub fn sanitize_css(css: &str) -> String {
    StyleSanitizer::new(&LISTING_STYLE_CONFIG).sanitize(css)
}
