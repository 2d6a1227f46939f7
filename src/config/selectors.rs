use std::collections::HashSet;

/// Selectors matching the premium listing template, in template order. The prompt restates this
/// list to the model, so keep it in sync with `composer::sections`.
pub const SELECTOR_LIST: &[&str] = &[
    "body",
    ".listing",
    ".hero",
    ".hero-era",
    ".hero-title",
    ".hero-subtitle",
    ".hero-author",
    ".seo",
    ".seo-title",
    ".badges",
    ".badge",
    ".section",
    ".section-title",
    ".about",
    ".about p",
    ".details",
    ".details-list",
    ".details-list dt",
    ".details-list dd",
    ".condition",
    ".condition-table",
    ".condition-table th",
    ".condition-table td",
    ".contents",
    ".contents-list",
    ".contents-list li",
    ".collector",
    ".collector-list",
    ".collector-list li",
    ".nostalgia",
    ".nostalgia-title",
    ".nostalgia-text",
    ".cta",
    ".cta-headline",
    ".cta-sub",
    "h1",
    "h2",
    "p",
    "ul",
    "li",
];

lazy_static! {
    pub static ref SELECTORS: HashSet<&'static str> = SELECTOR_LIST.iter().copied().collect();
}
