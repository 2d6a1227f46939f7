use listing_render::config::default::LISTING_STYLE_CONFIG;
use listing_render::config::fonts::FONTS;
use listing_render::config::properties::CSS_PROPERTIES;
use listing_render::config::selectors::SELECTORS;
use listing_render::css_parser::parse_css_stylesheet;
use listing_render::{
    escape_html, render_listing, sanitize_css, FontSelection, ListingContent, StyleConfig,
};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

const BANNED: &[&str] = &[
    "@import",
    "url(",
    "expression(",
    "javascript:",
    "behavior:",
    "-moz-binding",
    "<script",
    "</style",
    "@keyframes",
];

const SELECTOR_POOL: &[&str] = &["body", ".hero", ".badge", ".cta-sub", ".evil", "div", "#id"];
const PROPERTY_POOL: &[&str] = &[
    "color",
    "margin",
    "font-size",
    "--accent",
    "position",
    "z-index",
    "content",
];
const VALUE_POOL: &[&str] = &["red", "0 auto", "1px solid #000", "var(--accent)", "2rem"];

fn css_soup() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("body"),
        Just(".hero"),
        Just(".evil"),
        Just("{"),
        Just("}"),
        Just(";"),
        Just(":"),
        Just(","),
        Just(" "),
        Just("\n"),
        Just("color"),
        Just("position"),
        Just("--x"),
        Just("red"),
        Just("url("),
        Just("UrL("),
        Just("javascript:"),
        Just("expression("),
        Just("behavior:"),
        Just("-moz-binding"),
        Just("</style>"),
        Just("<script>"),
        Just("@import"),
        Just("@media"),
        Just("@keyframes"),
        Just("/*"),
        Just("*/"),
        Just("("),
        Just(")"),
        Just("\""),
        Just("'"),
        Just("--a"),
        Just("\\7d "),
        Just("\\7b "),
        Just("\\3a "),
        Just("\\28 "),
        Just("\\29 "),
        Just("\\22 "),
        Just("\\2e evil"),
        Just("\\20 "),
        Just("\\3c script"),
        Just("\\63 olor"),
        Just("\\"),
    ];
    prop::collection::vec(fragment, 0..160).prop_map(|fragments| fragments.concat())
}

#[derive(Clone, Debug)]
struct Rule {
    selectors: Vec<&'static str>,
    declarations: Vec<(&'static str, &'static str)>,
}

fn rule_strategy() -> impl Strategy<Value = Rule> {
    (
        prop::collection::vec(prop::sample::select(SELECTOR_POOL), 1..3),
        prop::collection::vec(
            (
                prop::sample::select(PROPERTY_POOL),
                prop::sample::select(VALUE_POOL),
            ),
            1..5,
        ),
    )
        .prop_map(|(selectors, declarations)| Rule {
            selectors,
            declarations,
        })
}

fn render_rule(rule: &Rule) -> String {
    let declarations = rule
        .declarations
        .iter()
        .map(|(property, value)| format!("{}: {}", property, value))
        .collect::<Vec<_>>();
    format!("{} {{ {} }}", rule.selectors.join(", "), declarations.join("; "))
}

fn expected_output(rules: &[Rule]) -> String {
    let mut expected = String::new();
    for rule in rules {
        if !rule.selectors.iter().all(|selector| SELECTORS.contains(selector)) {
            continue;
        }
        let kept = rule
            .declarations
            .iter()
            .filter(|(property, _)| property.starts_with("--") || CSS_PROPERTIES.contains(property))
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>();
        if kept.is_empty() {
            continue;
        }
        expected.push_str(&format!(
            "{} {{ {}; }}\n",
            rule.selectors.join(", "),
            kept.join("; ")
        ));
    }
    expected
}

fn free_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,40}",
        "[<>&\"' a-z/=]{0,40}",
        Just("</div><script>alert(1)</script>".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn soup_never_escapes_the_allowlists(css in css_soup()) {
        let output = sanitize_css(&css);
        prop_assert!(output.chars().count() <= 12_000);
        prop_assert!(!output.contains('<'));

        let lowered = output.to_ascii_lowercase();
        for token in BANNED {
            prop_assert!(!lowered.contains(token), "{:?} survived in {:?}", token, output);
        }

        for line in output.split_inclusive('\n').filter(|line| line.ends_with('\n')) {
            let (selectors, _) = line
                .split_once(" { ")
                .ok_or_else(|| TestCaseError::fail(format!("malformed rule {:?}", line)))?;
            for selector in selectors.split(", ") {
                prop_assert!(SELECTORS.contains(selector), "selector {:?} leaked", selector);
            }
        }

        // Parsing the output again must see exactly the rules that were printed.
        let reparsed = parse_css_stylesheet(&output, &LISTING_STYLE_CONFIG);
        prop_assert_eq!(reparsed.len(), output.lines().count(), "rules split in {:?}", output);
        for rule in &reparsed {
            for selector in &rule.selectors {
                prop_assert!(SELECTORS.contains(selector.as_str()), "selector {:?} leaked", selector);
            }
            for declaration in &rule.declarations {
                let property = declaration.property.as_str();
                prop_assert!(
                    CSS_PROPERTIES.contains(property)
                        || (property.starts_with("--")
                            && property[2..]
                                .chars()
                                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')),
                    "property {:?} leaked",
                    property
                );
            }
        }
    }

    #[test]
    fn structured_rules_match_the_allowlist_filter(rules in prop::collection::vec(rule_strategy(), 0..12)) {
        let css = rules.iter().map(render_rule).collect::<Vec<_>>().join("\n");
        prop_assert_eq!(sanitize_css(&css), expected_output(&rules));
    }

    #[test]
    fn escaped_text_has_no_markup(text in free_text()) {
        let escaped = escape_html(&text);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        let restored = escaped
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&amp;", "&");
        prop_assert_eq!(restored, text);
    }

    #[test]
    fn field_text_cannot_change_markup(
        title in free_text(),
        subtitle in free_text(),
        overall in free_text(),
        headline in free_text(),
    ) {
        let baseline = render_listing(&ListingContent::default());
        let mut content = ListingContent::default();
        content.hero.main_title = title;
        content.hero.sub_title = subtitle;
        content.condition.overall = overall;
        content.cta.headline = headline;
        let html = render_listing(&content);
        prop_assert_eq!(html.matches('<').count(), baseline.matches('<').count());
        prop_assert_eq!(html.matches('>').count(), baseline.matches('>').count());
    }

    #[test]
    fn font_selection_is_capped_and_allowed(
        names in prop::collection::vec(
            prop_oneof![
                prop::sample::select(listing_render::config::fonts::FONT_LIST).prop_map(String::from),
                "[A-Za-z ]{0,16}",
            ],
            0..8,
        )
    ) {
        let style: &StyleConfig = &listing_render::config::default::LISTING_STYLE_CONFIG;
        let selection = FontSelection::select(&names, style, 3);
        prop_assert!(selection.families.len() <= 3);
        for family in &selection.families {
            prop_assert!(FONTS.contains(family));
        }
    }
}
