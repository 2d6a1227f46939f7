use std::collections::HashSet;
use std::fmt;

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationListParser, DeclarationParser, ParseError, Parser,
    ParserInput, QualifiedRuleParser, RuleListParser, SourceLocation, Token,
};
use tracing::debug;

use crate::config::StyleConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct CssStyleRule {
    pub selectors: Vec<String>,
    pub declarations: Vec<CssDeclaration>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CssDeclaration {
    pub property: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CssError {
    NestedBlock,
    EmptyValue,
    InvalidPropertyName(String),
    BlockedFunction(String),
    UnsafeToken(String),
}

pub type CssParseError<'i> = ParseError<'i, CssError>;

/// Parses a stylesheet into plain style rules. Only the grammar subset a listing theme needs is
/// modelled: at-rules, nested blocks and values that could load resources are rejected whole.
struct CssParser<'c> {
    blocked_functions: &'c HashSet<&'static str>,
}

// At-rules fall through to the default implementations, which reject them.
impl<'i, 'c> AtRuleParser<'i> for CssParser<'c> {
    type PreludeBlock = ();
    type PreludeNoBlock = ();
    type AtRule = CssStyleRule;
    type Error = CssError;
}

impl<'i, 'c> QualifiedRuleParser<'i> for CssParser<'c> {
    type Prelude = Vec<String>;
    type QualifiedRule = CssStyleRule;
    type Error = CssError;

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, CssParseError<'i>> {
        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        Ok(split_selectors(input.slice_from(start)))
    }

    fn parse_block<'t>(
        &mut self,
        selectors: Self::Prelude,
        _location: SourceLocation,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, CssParseError<'i>> {
        let state = input.state();
        while let Ok(token) = input.next_including_whitespace() {
            let nested = matches!(token, Token::CurlyBracketBlock);
            if nested {
                return Err(input.new_custom_error(CssError::NestedBlock));
            }
        }
        input.reset(&state);

        Ok(CssStyleRule {
            selectors,
            declarations: parse_declarations(input, self.blocked_functions),
        })
    }
}

struct CssDeclarationParser<'c> {
    blocked_functions: &'c HashSet<&'static str>,
}

impl<'i, 'c> DeclarationParser<'i> for CssDeclarationParser<'c> {
    type Declaration = CssDeclaration;
    type Error = CssError;

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, CssParseError<'i>> {
        // Names are printed decoded, so escapes must not be able to smuggle punctuation out.
        let property = name.to_ascii_lowercase();
        if !is_plain_property_name(&property) {
            return Err(input.new_custom_error(CssError::InvalidPropertyName(property)));
        }

        let start = input.position();
        scan_value(input, self.blocked_functions)?;
        let value = input
            .slice_from(start)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if value.is_empty() {
            return Err(input.new_custom_error(CssError::EmptyValue));
        }

        Ok(CssDeclaration { property, value })
    }
}

impl<'i, 'c> AtRuleParser<'i> for CssDeclarationParser<'c> {
    type PreludeBlock = ();
    type PreludeNoBlock = ();
    type AtRule = CssDeclaration;
    type Error = CssError;
}

/// Walks every token of a declaration value, descending into function and bracket blocks.
fn scan_value<'i, 't>(
    input: &mut Parser<'i, 't>,
    blocked_functions: &HashSet<&'static str>,
) -> Result<(), CssParseError<'i>> {
    loop {
        let token = match input.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };
        match token {
            Token::Function(ref name) => {
                let name = name.to_ascii_lowercase();
                if blocked_functions.contains(name.as_str()) {
                    return Err(input.new_custom_error(CssError::BlockedFunction(name)));
                }
                input.parse_nested_block(|nested| scan_value(nested, blocked_functions))?;
            }
            Token::ParenthesisBlock | Token::SquareBracketBlock => {
                input.parse_nested_block(|nested| scan_value(nested, blocked_functions))?;
            }
            Token::CurlyBracketBlock => {
                return Err(input.new_custom_error(CssError::NestedBlock));
            }
            Token::UnquotedUrl(_)
            | Token::BadUrl(_)
            | Token::BadString(_)
            | Token::AtKeyword(_)
            | Token::CloseParenthesis
            | Token::CloseSquareBracket
            | Token::CloseCurlyBracket => {
                return Err(input.new_custom_error(CssError::UnsafeToken(format!("{:?}", token))));
            }
            _ => {}
        }
    }
}

/// `color`, `-webkit-line-clamp` or a custom property such as `--accent_2`.
fn is_plain_property_name(name: &str) -> bool {
    match name.strip_prefix("--") {
        Some(custom) => {
            !custom.is_empty()
                && custom
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }
        None => {
            name.chars().any(|c| c.is_ascii_lowercase())
                && name.chars().all(|c| c.is_ascii_lowercase() || c == '-')
        }
    }
}

fn split_selectors(prelude: &str) -> Vec<String> {
    prelude
        .split(',')
        .map(|selector| selector.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}

pub fn parse_css_stylesheet(css: &str, config: &StyleConfig) -> Vec<CssStyleRule> {
    let mut parser_input = ParserInput::new(css);
    let mut parser = Parser::new(&mut parser_input);

    let rule_list_parser = RuleListParser::new_for_stylesheet(
        &mut parser,
        CssParser {
            blocked_functions: &config.blocked_functions,
        },
    );

    let mut rules = Vec::new();

    for result in rule_list_parser {
        let rule = match result {
            Ok(r) => r,
            Err((error, source)) => {
                debug!(?error, source, "CSS rule dropped");
                continue;
            }
        };
        rules.push(rule);
    }

    rules
}

fn parse_declarations<'i>(
    input: &mut Parser<'i, '_>,
    blocked_functions: &HashSet<&'static str>,
) -> Vec<CssDeclaration> {
    let mut declarations = Vec::new();
    let declaration_list_parser =
        DeclarationListParser::new(input, CssDeclarationParser { blocked_functions });

    for declaration in declaration_list_parser {
        match declaration {
            Ok(declaration) => declarations.push(declaration),
            Err((error, source)) => {
                debug!(?error, source, "CSS declaration dropped");
            }
        }
    }

    declarations
}

impl fmt::Display for CssDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

impl fmt::Display for CssStyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let declarations = self
            .declarations
            .iter()
            .map(|declaration| declaration.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{} {{ {}; }}", self.selectors.join(", "), declarations)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::config::default::LISTING_STYLE_CONFIG;

    fn parse(css: &str) -> Vec<CssStyleRule> {
        parse_css_stylesheet(css, &LISTING_STYLE_CONFIG)
    }

    fn declaration(property: &str, value: &str) -> CssDeclaration {
        CssDeclaration {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn parses_rules_and_declarations() {
        let rules = parse(".hero, .cta { color: #fff; Font-Size: 2rem !important }\nbody{margin:0}");
        assert_eq!(
            rules,
            vec![
                CssStyleRule {
                    selectors: vec![".hero".to_string(), ".cta".to_string()],
                    declarations: vec![
                        declaration("color", "#fff"),
                        declaration("font-size", "2rem !important"),
                    ],
                },
                CssStyleRule {
                    selectors: vec!["body".to_string()],
                    declarations: vec![declaration("margin", "0")],
                },
            ]
        );
    }

    #[test]
    fn collapses_value_whitespace() {
        let rules = parse("p { border: 1px\n    solid\t#000 }");
        assert_eq!(rules[0].declarations, vec![declaration("border", "1px solid #000")]);
    }

    #[test]
    fn normalizes_selector_whitespace() {
        let rules = parse(".details-list \n  dt { color: red }");
        assert_eq!(rules[0].selectors, vec![".details-list dt".to_string()]);
    }

    #[test]
    fn drops_at_rules() {
        let rules = parse("@media (max-width: 600px) { body { color: red } } p { color: blue }");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selectors, vec!["p".to_string()]);
    }

    #[test]
    fn drops_rules_with_nested_blocks() {
        let rules = parse("body { color: red; .hero { color: blue } } p { color: green }");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selectors, vec!["p".to_string()]);
    }

    #[test]
    fn drops_values_with_blocked_functions() {
        let rules = parse(
            "body { background: URL(\"x.png\"); background-color: image-set(\"a.png\" 1x); color: rgb(1, 2, 3) }",
        );
        assert_eq!(rules[0].declarations, vec![declaration("color", "rgb(1, 2, 3)")]);
    }

    #[test]
    fn drops_values_with_unquoted_urls_and_stray_closers() {
        let rules = parse("body { background: url(x.png); color: alert(1)); margin: 0 }");
        assert_eq!(rules[0].declarations, vec![declaration("margin", "0")]);
    }

    #[test]
    fn drops_empty_values_and_garbage() {
        let rules = parse("p { color: ; nonsense; padding: 4px }");
        assert_eq!(rules[0].declarations, vec![declaration("padding", "4px")]);
    }

    #[test]
    fn drops_names_whose_escapes_decode_to_punctuation() {
        let rules = parse(r"p { --a\7d body\7b color\3a red: 1; b\28 x: 2; margin: 0 }");
        assert_eq!(rules[0].declarations, vec![declaration("margin", "0")]);
    }

    #[test]
    fn escaped_names_that_decode_to_plain_idents_are_kept() {
        let rules = parse(r"p { \63 olor: red; --Accent_2: #fff }");
        assert_eq!(
            rules[0].declarations,
            vec![declaration("color", "red"), declaration("--accent_2", "#fff")]
        );
    }

    #[test]
    fn plain_property_names() {
        assert!(is_plain_property_name("color"));
        assert!(is_plain_property_name("-webkit-line-clamp"));
        assert!(is_plain_property_name("--accent_2"));
        assert!(!is_plain_property_name("--"));
        assert!(!is_plain_property_name("-"));
        assert!(!is_plain_property_name("--a}body{"));
        assert!(!is_plain_property_name("color:red"));
        assert!(!is_plain_property_name("b(x"));
    }

    #[test]
    fn display_uses_listing_format() {
        let rule = CssStyleRule {
            selectors: vec!["h1".to_string(), "h2".to_string()],
            declarations: vec![declaration("color", "red"), declaration("margin", "0")],
        };
        assert_eq!(rule.to_string(), "h1, h2 { color: red; margin: 0; }");
    }
}
