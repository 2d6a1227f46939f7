//! Listing schemas produced by the model.
//!
//! The model is not trusted to follow the schema, so every field deserializes leniently: numbers
//! and booleans become text, `null` and objects become empty text, non-array lists become empty
//! and sections that are not objects fall back to their defaults. Once a document has been parsed
//! the renderers never have to think about missing or mistyped fields.

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Premium listing content.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListingContent {
    #[serde(deserialize_with = "lenient_section")]
    pub hero: Hero,
    #[serde(deserialize_with = "lenient_section")]
    pub seo: Seo,
    #[serde(deserialize_with = "lenient_text_list")]
    pub badges: Vec<String>,
    #[serde(deserialize_with = "lenient_section")]
    pub about: About,
    #[serde(deserialize_with = "lenient_section")]
    pub details: Details,
    #[serde(deserialize_with = "lenient_section")]
    pub condition: Condition,
    #[serde(deserialize_with = "lenient_text_list")]
    pub contents: Vec<String>,
    #[serde(deserialize_with = "lenient_text_list")]
    pub collector_points: Vec<String>,
    #[serde(deserialize_with = "lenient_section")]
    pub nostalgia: Nostalgia,
    #[serde(deserialize_with = "lenient_section")]
    pub cta: CallToAction,
    #[serde(deserialize_with = "lenient_section")]
    pub presentation: Presentation,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Hero {
    #[serde(deserialize_with = "lenient_text")]
    pub era_tag: String,
    #[serde(deserialize_with = "lenient_text")]
    pub main_title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub sub_title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub author_line: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Seo {
    #[serde(deserialize_with = "lenient_text")]
    pub ebay_title: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct About {
    #[serde(deserialize_with = "lenient_text_list")]
    pub paragraphs: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Details {
    #[serde(deserialize_with = "lenient_list")]
    pub items: Vec<DetailItem>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetailItem {
    #[serde(deserialize_with = "lenient_text")]
    pub label: String,
    #[serde(deserialize_with = "lenient_text")]
    pub value: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Condition {
    #[serde(deserialize_with = "lenient_text")]
    pub overall: String,
    #[serde(deserialize_with = "lenient_list")]
    pub components: Vec<ConditionComponent>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConditionComponent {
    #[serde(deserialize_with = "lenient_text")]
    pub part: String,
    #[serde(deserialize_with = "lenient_text")]
    pub status: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Nostalgia {
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub text: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CallToAction {
    #[serde(deserialize_with = "lenient_text")]
    pub headline: String,
    #[serde(deserialize_with = "lenient_text")]
    pub sub: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Presentation {
    #[serde(deserialize_with = "lenient_text_list")]
    pub fonts: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub css: String,
}

/// Flat schema used by standard (non-premium) listings.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct StandardListing {
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_specifics")]
    pub item_specifics: BTreeMap<String, String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(deserialize_with = "lenient_text")]
    pub condition_report: String,
    #[serde(deserialize_with = "lenient_text")]
    pub condition_report_grade: String,
}

/// Coerces a JSON leaf to display text.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(text_of(&value))
}

fn lenient_text_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .iter()
            .filter(|item| matches!(item, Value::String(_) | Value::Number(_) | Value::Bool(_)))
            .map(text_of)
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_object() {
        Ok(serde_json::from_value(value).unwrap_or_default())
    } else {
        Ok(T::default())
    }
}

fn lenient_specifics<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| (key.clone(), text_of(value)))
            .filter(|(_, value)| !value.trim().is_empty())
            .collect(),
        _ => BTreeMap::new(),
    })
}

impl ListingContent {
    pub fn from_value(value: Value) -> ListingContent {
        serde_json::from_value(value).unwrap_or_default()
    }
}

impl StandardListing {
    pub fn from_value(value: Value) -> StandardListing {
        serde_json::from_value(value).unwrap_or_default()
    }
}
