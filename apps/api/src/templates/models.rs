use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::templates::pools::{ColorScheme, FontPairing, LayoutDescriptor, StyleKey, VisualEffect};

/// Placeholder values supplied by the caller (role, industry, years, ...).
///
/// Ordered by key so substitution is reproducible. Deserializes from any JSON
/// object: strings are kept, numbers and booleans are rendered as text, and
/// nulls, arrays and nested objects are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateContext(BTreeMap<String, String>);

impl<'de> Deserialize<'de> for TemplateContext {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| scalar_text(value).map(|text| (key, text)))
            .collect())
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `defaults` overridden by every key in `self`.
    pub fn over_defaults(&self, defaults: TemplateContext) -> TemplateContext {
        let mut merged = defaults.0;
        merged.extend(self.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        TemplateContext(merged)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TemplateContext(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Generated text for one template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSections {
    pub summary: String,
    pub experiences: Vec<String>,
    pub skills: Vec<String>,
    pub quote: Option<String>,
    pub quote_author: Option<String>,
}

/// A fully composed template, ready for the preview UI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeTemplate {
    pub id: Uuid,
    pub style: StyleKey,
    pub layout: LayoutDescriptor,
    pub colors: ColorScheme,
    pub fonts: FontPairing,
    pub background_image: Option<String>,
    pub visual_effect: Option<VisualEffect>,
    pub sections: GeneratedSections,
    pub generated_at: DateTime<Utc>,
}
