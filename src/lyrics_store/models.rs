//! Models for the document store API responses.
//!
//! These types match the JSON structure of Notion database pages. Every
//! property keeps only the shapes the lyrics pipeline reads; anything else the
//! store sends is ignored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Raw Records
// =============================================================================

/// One page of the lyrics database, as returned by the store.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct RawRecord {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

/// A single page property.
///
/// The store tags each property with a `type` and puts the payload under a
/// key of the same name; all payload keys default to empty so a property of
/// an unexpected type reads as "no value".
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct PropertyValue {
    #[serde(default)]
    pub title: Vec<RichTextBlock>,
    #[serde(default)]
    pub rich_text: Vec<RichTextBlock>,
    #[serde(default)]
    pub multi_select: Vec<SelectOption>,
}

/// A rich text run.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct RichTextBlock {
    #[serde(default)]
    pub plain_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct TextContent {
    pub content: String,
}

/// One option of a multi-select property.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct SelectOption {
    pub name: String,
}

impl RichTextBlock {
    /// The block's text content, falling back to its plain text rendering.
    pub fn content(&self) -> &str {
        match &self.text {
            Some(text) => &text.content,
            None => &self.plain_text,
        }
    }
}

impl RawRecord {
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Content of the first rich text block of `name`, if any.
    pub fn first_rich_text(&self, name: &str) -> Option<&str> {
        self.property(name)
            .and_then(|p| p.rich_text.first())
            .map(RichTextBlock::content)
    }

    /// Plain text of the first title block of `name`, if any.
    pub fn first_title(&self, name: &str) -> Option<&str> {
        self.property(name)
            .and_then(|p| p.title.first())
            .map(|block| block.plain_text.as_str())
    }

    /// Names of the options selected in the multi-select property `name`.
    pub fn option_names(&self, name: &str) -> Vec<String> {
        self.property(name)
            .map(|p| p.multi_select.iter().map(|o| o.name.clone()).collect())
            .unwrap_or_default()
    }

    /// True if the multi-select property `name` has at least one option.
    pub fn has_options(&self, name: &str) -> bool {
        self.property(name)
            .map(|p| !p.multi_select.is_empty())
            .unwrap_or(false)
    }
}

// =============================================================================
// Builders (used by fakes and tests)
// =============================================================================

impl PropertyValue {
    pub fn title(text: &str) -> Self {
        Self {
            title: vec![RichTextBlock {
                plain_text: text.to_string(),
                text: Some(TextContent {
                    content: text.to_string(),
                }),
            }],
            ..Default::default()
        }
    }

    pub fn rich_text(text: &str) -> Self {
        Self {
            rich_text: vec![RichTextBlock {
                plain_text: text.to_string(),
                text: Some(TextContent {
                    content: text.to_string(),
                }),
            }],
            ..Default::default()
        }
    }

    pub fn multi_select<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            multi_select: names
                .iter()
                .map(|name| SelectOption {
                    name: name.as_ref().to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }
}
