//! Displayable values produced by columns and card renderers.
//!
//! The grid core does not know about any GUI toolkit. Renderers return these
//! small value types and the UI decides how to paint them.

use std::fmt::Display;

use serde_json::Value;

/// Accent of a badge or toast-like element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tone {
    #[default]
    Default,
    Primary,
    Success,
    Error,
    Warning,
    Info,
}

/// Content of one table cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cell {
    /// Nothing is displayed.
    #[default]
    Empty,
    /// Plain text.
    Text(String),
    /// Small rounded label.
    Badge { label: String, tone: Tone },
    /// Round picture; `alt` is shown when the image cannot be.
    Avatar { url: String, alt: String },
}

impl Cell {
    pub fn text(value: impl Display) -> Self {
        Self::Text(value.to_string())
    }

    pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
        Self::Badge {
            label: label.into(),
            tone,
        }
    }

    pub fn avatar(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::Avatar {
            url: url.into(),
            alt: alt.into(),
        }
    }

    /// Cell for a column without a renderer.
    ///
    /// Booleans and nulls display as nothing, as does an absent field.
    /// Arrays and objects fall back to compact JSON.
    pub fn from_raw(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null | Value::Bool(_)) => Self::Empty,
            Some(Value::String(text)) => Self::Text(text.clone()),
            Some(Value::Number(number)) => Self::Text(number.to_string()),
            Some(other @ (Value::Array(_) | Value::Object(_))) => Self::Text(other.to_string()),
        }
    }

    /// Text a reader would see, used for accessibility labels and tests.
    pub fn plain_text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Text(text) => text,
            Self::Badge { label, .. } => label,
            Self::Avatar { alt, .. } => alt,
        }
    }
}

/// Content of one card in card mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    pub avatar_url: Option<String>,
    /// Text standing in for the avatar picture.
    pub avatar_alt: String,
    /// Label/value pairs in display order.
    pub fields: Vec<(String, String)>,
    pub badges: Vec<(String, Tone)>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn avatar(mut self, url: impl Into<String>, alt: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self.avatar_alt = alt.into();
        self
    }

    pub fn field(mut self, label: impl Into<String>, value: impl Display) -> Self {
        self.fields.push((label.into(), value.to_string()));
        self
    }

    pub fn badge(mut self, label: impl Into<String>, tone: Tone) -> Self {
        self.badges.push((label.into(), tone));
        self
    }
}
