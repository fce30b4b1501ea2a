//! Configuration injected into the core when the widget opens.
//!
//! The widget deliberately takes its theme, category metadata, and backend
//! address as one immutable value instead of reaching for ambient globals,
//! so every shell renders the same look and hits the same endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::model::FeedbackType;

pub const DEFAULT_API_BASE: &str = "http://localhost:3333";

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unsupported scheme '{scheme}', only 'http' and 'https' are allowed")]
    UnsupportedScheme { scheme: String },

    #[error("base url must have a host")]
    MissingHost,

    #[error("credentials in the base url are not allowed")]
    CredentialsNotAllowed,
}

/// Absolute base URL the relative endpoint paths are joined to.
/// Validated at construction so request building never fails on a
/// malformed address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();

        let parsed = Url::parse(&url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::UnsupportedScheme {
                scheme: scheme.to_string(),
            });
        }

        if parsed.host_str().is_none() {
            return Err(ConfigError::MissingHost);
        }

        if !parsed.username().is_empty() || parsed.password().is_some() {
            return Err(ConfigError::CredentialsNotAllowed);
        }

        Ok(Self(url.trim_end_matches('/').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins a path that starts with `/` onto the base.
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.0)
    }
}

impl Default for ApiBaseUrl {
    fn default() -> Self {
        Self(DEFAULT_API_BASE.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub brand: String,
    pub surface_primary: String,
    pub surface_secondary: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub text_on_brand: String,
    pub stroke: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            brand: "#8257E5".into(),
            surface_primary: "#18181B".into(),
            surface_secondary: "#27272A".into(),
            text_primary: "#F4F4F5".into(),
            text_secondary: "#A1A1AA".into(),
            text_on_brand: "#FFFFFF".into(),
            stroke: "#52525B".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFonts {
    pub regular: String,
    pub medium: String,
    pub bold: String,
}

impl Default for ThemeFonts {
    fn default() -> Self {
        Self {
            regular: "Inter_400Regular".into(),
            medium: "Inter_500Medium".into(),
            bold: "Inter_700Bold".into(),
        }
    }
}

/// Shared look-and-feel tables. Plain data the shell applies; the core
/// only carries them through the view model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
}

/// Display record for one feedback category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub title: String,
    /// Asset name the shell resolves to an image.
    pub image: String,
}

impl CategoryInfo {
    pub fn new(title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
        }
    }
}

/// Total mapping from category tag to its display record. Stored as one
/// field per tag so lookups can never miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRegistry {
    bug: CategoryInfo,
    idea: CategoryInfo,
    other: CategoryInfo,
}

impl CategoryRegistry {
    pub fn new(bug: CategoryInfo, idea: CategoryInfo, other: CategoryInfo) -> Self {
        Self { bug, idea, other }
    }

    pub fn info(&self, feedback_type: FeedbackType) -> &CategoryInfo {
        match feedback_type {
            FeedbackType::Bug => &self.bug,
            FeedbackType::Idea => &self.idea,
            FeedbackType::Other => &self.other,
        }
    }

    /// Categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FeedbackType, &CategoryInfo)> {
        FeedbackType::ALL
            .into_iter()
            .map(move |feedback_type| (feedback_type, self.info(feedback_type)))
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            bug: CategoryInfo::new("Problema", "bug.png"),
            idea: CategoryInfo::new("Ideia", "idea.png"),
            other: CategoryInfo::new("Outro", "thought.png"),
        }
    }
}

/// Everything the host injects when it opens the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub api_base: ApiBaseUrl,
    pub theme: Theme,
    pub categories: CategoryRegistry,
}
