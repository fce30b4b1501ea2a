use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::WidgetConfig;

/// Kind of feedback being filed. Serializes to the wire tags the backend
/// stores (`"BUG"`, `"IDEA"`, `"OTHER"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeedbackType {
    Bug,
    Idea,
    Other,
}

impl FeedbackType {
    /// Display order for the options screen.
    pub const ALL: [FeedbackType; 3] = [Self::Bug, Self::Idea, Self::Other];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Bug => "BUG",
            Self::Idea => "IDEA",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Where the widget is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetStep {
    Options,
    Form,
    Sent,
}

impl Default for WidgetStep {
    fn default() -> Self {
        Self::Options
    }
}

/// Don't store image bytes. Store a handle/URI/path; the shell reads the
/// file back only at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenshotRef {
    pub uri: String,
}

impl ScreenshotRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

/// Core state. Everything here is transient; nothing survives the widget
/// being closed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Model {
    pub step: WidgetStep,
    pub config: WidgetConfig,

    /// Selected category; set when the user picks an option, cleared on
    /// cancel/restart.
    pub feedback_type: Option<FeedbackType>,

    // Form state (references, not bytes)
    pub screenshot: Option<ScreenshotRef>,
    pub comment: String,

    /// Guard against duplicate submissions. Reset on failure; left set on
    /// success, where the form step is abandoned instead.
    pub is_sending: bool,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears everything the form accumulated. Invoked when entering or
    /// leaving the form step so each pass starts clean.
    pub fn reset_form(&mut self) {
        self.feedback_type = None;
        self.screenshot = None;
        self.comment.clear();
        self.is_sending = false;
    }
}
