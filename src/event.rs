use serde::{Deserialize, Serialize};

use crate::capabilities::{CaptureResult, FileReadResult};
use crate::config::WidgetConfig;
use crate::model::FeedbackType;

/// Tagged result of the submission POST. Produced by the HTTP capability
/// callback; only success or failure is observed, never the response body.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Rejected { status: u16 },
    TransportFailed { message: String },
}

// Capability results are boxed to keep the enum small.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    // Widget lifecycle
    Opened(Box<WidgetConfig>),
    FeedbackTypeSelected { feedback_type: FeedbackType },
    CancelRequested,
    RestartRequested,

    // Form
    CommentChanged { text: String },
    ScreenshotRequested,
    ScreenshotCaptured(Box<CaptureResult>),
    ScreenshotRemoved,

    // Submission
    SubmitRequested,
    ScreenshotEncoded(Box<FileReadResult>),
    SubmitCompleted(SubmitOutcome),
}

impl Event {
    /// Stable label for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Event::Opened(_) => "opened",
            Event::FeedbackTypeSelected { .. } => "feedback_type_selected",
            Event::CancelRequested => "cancel_requested",
            Event::RestartRequested => "restart_requested",
            Event::CommentChanged { .. } => "comment_changed",
            Event::ScreenshotRequested => "screenshot_requested",
            Event::ScreenshotCaptured(_) => "screenshot_captured",
            Event::ScreenshotRemoved => "screenshot_removed",
            Event::SubmitRequested => "submit_requested",
            Event::ScreenshotEncoded(_) => "screenshot_encoded",
            Event::SubmitCompleted(_) => "submit_completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_size_is_reasonable() {
        // Ensure boxing keeps the enum small.
        let size = std::mem::size_of::<Event>();
        assert!(
            size <= 64,
            "Event enum is {} bytes — too large, box more variants",
            size
        );
    }

    #[test]
    fn names_are_unique() {
        let names = [
            Event::CancelRequested.name(),
            Event::RestartRequested.name(),
            Event::ScreenshotRequested.name(),
            Event::ScreenshotRemoved.name(),
            Event::SubmitRequested.name(),
            Event::CommentChanged { text: String::new() }.name(),
            Event::SubmitCompleted(SubmitOutcome::Delivered).name(),
        ];
        let mut deduped = names.to_vec();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }
}
