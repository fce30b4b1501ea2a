#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod capabilities;
pub mod config;
pub mod event;
pub mod model;

use serde::{Deserialize, Serialize};

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::{ApiBaseUrl, CategoryInfo, CategoryRegistry, Theme, WidgetConfig};
pub use crux_core::{render::Render, App as CruxApp};
pub use event::{Event, SubmitOutcome};
pub use model::{FeedbackType, Model, ScreenshotRef, WidgetStep};

pub const FEEDBACKS_PATH: &str = "/feedbacks";

/// Prefix of the inline screenshot payload, trailing space included. The
/// advertised media type is fixed and does not track the capture format;
/// the backend stores the string without inspecting it.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64, ";

pub const OPTIONS_TITLE: &str = "Deixe seu feedback";
pub const COMMENT_PLACEHOLDER: &str = "Descreva o que está acontecendo...";
pub const SENT_MESSAGE: &str = "Agradecemos o feedback";
pub const RESTART_LABEL: &str = "Quero enviar outro feedback";

/// Wire body for `POST /feedbacks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackPayload {
    #[serde(rename = "type")]
    pub feedback_type: FeedbackType,
    pub screenshot: String,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryOption {
    pub feedback_type: FeedbackType,
    pub title: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormView {
    pub feedback_type: FeedbackType,
    pub title: String,
    pub image: String,
    pub comment: String,
    pub comment_placeholder: String,
    pub screenshot_uri: Option<String>,
    pub is_sending: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ViewState {
    Options {
        title: String,
        options: Vec<CategoryOption>,
    },
    Form(Box<FormView>),
    Sent {
        message: String,
        restart_label: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub state: ViewState,
    pub theme: Theme,
}

pub mod app {
    use super::*;
    use crate::capabilities::{CaptureConfig, FileStoreOutput, ScreenCaptureOutput};

    #[derive(Default)]
    pub struct App;

    impl App {
        /// Builds the `screenshot` field of the payload. With no capture the
        /// base64 payload is absent and the result degenerates to the bare
        /// prefix; the backend has always received it that way, so the shape
        /// is kept as observable behavior.
        fn screenshot_data_uri(base64: Option<&str>) -> String {
            format!("{DATA_URI_PREFIX}{}", base64.unwrap_or_default())
        }

        /// Issues the POST. The in-flight flag is already set by the caller;
        /// any failure to even build the request resets it so the form stays
        /// usable.
        fn send_feedback(model: &mut Model, caps: &Capabilities, screenshot_base64: Option<String>) {
            let Some(feedback_type) = model.feedback_type else {
                tracing::warn!("submit requested before a category was selected");
                model.is_sending = false;
                return;
            };

            let payload = FeedbackPayload {
                feedback_type,
                screenshot: Self::screenshot_data_uri(screenshot_base64.as_deref()),
                comment: model.comment.clone(),
            };

            let body = match serde_json::to_vec(&payload) {
                Ok(body) => body,
                Err(err) => {
                    tracing::error!(error = %err, "failed to encode feedback payload");
                    model.is_sending = false;
                    return;
                }
            };

            let url = model.config.api_base.join(FEEDBACKS_PATH);

            caps.http
                .post(&url)
                .header("Content-Type", "application/json")
                .body(body)
                .send(|result| {
                    let outcome = match result {
                        Ok(response) if response.status().is_success() => SubmitOutcome::Delivered,
                        Ok(response) => SubmitOutcome::Rejected {
                            status: response.status().into(),
                        },
                        Err(err) => SubmitOutcome::TransportFailed {
                            message: err.to_string(),
                        },
                    };
                    Event::SubmitCompleted(outcome)
                });
        }

        fn options_view(model: &Model) -> ViewState {
            ViewState::Options {
                title: OPTIONS_TITLE.to_string(),
                options: model
                    .config
                    .categories
                    .iter()
                    .map(|(feedback_type, info)| CategoryOption {
                        feedback_type,
                        title: info.title.clone(),
                        image: info.image.clone(),
                    })
                    .collect(),
            }
        }
    }

    impl crux_core::App for App {
        type Event = Event;
        type Model = Model;
        type ViewModel = ViewModel;
        type Capabilities = Capabilities;

        fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
            tracing::debug!(event = event.name(), "handling event");

            match event {
                Event::Opened(config) => {
                    model.config = *config;
                    model.reset_form();
                    model.step = WidgetStep::Options;
                    caps.render.render();
                }

                Event::FeedbackTypeSelected { feedback_type } => {
                    // Each form pass starts clean, like a freshly mounted form.
                    model.reset_form();
                    model.feedback_type = Some(feedback_type);
                    model.step = WidgetStep::Form;
                    caps.render.render();
                }

                Event::CancelRequested => {
                    model.reset_form();
                    model.step = WidgetStep::Options;
                    caps.render.render();
                }

                Event::RestartRequested => {
                    model.reset_form();
                    model.step = WidgetStep::Options;
                    caps.render.render();
                }

                Event::CommentChanged { text } => {
                    model.comment = text;
                    caps.render.render();
                }

                Event::ScreenshotRequested => {
                    // Fire and forget: no loading state while the shell
                    // captures.
                    caps.screen.capture(CaptureConfig::default(), |result| {
                        Event::ScreenshotCaptured(Box::new(result))
                    });
                }

                Event::ScreenshotCaptured(result) => {
                    match *result {
                        Ok(ScreenCaptureOutput::Captured(screenshot)) => {
                            model.screenshot = Some(screenshot);
                        }
                        Err(err) => {
                            // A previously captured reference stays as it was.
                            tracing::error!(error = %err, "screen capture failed");
                        }
                    }
                    caps.render.render();
                }

                Event::ScreenshotRemoved => {
                    model.screenshot = None;
                    caps.render.render();
                }

                Event::SubmitRequested => {
                    if model.is_sending {
                        return;
                    }
                    model.is_sending = true;

                    match model.screenshot.clone() {
                        Some(screenshot) => {
                            // The encode must land before the POST; the body
                            // depends on it.
                            caps.files.read_as_base64(screenshot.uri, |result| {
                                Event::ScreenshotEncoded(Box::new(result))
                            });
                        }
                        None => {
                            Self::send_feedback(model, caps, None);
                        }
                    }

                    caps.render.render();
                }

                Event::ScreenshotEncoded(result) => {
                    if !model.is_sending {
                        // Stale completion; the submission it belonged to was
                        // abandoned.
                        return;
                    }
                    match *result {
                        Ok(FileStoreOutput::Base64(base64)) => {
                            Self::send_feedback(model, caps, Some(base64));
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "failed to read screenshot for submission");
                            model.is_sending = false;
                        }
                    }
                    caps.render.render();
                }

                Event::SubmitCompleted(outcome) => {
                    if !model.is_sending {
                        return;
                    }
                    match outcome {
                        SubmitOutcome::Delivered => {
                            // The flag stays set; the form step is left behind
                            // rather than reset in place.
                            model.step = WidgetStep::Sent;
                        }
                        SubmitOutcome::Rejected { status } => {
                            tracing::error!(status, "feedback submission rejected");
                            model.is_sending = false;
                        }
                        SubmitOutcome::TransportFailed { message } => {
                            tracing::error!(error = %message, "feedback submission failed");
                            model.is_sending = false;
                        }
                    }
                    caps.render.render();
                }
            }
        }

        fn view(&self, model: &Model) -> ViewModel {
            let state = match model.step {
                WidgetStep::Options => Self::options_view(model),
                WidgetStep::Form => match model.feedback_type {
                    Some(feedback_type) => {
                        let info = model.config.categories.info(feedback_type);
                        ViewState::Form(Box::new(FormView {
                            feedback_type,
                            title: info.title.clone(),
                            image: info.image.clone(),
                            comment: model.comment.clone(),
                            comment_placeholder: COMMENT_PLACEHOLDER.to_string(),
                            screenshot_uri: model.screenshot.as_ref().map(|s| s.uri.clone()),
                            is_sending: model.is_sending,
                        }))
                    }
                    // A form without a category has nothing to submit to;
                    // fall back to the options screen.
                    None => Self::options_view(model),
                },
                WidgetStep::Sent => ViewState::Sent {
                    message: SENT_MESSAGE.to_string(),
                    restart_label: RESTART_LABEL.to_string(),
                },
            };

            ViewModel {
                state,
                theme: model.config.theme.clone(),
            }
        }
    }

}
