use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ScreenshotRef;

pub const DEFAULT_CAPTURE_QUALITY: f32 = 0.8;

/// Asks the shell for a screenshot of the screen currently on display.
/// The shell writes the image to a temporary file and hands back a
/// reference; the bytes never enter the core.
#[derive(Clone)]
pub struct ScreenCapture<Ev> {
    context: CapabilityContext<ScreenCaptureOperation, Ev>,
}

impl<Ev> Capability<Ev> for ScreenCapture<Ev> {
    type Operation = ScreenCaptureOperation;
    type MappedSelf<MappedEv> = ScreenCapture<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        ScreenCapture::new(self.context.map_event(f))
    }
}

impl<Ev> ScreenCapture<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<ScreenCaptureOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn capture<F>(&self, config: CaptureConfig, make_event: F)
    where
        F: FnOnce(CaptureResult) -> Ev + Send + 'static,
    {
        let context = self.context.clone();
        self.context.spawn(async move {
            let config = config.validated();
            let result = context
                .request_from_shell(ScreenCaptureOperation::Capture { config })
                .await;
            context.update_app(make_event(result));
        });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ScreenCaptureOperation {
    Capture { config: CaptureConfig },
}

impl Operation for ScreenCaptureOperation {
    type Output = CaptureResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureFormat {
    Jpg,
    Png,
}

impl CaptureFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            CaptureFormat::Jpg => "image/jpeg",
            CaptureFormat::Png => "image/png",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            CaptureFormat::Jpg => "jpg",
            CaptureFormat::Png => "png",
        }
    }
}

impl Default for CaptureFormat {
    fn default() -> Self {
        CaptureFormat::Jpg
    }
}

/// Encoding parameters for one capture. Quality is a 0–1 factor and only
/// applies to lossy formats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptureConfig {
    pub format: CaptureFormat,
    pub quality: f32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            format: CaptureFormat::Jpg,
            quality: DEFAULT_CAPTURE_QUALITY,
        }
    }
}

impl CaptureConfig {
    pub fn with_format(mut self, format: CaptureFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_quality(mut self, quality: f32) -> Self {
        self.quality = quality.clamp(0.0, 1.0);
        self
    }

    pub fn validated(mut self) -> Self {
        self.quality = self.quality.clamp(0.0, 1.0);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScreenCaptureOutput {
    Captured(ScreenshotRef),
}

impl ScreenCaptureOutput {
    pub fn into_screenshot(self) -> ScreenshotRef {
        match self {
            ScreenCaptureOutput::Captured(screenshot) => screenshot,
        }
    }
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScreenCaptureError {
    #[error("screen capture unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("screen capture failed: {reason}")]
    CaptureFailed { reason: String },
}

pub type CaptureResult = Result<ScreenCaptureOutput, ScreenCaptureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_lossy_at_fixed_quality() {
        let config = CaptureConfig::default();
        assert_eq!(config.format, CaptureFormat::Jpg);
        assert!((config.quality - DEFAULT_CAPTURE_QUALITY).abs() < f32::EPSILON);
    }

    #[test]
    fn quality_is_clamped_to_unit_range() {
        assert!((CaptureConfig::default().with_quality(1.5).quality - 1.0).abs() < f32::EPSILON);
        assert!((CaptureConfig::default().with_quality(-0.2).quality).abs() < f32::EPSILON);

        let config = CaptureConfig {
            format: CaptureFormat::Jpg,
            quality: 7.0,
        }
        .validated();
        assert!((config.quality - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn formats_report_mime_and_extension() {
        assert_eq!(CaptureFormat::Jpg.mime_type(), "image/jpeg");
        assert_eq!(CaptureFormat::Jpg.extension(), "jpg");
        assert_eq!(CaptureFormat::Png.mime_type(), "image/png");
        assert_eq!(CaptureFormat::Png.extension(), "png");
    }

    #[test]
    fn output_unwraps_to_reference() {
        let output = ScreenCaptureOutput::Captured(ScreenshotRef::new("file://tmp/a.jpg"));
        assert_eq!(output.into_screenshot().as_str(), "file://tmp/a.jpg");
    }
}
