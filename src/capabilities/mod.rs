mod files;
mod screen;

pub use self::files::{
    FileReadResult, FileStore, FileStoreError, FileStoreOperation, FileStoreOutput,
};
pub use self::screen::{
    CaptureConfig, CaptureFormat, CaptureResult, ScreenCapture, ScreenCaptureError,
    ScreenCaptureOperation, ScreenCaptureOutput, DEFAULT_CAPTURE_QUALITY,
};

// Render and Http come straight from crux; they already do everything the
// widget needs.
pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::app::App;
use crate::event::Event;

pub type AppHttp = Http<Event>;
pub type AppRender = Render<Event>;
pub type AppScreen = ScreenCapture<Event>;
pub type AppFiles = FileStore<Event>;

#[derive(crux_core::macros::Effect)]
#[effect(app = "App")]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
    pub screen: ScreenCapture<Event>,
    pub files: FileStore<Event>,
}
