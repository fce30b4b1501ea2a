use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reads local files the core only knows by reference. The shell performs
/// the read and the base64 encoding so the raw bytes stay out of the core.
#[derive(Clone)]
pub struct FileStore<Ev> {
    context: CapabilityContext<FileStoreOperation, Ev>,
}

impl<Ev> Capability<Ev> for FileStore<Ev> {
    type Operation = FileStoreOperation;
    type MappedSelf<MappedEv> = FileStore<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        FileStore::new(self.context.map_event(f))
    }
}

impl<Ev> FileStore<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<FileStoreOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn read_as_base64<F>(&self, uri: impl Into<String>, make_event: F)
    where
        F: FnOnce(FileReadResult) -> Ev + Send + 'static,
    {
        let uri = uri.into();
        let context = self.context.clone();
        self.context.spawn(async move {
            let result = context
                .request_from_shell(FileStoreOperation::ReadAsBase64 { uri })
                .await;
            context.update_app(make_event(result));
        });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FileStoreOperation {
    ReadAsBase64 { uri: String },
}

impl Operation for FileStoreOperation {
    type Output = FileReadResult;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FileStoreOutput {
    Base64(String),
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum FileStoreError {
    #[error("file not found: {uri}")]
    NotFound { uri: String },

    #[error("failed to read {uri}: {reason}")]
    ReadFailed { uri: String, reason: String },
}

pub type FileReadResult = Result<FileStoreOutput, FileStoreError>;
