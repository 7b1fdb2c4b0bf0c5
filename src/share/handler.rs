use crate::share::request::ShareRequest;
use arboard::Clipboard;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("No application can handle this share request")]
    NoHandler,

    #[error("Clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("Failed to write share outbox '{path}': {source}")]
    Outbox {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode share request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// An application that can receive share requests.
pub trait ShareHandler: Send {
    /// Name shown in the chooser.
    fn name(&self) -> &str;

    fn accepts(&self, request: &ShareRequest) -> bool;

    fn deliver(&mut self, request: &ShareRequest) -> Result<(), ShareError>;
}

/// Copies the shared text to the system clipboard.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    pub fn new() -> Result<Self, ShareError> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }
}

impl ShareHandler for ClipboardHandler {
    fn name(&self) -> &str {
        "Copy to clipboard"
    }

    fn accepts(&self, request: &ShareRequest) -> bool {
        request.is_plain_text()
    }

    fn deliver(&mut self, request: &ShareRequest) -> Result<(), ShareError> {
        let text = format!("{}\n\n{}", request.subject, request.body);
        self.clipboard.set_text(text)?;
        Ok(())
    }
}

/// Appends each request as one JSON line to a file.
pub struct OutboxHandler {
    path: PathBuf,
}

impl OutboxHandler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ShareHandler for OutboxHandler {
    fn name(&self) -> &str {
        "Save to outbox"
    }

    fn accepts(&self, _request: &ShareRequest) -> bool {
        true
    }

    fn deliver(&mut self, request: &ShareRequest) -> Result<(), ShareError> {
        let mut line = serde_json::to_string(request)?;
        line.push('\n');
        let outbox_error = |source| ShareError::Outbox {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(outbox_error)?;
        file.write_all(line.as_bytes()).map_err(outbox_error)?;
        Ok(())
    }
}
