// SPDX-License-Identifier: MPL-2.0
//! Text clipboard access used by click-to-copy.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Destination for copied text.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard.
///
/// The platform handle is opened on first use and kept afterwards; on X11
/// the copied text only stays available while the handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.handle.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
            self.handle = Some(clipboard);
        }
        self.handle
            .as_mut()
            .ok_or_else(|| ClipboardError("handle not initialized".to_string()))
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.handle.is_some())
            .finish()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let result = self
            .handle()?
            .set_text(text)
            .map_err(|e| ClipboardError(e.to_string()));

        if result.is_err() {
            // A broken handle (display server restarted) is reopened next time.
            self.handle = None;
        }
        result
    }
}
