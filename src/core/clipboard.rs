use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard backend failure: {0}")]
    Backend(#[from] arboard::Error),
}

/// Host clipboard-copy command. `Ok(true)` means the text is on the
/// clipboard, `Ok(false)` means the platform refused without failing
/// (no clipboard to speak of), `Err` means the backend fell over.
pub trait ClipboardBackend {
    fn copy_text(&mut self, text: &str) -> Result<bool, ClipboardError>;
}

#[derive(Default)]
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<bool, ClipboardError> {
        // X11 keeps the selection alive only as long as its owner, so a
        // short-lived handle per copy is enough for every platform arboard
        // supports.
        let mut clipboard = match arboard::Clipboard::new() {
            Ok(c) => c,
            Err(arboard::Error::ClipboardNotSupported) => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        clipboard.set_text(text)?;
        Ok(true)
    }
}
