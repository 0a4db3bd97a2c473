use eframe::egui;

use crate::core::clipboard::ClipboardBackend;
use crate::gui::toasts::Notifier;

/// Modal dialog presenting a bookmark URL for copying.
#[derive(Default)]
pub struct BookmarkDialog {
    bookmark: String,
    visible: bool,
}

impl BookmarkDialog {
    /// Populates the dialog with `url` and displays it. The URL is taken
    /// verbatim.
    pub fn open(&mut self, url: &str) {
        self.bookmark = url.to_owned();
        self.visible = true;
    }

    pub fn bookmark(&self) -> &str {
        &self.bookmark
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Pushes the displayed link to the clipboard. Every outcome ends in a
    /// toast; nothing propagates past this component.
    pub fn copy_url_to_clipboard(
        &self,
        clipboard: &mut dyn ClipboardBackend,
        notifier: &mut dyn Notifier,
    ) {
        match clipboard.copy_text(&self.bookmark) {
            Ok(true) => notifier.info("Bookmark Copied", "The link was copied to the clipboard"),
            Ok(false) => notifier.warning("Bookmark Not Copied", "The link could not be copied"),
            Err(e) => {
                log::error!("failed to copy {:?} to the clipboard: {}", self.bookmark, e);
                notifier.error("Error", "Unable to copy link");
            }
        }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        clipboard: &mut dyn ClipboardBackend,
        notifier: &mut dyn Notifier,
    ) {
        let mut is_open = self.visible;
        egui::Window::new("Bookmark")
            .open(&mut is_open)
            .collapsible(false)
            .resizable(false)
            .default_size((380., 80.))
            .show(ctx, |ui| {
                ui.label("Copy this link to return to the current view later:");
                ui.add(egui::TextEdit::singleline(&mut self.bookmark).desired_width(f32::INFINITY));
                if ui.button("Copy to clipboard").clicked() {
                    self.copy_url_to_clipboard(clipboard, notifier);
                }
            });
        self.visible = is_open;
    }
}
