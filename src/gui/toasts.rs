/// Transient, non-blocking user-facing messages.
pub trait Notifier {
    fn info(&mut self, title: &str, message: &str);
    fn warning(&mut self, title: &str, message: &str);
    fn error(&mut self, title: &str, message: &str);
}

// egui_notify takes a single caption, so title and message become two lines.
impl Notifier for egui_notify::Toasts {
    fn info(&mut self, title: &str, message: &str) {
        egui_notify::Toasts::info(self, format!("{title}\n{message}"));
    }

    fn warning(&mut self, title: &str, message: &str) {
        egui_notify::Toasts::warning(self, format!("{title}\n{message}"));
    }

    fn error(&mut self, title: &str, message: &str) {
        egui_notify::Toasts::error(self, format!("{title}\n{message}"));
    }
}
