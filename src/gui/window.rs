use eframe::egui;

use crate::core::bookmark;
use crate::core::clipboard::SystemClipboard;
use crate::core::settings::{Settings, ThemeMode};
use crate::gui;
use crate::gui::state::UIState;
use crate::gui::toasts::Notifier;

pub struct ApplicationWindow {
    bookmark_dialog: gui::bookmark::BookmarkDialog,
    clipboard: SystemClipboard,
    toasts: egui_notify::Toasts,

    s: UIState,
}

impl ApplicationWindow {
    pub fn new(cc: &eframe::CreationContext, settings: Settings) -> Self {
        let window = Self {
            bookmark_dialog: gui::bookmark::BookmarkDialog::default(),
            clipboard: SystemClipboard::default(),
            toasts: egui_notify::Toasts::default().with_anchor(egui_notify::Anchor::TopRight),
            s: UIState::new(settings),
        };
        window.set_theme(&cc.egui_ctx);
        window
    }

    fn set_theme(&self, ctx: &egui::Context) {
        let theme = match self.s.settings.ui.theme {
            ThemeMode::Dark => egui::Visuals::dark(),
            ThemeMode::Light => egui::Visuals::light(),
        };
        ctx.set_visuals(theme);
    }

    // The dialog only opens on a base URL that parses; a broken settings
    // value ends in an error toast instead.
    fn open_bookmark_dialog(
        dialog: &mut gui::bookmark::BookmarkDialog,
        base_url: &str,
        view: &bookmark::View,
        notifier: &mut dyn Notifier,
    ) {
        match url::Url::parse(base_url) {
            Ok(base) => {
                let url = bookmark::bookmark_url(&base, view);
                dialog.open(url.as_str());
            }
            Err(e) => {
                log::error!("bad bookmark base URL {:?}: {}", base_url, e);
                notifier.error(
                    "Error",
                    "The bookmark base URL in settings.yaml is not a valid URL",
                );
            }
        }
    }

    fn show_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Bookmark current view").clicked() {
                    Self::open_bookmark_dialog(
                        &mut self.bookmark_dialog,
                        &self.s.settings.bookmarks.base_url,
                        &self.s.view,
                        &mut self.toasts,
                    );
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(crate::VERSION);
                });
            });
        });
    }

    fn show_view_editor(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Current view");
            egui::Grid::new("view-editor").num_columns(2).show(ui, |ui| {
                ui.label("latitude");
                ui.add(
                    egui::DragValue::new(&mut self.s.view.latitude)
                        .speed(0.1)
                        .range(-90.0..=90.0)
                        .suffix("°"),
                );
                ui.end_row();

                ui.label("longitude");
                ui.add(
                    egui::DragValue::new(&mut self.s.view.longitude)
                        .speed(0.1)
                        .range(-180.0..=180.0)
                        .suffix("°"),
                );
                ui.end_row();

                ui.label("altitude");
                ui.add(
                    egui::DragValue::new(&mut self.s.view.altitude)
                        .speed(1000.)
                        .range(1.0..=50_000_000.0)
                        .suffix(" m"),
                );
                ui.end_row();
            });
        });
    }
}

impl eframe::App for ApplicationWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.set_theme(ctx);

        self.show_menu(ctx);
        self.show_view_editor(ctx);

        self.bookmark_dialog
            .show(ctx, &mut self.clipboard, &mut self.toasts);

        self.toasts.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.s.settings.save();
    }
}
