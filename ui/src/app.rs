use bizcard_render::Exporter;
use egui::TextureHandle;

use crate::state::CardState;
use crate::utils::file_picker::{ImagePicker, SystemImagePicker};
use crate::utils::save_dialog::SaveDialogExporter;
use crate::widgets::{self, FormActions};

pub struct BizCardApp {
    state: CardState,
    picker: Box<dyn ImagePicker>,
    exporter: Box<dyn Exporter>,
    preview: Option<TextureHandle>,
}

impl BizCardApp {
    /// Called once before the first frame.
    pub fn new(state: CardState) -> Self {
        Self::with_services(state, Box::new(SystemImagePicker), Box::new(SaveDialogExporter::default()))
    }

    /// Build the app with custom dialogs, e.g. mocks in tests.
    pub fn with_services(state: CardState, picker: Box<dyn ImagePicker>, exporter: Box<dyn Exporter>) -> Self {
        Self {
            state,
            picker,
            exporter,
            preview: None,
        }
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CardState {
        &mut self.state
    }

    fn apply(&mut self, actions: FormActions) {
        if actions.pick_background
            && let Some(image) = self.picker.pick_image("Choose background")
        {
            self.state.set_background(Some(image));
        }
        if actions.clear_background {
            self.state.set_background(None);
        }
        if actions.pick_logo
            && let Some(image) = self.picker.pick_image("Choose logo")
        {
            self.state.set_logo(Some(image));
        }
        if actions.clear_logo {
            self.state.set_logo(None);
        }
        if actions.regenerate {
            self.state.regenerate();
        }
        if actions.toggle_lock {
            let locked = self.state.toggle_lock();
            log::debug!("QR position locked: {locked}");
        }
    }
}

impl eframe::App for BizCardApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let actions = egui::SidePanel::left("contact_panel")
            .resizable(false)
            .default_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| widgets::contact_form(ui, &mut self.state))
            .inner;
        self.apply(actions);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                widgets::card_preview(ui, &mut self.state, &mut self.preview);
            });

        // Export after the preview so the saved image matches what is on screen.
        if actions.export {
            self.state.export(self.exporter.as_mut(), chrono::Utc::now());
        }
    }
}
