//! Side panel with the contact fields and the card actions.

use bizcard_vcard::Profile;
use egui::{Button, TextEdit, Ui};

use crate::state::{CardState, Status};

/// Buttons pressed this frame. The app carries them out after the panel is
/// drawn, since some of them open dialogs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormActions {
    pub pick_background: bool,
    pub clear_background: bool,
    pub pick_logo: bool,
    pub clear_logo: bool,
    pub regenerate: bool,
    pub toggle_lock: bool,
    pub export: bool,
}

pub fn contact_form(ui: &mut Ui, state: &mut CardState) -> FormActions {
    let mut actions = FormActions::default();

    ui.heading("Business card");
    ui.add_space(4.0);

    let mut changed = false;
    egui::Grid::new("contact_fields")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            let form = &mut state.form;
            let fields: [(&str, &mut String); 6] = [
                ("Name", &mut form.name),
                ("Company", &mut form.org),
                ("Title", &mut form.title),
                ("Phone", &mut form.tel),
                ("Email", &mut form.email),
                ("Website", &mut form.url),
            ];
            for (label, value) in fields {
                let label = ui.label(label);
                let edit = ui
                    .add(TextEdit::singleline(value).desired_width(180.0))
                    .labelled_by(label.id);
                changed |= edit.changed();
                ui.end_row();
            }
        });
    if changed {
        // Company and name are drawn live; the QR waits for Generate.
        state.mark_dirty();
    }

    let mut profile_changed = false;
    egui::ComboBox::from_label("Importer")
        .selected_text(state.profile.as_str())
        .show_ui(ui, |ui| {
            for profile in Profile::ALL {
                profile_changed |= ui.selectable_value(&mut state.profile, profile, profile.as_str()).changed();
            }
        });
    actions.regenerate |= profile_changed && state.has_qr();

    ui.separator();

    ui.horizontal(|ui| {
        actions.pick_background = ui.button("Choose background").clicked();
        let has_background = state.card().background.is_some();
        actions.clear_background = ui.add_enabled(has_background, Button::new("Clear background")).clicked();
    });
    ui.horizontal(|ui| {
        actions.pick_logo = ui.button("Choose logo").clicked();
        let has_logo = state.card().logo.is_some();
        actions.clear_logo = ui.add_enabled(has_logo, Button::new("Clear logo")).clicked();
    });

    ui.separator();

    actions.regenerate |= ui.button("Generate").clicked();
    actions.toggle_lock = ui.button(state.lock_label()).clicked();
    actions.export = ui.button("Export PNG").clicked();

    ui.add_space(8.0);
    match state.status() {
        Some(Status::Info(message)) => {
            ui.label(message);
        }
        Some(Status::Error(message)) => {
            ui.colored_label(ui.visuals().error_fg_color, message);
        }
        None => {}
    }
    if state.font().is_none() {
        ui.weak("No system font found; company and name are not drawn on the card.");
    }

    actions
}
