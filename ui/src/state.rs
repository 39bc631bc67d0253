//! Editor state shared by the form, the preview and the export button.

use bizcard_render::{
    BizCard, CanvasSize, CardScene, ExportError, ExportOutcome, Exporter, FontFace, GestureController, TouchPhase,
    TouchTracker, encode_png, export, export_file_name, render_card,
};
use bizcard_vcard::{Contact, EncodeOptions, Profile, VersionChoice};
use chrono::{DateTime, Utc};
use image::RgbaImage;

/// The six form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub org: String,
    pub title: String,
    pub tel: String,
    pub email: String,
    pub url: String,
}

impl ContactForm {
    pub fn to_contact(&self) -> Contact {
        Contact {
            name: self.name.clone(),
            org: self.org.clone(),
            title: self.title.clone(),
            tel: self.tel.clone(),
            email: self.email.clone(),
            url: self.url.clone(),
            note: String::new(),
        }
        .trimmed()
    }

    pub fn is_empty(&self) -> bool {
        self.to_contact() == Contact::default()
    }
}

/// Message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct CardState {
    pub form: ContactForm,
    pub profile: Profile,
    card: BizCard,
    gestures: GestureController,
    touches: TouchTracker,
    font: Option<FontFace>,
    canvas: Option<RgbaImage>,
    canvas_size: (u32, u32),
    dirty: bool,
    status: Option<Status>,
}

impl std::fmt::Debug for CardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardState")
            .field("form", &self.form)
            .field("profile", &self.profile)
            .field("placement", &self.gestures.placement())
            .field("locked", &self.gestures.is_locked())
            .field("canvas_size", &self.canvas_size)
            .field("has_qr", &self.card.qr_image().is_some())
            .finish_non_exhaustive()
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl CardState {
    pub fn new(font: Option<FontFace>) -> Self {
        Self {
            form: ContactForm::default(),
            profile: Profile::default(),
            card: BizCard::default(),
            gestures: GestureController::default(),
            touches: TouchTracker::new(),
            font,
            canvas: None,
            canvas_size: (0, 0),
            dirty: true,
            status: None,
        }
    }

    pub fn font(&self) -> Option<&FontFace> {
        self.font.as_ref()
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn card(&self) -> &BizCard {
        &self.card
    }

    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    /// The form or the images changed; redraw on the next frame.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn has_qr(&self) -> bool {
        self.card.qr_image().is_some()
    }

    /// Rebuild the vCard and the QR image from the form.
    pub fn regenerate(&mut self) -> bool {
        self.card.contact = self.form.to_contact();
        self.card.options = EncodeOptions::for_profile(self.profile, VersionChoice::Auto);
        self.dirty = true;
        match self.card.regenerate() {
            Ok(_) => {
                self.status = None;
                true
            }
            Err(e) => {
                log::warn!("QR generation failed: {e}");
                self.card.clear_qr();
                self.status = Some(Status::Error(e.to_string()));
                false
            }
        }
    }

    pub fn set_background(&mut self, background: Option<RgbaImage>) {
        self.card.background = background;
        self.dirty = true;
    }

    /// Replacing or clearing the logo regenerates the QR code.
    pub fn set_logo(&mut self, logo: Option<RgbaImage>) {
        self.card.logo = logo;
        self.regenerate();
    }

    pub fn lock_label(&self) -> &'static str {
        if self.gestures.is_locked() {
            "Lock position: on"
        } else {
            "Lock position: off"
        }
    }

    pub fn toggle_lock(&mut self) -> bool {
        self.touches.clear();
        self.gestures.toggle_lock()
    }

    pub fn is_tracking(&self, id: u64) -> bool {
        self.touches.contains(id)
    }

    /// Feed a touch at canvas-pixel coordinates into the gesture state machine.
    pub fn handle_touch(&mut self, phase: TouchPhase, id: u64, x: f32, y: f32) {
        let (width, height) = self.canvas_size;
        let canvas = CanvasSize::new(width, height);
        if self.gestures.handle(&mut self.touches, phase, id, x, y, canvas) {
            self.dirty = true;
        }
    }

    pub fn canvas(&self) -> Option<&RgbaImage> {
        self.canvas.as_ref()
    }

    fn render(&self, width: u32, height: u32) -> RgbaImage {
        let scene = CardScene {
            width,
            height,
            background: self.card.background.as_ref(),
            org: &self.form.org,
            name: &self.form.name,
            qr: self.card.qr_image(),
            placement: self.gestures.placement(),
        };
        render_card(&scene, self.font.as_ref())
    }

    /// Redraw if anything changed or the canvas was resized. Returns the new
    /// canvas when it was redrawn.
    pub fn refresh(&mut self, width: u32, height: u32) -> Option<&RgbaImage> {
        let size = (width.max(1), height.max(1));
        if !self.dirty && self.canvas_size == size && self.canvas.is_some() {
            return None;
        }
        self.canvas_size = size;
        self.dirty = false;
        let canvas = self.render(size.0, size.1);
        Some(&*self.canvas.insert(canvas))
    }

    /// Export the current canvas, sharing if possible and saving otherwise.
    pub fn export(&mut self, exporter: &mut dyn Exporter, now: DateTime<Utc>) -> Option<ExportOutcome> {
        if self.canvas_size == (0, 0) {
            self.status = Some(Status::Error("Nothing to export yet".to_owned()));
            return None;
        }
        let (width, height) = self.canvas_size;
        self.refresh(width, height);
        let png = match self.canvas.as_ref().map(encode_png) {
            Some(Ok(png)) => png,
            Some(Err(e)) => {
                self.status = Some(Status::Error(format!("Export failed: {e}")));
                return None;
            }
            None => return None,
        };

        let file_name = export_file_name(now);
        match export(exporter, &png, &file_name) {
            Ok(outcome) => {
                let message = match &outcome {
                    ExportOutcome::Shared => format!("Shared {file_name}"),
                    ExportOutcome::Downloaded(path) => format!("Saved {}", path.display()),
                };
                self.status = Some(Status::Info(message));
                Some(outcome)
            }
            Err(ExportError::Cancelled) => {
                self.status = Some(Status::Info("Export cancelled".to_owned()));
                None
            }
            Err(e) => {
                log::error!("export failed: {e}");
                self.status = Some(Status::Error(format!("Export failed: {e}")));
                None
            }
        }
    }
}
