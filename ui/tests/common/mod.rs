use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use bizcard_render::{ExportError, Exporter};
use bizcard_ui::BizCardApp;
use bizcard_ui::state::CardState;
use bizcard_ui::utils::file_picker::ImagePicker;
use egui_kittest::Harness;
use image::{Rgba, RgbaImage};

/// Picker that hands out queued images and records the dialog titles.
#[derive(Default)]
pub struct QueuedPicker {
    pub images: Vec<RgbaImage>,
    pub titles: Rc<RefCell<Vec<String>>>,
}

impl ImagePicker for QueuedPicker {
    fn pick_image(&mut self, title: &str) -> Option<RgbaImage> {
        self.titles.borrow_mut().push(title.to_owned());
        if self.images.is_empty() {
            None
        } else {
            Some(self.images.remove(0))
        }
    }
}

/// Exporter without a share target that keeps saved files in memory.
#[derive(Default)]
pub struct MemoryExporter {
    pub saved: Rc<RefCell<Vec<(String, Vec<u8>)>>>,
    pub cancel: bool,
}

impl Exporter for MemoryExporter {
    fn share(&mut self, _png: &[u8], _file_name: &str) -> Result<(), ExportError> {
        Err(ExportError::ShareUnavailable)
    }

    fn download(&mut self, png: &[u8], file_name: &str) -> Result<PathBuf, ExportError> {
        if self.cancel {
            return Err(ExportError::Cancelled);
        }
        self.saved.borrow_mut().push((file_name.to_owned(), png.to_vec()));
        Ok(PathBuf::from(file_name))
    }
}

#[allow(unused)]
pub fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

#[allow(unused)]
pub fn filled_state() -> CardState {
    let mut state = CardState::default();
    state.form.name = "Ada Lovelace".to_owned();
    state.form.org = "Analytical Engines".to_owned();
    state.form.tel = "+44 20 0000 0000".to_owned();
    state
}

pub fn harness<'a>(state: CardState, picker: QueuedPicker, exporter: MemoryExporter) -> Harness<'a, BizCardApp> {
    Harness::builder()
        .with_size(egui::vec2(900.0, 720.0))
        .build_eframe(move |_| BizCardApp::with_services(state, Box::new(picker), Box::new(exporter)))
}
