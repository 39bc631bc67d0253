pub mod file_picker;
pub mod fonts;
pub mod save_dialog;
