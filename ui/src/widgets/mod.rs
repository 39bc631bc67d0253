mod card_preview;
mod contact_form;

pub use card_preview::{MOUSE_TOUCH_ID, card_preview, to_color_image};
pub use contact_form::{FormActions, contact_form};
