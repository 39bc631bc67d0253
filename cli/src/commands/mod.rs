//! Command implementations for the bizcard CLI.
//!
//! Each subcommand is implemented in its own module.

pub mod completions;
pub mod config;
pub mod qr;
pub mod render;
pub mod vcard;

pub use completions::generate_completions;
pub use config::run_config;
pub use qr::run_qr;
pub use render::run_render;
pub use vcard::run_vcard;
