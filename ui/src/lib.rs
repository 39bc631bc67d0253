//! Desktop editor: contact form on the left, live card preview on the right.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::BizCardApp;
