//! Project layout configuration

pub mod layout;

pub use layout::{ProjectLayout, API_ROOT_ENV, LAYOUT_FILE};
