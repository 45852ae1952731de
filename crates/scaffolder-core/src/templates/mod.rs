//! Module templates: rendering and writing
//!
//! This module provides:
//! - The schema, procedure and router stubs rendered from a module name
//! - A staged writer that publishes all files at once

pub mod render;
pub mod writer;

pub use render::{
    render_module, RenderedFile, RenderedModule, CREATE_PROCEDURE_FILE, ROUTER_FILE, TYPES_FILE,
};
pub use writer::write_module;
