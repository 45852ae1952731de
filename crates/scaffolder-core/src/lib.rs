//! API Scaffolder Core - Shared library for scaffolding oRPC API modules
//!
//! Given a module name, this library creates `packages/api/modules/<name>/`
//! inside a supastarter-style monorepo with three stubs:
//!
//! - `types.ts` - a zod schema and its inferred type
//! - `procedures/create.ts` - a `create` procedure that is not implemented yet
//! - `router.ts` - a router exposing the procedure under `create`
//!
//! # Architecture
//!
//! The run is a linear pipeline, each step in its own module:
//!
//! - [`naming`] - normalize and validate the name, derive identifiers
//! - [`preconditions`] - check the API package exists and the module does not
//! - [`templates`] - render the stubs and write them through a staging directory
//! - [`report`] - success and error output
//!
//! [`scaffold::scaffold_module`] runs the whole pipeline.
//!
//! # Example Usage
//!
//! ```ignore
//! use api_scaffolder_core::{scaffold_module, ScaffoldRequest};
//!
//! let outcome = scaffold_module(&ScaffoldRequest::new("feedback", ".")).await?;
//! println!("{}", outcome.paths.module_dir.display());
//! ```

pub mod config;
pub mod error;
pub mod naming;
pub mod preconditions;
pub mod report;
pub mod scaffold;
pub mod templates;

// Re-export main types for convenience
pub use config::ProjectLayout;
pub use error::{Result, ScaffoldError};
pub use naming::{kebab_to_pascal, ModuleName};
pub use preconditions::{check_preconditions, ModulePaths};
pub use scaffold::{scaffold_module, ScaffoldOutcome, ScaffoldRequest};
pub use templates::{render_module, write_module, RenderedFile, RenderedModule};
