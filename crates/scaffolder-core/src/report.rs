//! User-facing output for scaffold runs
//!
//! Success output goes to stdout, diagnostics to stderr. [`Reporter`] takes
//! both writers so the split can be exercised without a terminal.

use crate::config::ProjectLayout;
use crate::error::ScaffoldError;
use crate::naming::ModuleName;
use colored::Colorize;
use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;

/// Manual wiring instructions printed after a module is created
///
/// Registering the router is left to the developer; these lines tell them how.
pub fn next_steps(name: &ModuleName, layout: &ProjectLayout) -> Vec<String> {
    vec![
        format!(
            "Next: mount the router in {}",
            layout.aggregate_router_display()
        ),
        format!(
            "  import {{ {} }} from \"{}\";",
            name.router_ident(),
            layout.router_import_path(name.as_str())
        ),
        format!(
            "  // In router object: {}: {}",
            name.as_str(),
            name.router_ident()
        ),
    ]
}

/// Writes scaffold results to an output and an error stream
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Reporter<Stdout, Stderr> {
    /// Reporter bound to the process's stdout and stderr
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// The created directory followed by the wiring instructions
    pub fn success(
        &mut self,
        module_dir: &Path,
        name: &ModuleName,
        layout: &ProjectLayout,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {}",
            "Created".green().bold(),
            module_dir.display()
        )?;
        for line in next_steps(name, layout) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }

    /// One line per file written into the module
    pub fn written<'a>(&mut self, files: impl IntoIterator<Item = &'a str>) -> io::Result<()> {
        for file in files {
            writeln!(self.out, "  {} {}", "->".blue(), file)?;
        }
        self.out.flush()
    }

    /// What a dry run would have written
    pub fn dry_run<'a>(
        &mut self,
        module_dir: &Path,
        files: impl IntoIterator<Item = &'a str>,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {}",
            "Would create".cyan().bold(),
            module_dir.display()
        )?;
        for file in files {
            writeln!(self.out, "  {} {}", "->".blue(), file)?;
        }
        writeln!(self.out, "{}", "Dry run: nothing was written.".dimmed())?;
        self.out.flush()
    }

    /// A one-line diagnostic
    pub fn error(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.err, "{} {}", "Error:".red().bold(), message)?;
        self.err.flush()
    }

    /// A one-line diagnostic for a scaffold failure
    pub fn scaffold_error(&mut self, err: &ScaffoldError) -> io::Result<()> {
        self.error(err)
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
