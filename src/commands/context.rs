//! Command context
//!
//! The context carries the working directory every command operates on and
//! the verbosity that decides what gets printed.

use std::env;
use std::path::{Path, PathBuf};

/// Context shared by all command handlers
pub struct Context {
    /// Directory the project files live in
    pub working_dir: PathBuf,

    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Context {
    /// Create a context for the current directory
    pub fn new() -> Self {
        Context {
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            verbosity: Verbosity::Normal,
        }
    }

    /// Create a context with a specific working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Resolve a file name inside the working directory
    pub fn path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.working_dir.join(name)
    }

    /// Print command feedback
    pub fn report(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            println!("{}", message);
        }
    }

    /// Print a reported (non-fatal) failure
    pub fn report_failure(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            println!("{}", message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("[DEBUG] {}", message);
        }
    }

    /// Print a debug line for a written file
    pub fn print_write(&self, path: &Path) {
        self.print_debug(&format!("writing {}", path.display()));
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
