//! CLI argument definitions using clap.
//!
//! The command surface is deliberately thin: one positional path to the
//! Python file to analyze, no flags.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Path to the Python file to analyze
    pub file: Option<PathBuf>,
}

impl Arguments {
    /// Check if a file was provided, otherwise print usage and return None.
    pub fn with_file_or_help(self) -> Option<PathBuf> {
        match self.file {
            Some(file) => Some(file),
            None => {
                Self::command().print_help().ok();
                None
            }
        }
    }
}
