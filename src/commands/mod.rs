//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod write_command;
pub mod strip_command;
pub mod chunks_command;
mod batch;

pub use command_traits::{Command, CommandFactory};
pub use write_command::{WriteCommand, FIELD_FLAGS};
pub use strip_command::StripCommand;
pub use chunks_command::ChunksCommand;

use clap::ArgMatches;
use crate::exif::errors::ExifResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct ExifkitCommandFactory;

impl ExifkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ExifkitCommandFactory
    }
}

impl Default for ExifkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for ExifkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> ExifResult<Box<dyn Command + 'a>> {
        if args.get_flag("write") {
            Ok(Box::new(WriteCommand::new(args, logger)?))
        } else if args.get_flag("strip") {
            Ok(Box::new(StripCommand::new(args, logger)?))
        } else {
            // Listing chunks is the default and never modifies anything
            Ok(Box::new(ChunksCommand::new(args, logger)?))
        }
    }
}
