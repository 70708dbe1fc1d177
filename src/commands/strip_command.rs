//! Metadata removal command

use clap::ArgMatches;

use crate::api;
use crate::commands::batch::{self, OutputTarget};
use crate::commands::command_traits::Command;
use crate::exif::errors::ExifResult;
use crate::utils::logger::Logger;

/// Default suffix for stripped files
pub const STRIP_SUFFIX: &str = ".clean.png";

/// Command for removing EXIF metadata from PNG files
pub struct StripCommand<'a> {
    inputs: Vec<String>,
    output: OutputTarget,
    logger: &'a Logger,
}

impl<'a> StripCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExifResult<Self> {
        let inputs = batch::input_files(args)?;
        let output = OutputTarget::from_args(args, inputs.len(), STRIP_SUFFIX)?;
        Ok(StripCommand { inputs, output, logger })
    }
}

impl<'a> Command for StripCommand<'a> {
    fn execute(&self) -> ExifResult<()> {
        batch::run_batch(&self.inputs, "Stripping metadata", |input| {
            let output = self.output.path_for(input);
            api::strip_png_file(input, &output, self.logger)
                .map(|_| ())
                .map_err(|e| {
                    let _ = self.logger.log_outcome("strip", input, &format!("failed: {}", e));
                    e
                })
        })
    }
}
