//! PNG chunk listing command
//!
//! Shows the chunk layout of each input and flags stored CRCs that do
//! not match their chunk.

use clap::ArgMatches;
use log::{info, warn};

use crate::api::{self, ChunkSummary};
use crate::commands::batch;
use crate::commands::command_traits::Command;
use crate::exif::errors::ExifResult;
use crate::png::chunk_types;
use crate::utils::logger::Logger;

/// Command for listing the chunks of PNG files
pub struct ChunksCommand<'a> {
    inputs: Vec<String>,
    logger: &'a Logger,
}

impl<'a> ChunksCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExifResult<Self> {
        Ok(ChunksCommand {
            inputs: batch::input_files(args)?,
            logger,
        })
    }

    fn display_chunks(&self, input: &str, chunks: &[ChunkSummary]) {
        info!("{}: {} chunks", input, chunks.len());
        info!("  {:>8}  {:<4}  {:>10}  {:<10}  CRC", "Offset", "Type", "Length", "Stored");

        for chunk in chunks {
            info!("  {:>8}  {:<4}  {:>10}  {:#010x}  {}",
                  chunk.offset, chunk.chunk_type, chunk.length, chunk.crc,
                  if chunk.crc_valid { "ok" } else { "MISMATCH" });
        }

        let exif_count = chunks.iter()
            .filter(|chunk| chunk.chunk_type.as_bytes() == chunk_types::EXIF)
            .count();
        match exif_count {
            0 => info!("  No EXIF metadata"),
            1 => info!("  EXIF metadata present"),
            n => warn!("  {} eXIf chunks; only one is allowed", n),
        }
    }
}

impl<'a> Command for ChunksCommand<'a> {
    fn execute(&self) -> ExifResult<()> {
        batch::run_batch(&self.inputs, "Reading chunks", |input| {
            let chunks = api::png_file_chunks(input, self.logger)?;
            self.display_chunks(input, &chunks);
            Ok(())
        })
    }
}
