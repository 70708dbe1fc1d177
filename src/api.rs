use std::fs;
use log::{debug, info, warn};

use crate::exif::builder::{Directories, ExifBuilder, WriteOptions};
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::fields::FieldSet;
use crate::png::chunk::{read_chunks, RawChunk};
use crate::png::surgeon::ChunkSurgeon;
use crate::utils::logger::Logger;

/// Main interface to the ExifKit library
pub struct ExifKit {
    logger: Logger,
}

impl ExifKit {
    /// Create a new ExifKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to an operation log; nothing is
    ///   journaled without one
    ///
    /// # Returns
    /// An ExifKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> ExifResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(ExifKit { logger })
    }

    /// Write metadata into a PNG file
    ///
    /// See [`write_png_file`].
    pub fn write_png(&self,
                     input_path: &str,
                     output_path: &str,
                     fields: &FieldSet,
                     options: &WriteOptions) -> ExifResult<usize> {
        write_png_file(input_path, output_path, fields, options, &self.logger)
    }

    /// Remove all EXIF metadata from a PNG file
    ///
    /// See [`strip_png_file`].
    pub fn strip_png(&self, input_path: &str, output_path: &str) -> ExifResult<usize> {
        strip_png_file(input_path, output_path, &self.logger)
    }

    /// List the chunks of a PNG file
    pub fn chunks(&self, input_path: &str) -> ExifResult<Vec<ChunkSummary>> {
        png_file_chunks(input_path, &self.logger)
    }
}

/// Write metadata into a PNG file
///
/// The input is read completely and the output is only written once the
/// new file has been fully built, so on any error neither file is
/// touched. `input_path` and `output_path` may be the same.
///
/// # Returns
/// Size of the written file in bytes
pub fn write_png_file(input_path: &str,
                      output_path: &str,
                      fields: &FieldSet,
                      options: &WriteOptions,
                      logger: &Logger) -> ExifResult<usize> {
    let png = fs::read(input_path)?;
    let output = write_exif_to_png(&png, fields, options)?;
    fs::write(output_path, &output)?;

    info!("Wrote {} ({} bytes)", output_path, output.len());
    record(logger, "write", input_path, &format!("-> {} ({} bytes)", output_path, output.len()));
    Ok(output.len())
}

/// Remove all EXIF metadata from a PNG file
///
/// # Returns
/// Size of the written file in bytes
pub fn strip_png_file(input_path: &str, output_path: &str, logger: &Logger) -> ExifResult<usize> {
    let png = fs::read(input_path)?;
    let output = remove_exif_from_png(&png)?;
    fs::write(output_path, &output)?;

    info!("Wrote {} ({} bytes removed)", output_path, png.len() - output.len());
    record(logger, "strip", input_path, &format!("-> {} ({} bytes)", output_path, output.len()));
    Ok(output.len())
}

/// Chunk summaries of a PNG file
pub fn png_file_chunks(input_path: &str, logger: &Logger) -> ExifResult<Vec<ChunkSummary>> {
    let png = fs::read(input_path)?;
    let chunks = list_chunks(&png)?;
    record(logger, "chunks", input_path, &format!("{} chunks", chunks.len()));
    Ok(chunks)
}

/// Journal an operation that already succeeded; a journal failure only warns
fn record(logger: &Logger, operation: &str, input_path: &str, outcome: &str) {
    if let Err(e) = logger.log_outcome(operation, input_path, outcome) {
        warn!("Could not journal {} of {}: {}", operation, input_path, e);
    }
}

/// One chunk of a PNG file, detached from the file buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSummary {
    pub offset: usize,
    pub chunk_type: String,
    pub length: usize,
    pub crc: u32,
    /// Whether the stored CRC matches the recomputed one
    pub crc_valid: bool,
}

impl From<&RawChunk<'_>> for ChunkSummary {
    fn from(chunk: &RawChunk<'_>) -> Self {
        ChunkSummary {
            offset: chunk.offset,
            chunk_type: chunk.type_name(),
            length: chunk.length(),
            crc: chunk.crc,
            crc_valid: chunk.has_valid_crc(),
        }
    }
}

/// Sanitize fields and build the EXIF directories
///
/// Fails with `NoWritableContent` when no user-supplied field survives
/// sanitization.
pub fn build_directories(fields: &FieldSet, options: &WriteOptions) -> ExifResult<Directories> {
    let sanitized = fields.sanitize();
    if !sanitized.has_writable_content() {
        return Err(ExifError::NoWritableContent);
    }
    Ok(ExifBuilder::new(*options).build(&sanitized))
}

/// Build the complete EXIF blob, `Exif\0\0` marker included
pub fn build_exif_blob(fields: &FieldSet, options: &WriteOptions) -> ExifResult<Vec<u8>> {
    build_directories(fields, options)?.assemble()
}

/// Return a copy of `png` carrying the given metadata in an eXIf chunk
///
/// Any eXIf chunk already present is replaced.
pub fn write_exif_to_png(png: &[u8], fields: &FieldSet, options: &WriteOptions) -> ExifResult<Vec<u8>> {
    let blob = build_exif_blob(fields, options)?;
    debug!("EXIF blob: {} bytes", blob.len());
    ChunkSurgeon::insert_metadata(png, &blob)
}

/// Return a copy of `png` without any eXIf chunk
pub fn remove_exif_from_png(png: &[u8]) -> ExifResult<Vec<u8>> {
    ChunkSurgeon::strip_metadata(png)
}

/// Summaries of every chunk up to and including IEND
pub fn list_chunks(png: &[u8]) -> ExifResult<Vec<ChunkSummary>> {
    Ok(read_chunks(png)?.iter().map(ChunkSummary::from).collect())
}
