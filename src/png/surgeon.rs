//! eXIf chunk insertion and removal
//!
//! Both operations copy every other chunk byte for byte, so the only
//! difference between input and output is the eXIf chunk itself.

use log::{debug, info};

use crate::exif::errors::{ExifError, ExifResult};
use crate::png::chunk::{chunk_types, ChunkReader, PngChunk, PNG_SIGNATURE};

/// Rewrites the chunk stream of a PNG buffer
pub struct ChunkSurgeon;

impl ChunkSurgeon {
    /// Insert an EXIF blob as an eXIf chunk right after IHDR
    ///
    /// Any eXIf chunk already present is dropped, so inserting twice
    /// leaves a single chunk holding the latest blob. Fails without
    /// output if the signature is wrong, a chunk is truncated, or no IHDR
    /// chunk is found.
    pub fn insert_metadata(png: &[u8], exif_blob: &[u8]) -> ExifResult<Vec<u8>> {
        let exif_chunk = PngChunk::new(chunk_types::EXIF, exif_blob.to_vec())?;
        let mut reader = ChunkReader::new(png)?;

        let mut output = Vec::with_capacity(png.len() + exif_chunk.total_size());
        output.extend_from_slice(&PNG_SIGNATURE);

        let mut inserted = false;
        let mut dropped = 0;

        for chunk in reader.by_ref() {
            let chunk = chunk?;

            if chunk.is_type(&chunk_types::EXIF) {
                debug!("Dropping existing eXIf chunk at offset {} ({} bytes)", chunk.offset, chunk.length());
                dropped += 1;
                continue;
            }

            output.extend_from_slice(chunk.raw());

            if !inserted && chunk.is_type(&chunk_types::IHDR) {
                exif_chunk.write_to(&mut output)?;
                inserted = true;
                debug!("Inserted eXIf chunk after IHDR: {} bytes, CRC {:#010x}",
                       exif_chunk.length(), exif_chunk.crc());
            }
        }

        if !inserted {
            return Err(ExifError::MissingIhdr);
        }

        output.extend_from_slice(reader.remaining());
        info!("Wrote eXIf chunk ({} bytes), replaced {} existing", exif_chunk.length(), dropped);
        Ok(output)
    }

    /// Remove every eXIf chunk
    ///
    /// A PNG without eXIf chunks comes back unchanged.
    pub fn strip_metadata(png: &[u8]) -> ExifResult<Vec<u8>> {
        let mut reader = ChunkReader::new(png)?;

        let mut output = Vec::with_capacity(png.len());
        output.extend_from_slice(&PNG_SIGNATURE);

        let mut removed = 0;
        for chunk in reader.by_ref() {
            let chunk = chunk?;
            if chunk.is_type(&chunk_types::EXIF) {
                debug!("Removing eXIf chunk at offset {} ({} bytes)", chunk.offset, chunk.length());
                removed += 1;
            } else {
                output.extend_from_slice(chunk.raw());
            }
        }

        output.extend_from_slice(reader.remaining());
        info!("Removed {} eXIf chunk(s)", removed);
        Ok(output)
    }
}
