//! PNG chunk parsing and construction
//!
//! A PNG file is an 8-byte signature followed by chunks laid out as
//!
//! ```text
//! length (u32 BE) | type (4 ASCII bytes) | data (length bytes) | CRC (u32 BE)
//! ```
//!
//! where the CRC covers type and data. Chunks read from a file are kept
//! as borrowed slices so they can be copied back byte for byte.

use byteorder::{BigEndian, ByteOrder};
use log::{trace, warn};

use crate::exif::errors::{ExifError, ExifResult};
use crate::io::byte_order::{BigEndianHandler, ByteOrderHandler};
use crate::png::crc::Crc32;

/// The fixed 8-byte PNG signature
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Largest data length a chunk may declare
pub const MAX_CHUNK_LENGTH: usize = 0x7FFF_FFFF;

/// Length, type and CRC fields around the data
pub const CHUNK_OVERHEAD: usize = 12;

/// Chunk type tags
pub mod chunk_types {
    /// Image header, always the first chunk
    pub const IHDR: [u8; 4] = *b"IHDR";
    /// EXIF metadata
    pub const EXIF: [u8; 4] = *b"eXIf";
    /// Image trailer, always the last chunk
    pub const IEND: [u8; 4] = *b"IEND";
}

/// Checks the 8-byte PNG signature
pub fn validate_signature(png: &[u8]) -> ExifResult<()> {
    if png.len() < PNG_SIGNATURE.len() || png[..PNG_SIGNATURE.len()] != PNG_SIGNATURE {
        return Err(ExifError::InvalidPngSignature);
    }
    Ok(())
}

/// A chunk as it appears in an input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawChunk<'a> {
    /// Position of the length field in the file
    pub offset: usize,
    pub chunk_type: [u8; 4],
    pub data: &'a [u8],
    /// CRC as stored in the file, not verified
    pub crc: u32,
    raw: &'a [u8],
}

impl<'a> RawChunk<'a> {
    /// The full chunk including length, type and CRC fields
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    pub fn length(&self) -> usize {
        self.data.len()
    }

    pub fn is_type(&self, chunk_type: &[u8; 4]) -> bool {
        &self.chunk_type == chunk_type
    }

    pub fn type_name(&self) -> String {
        String::from_utf8_lossy(&self.chunk_type).into_owned()
    }

    /// CRC over type and data as it should be stored
    pub fn computed_crc(&self) -> u32 {
        chunk_crc(&self.chunk_type, self.data)
    }

    pub fn has_valid_crc(&self) -> bool {
        self.crc == self.computed_crc()
    }
}

/// Streams the chunks of a PNG buffer
///
/// Stops after IEND; anything after it is available from `remaining`.
/// A chunk that runs past the end of the buffer ends the stream with a
/// `TruncatedChunk` error.
pub struct ChunkReader<'a> {
    bytes: &'a [u8],
    offset: usize,
    finished: bool,
}

impl<'a> ChunkReader<'a> {
    /// Validates the signature and positions the reader at the first chunk
    pub fn new(png: &'a [u8]) -> ExifResult<Self> {
        validate_signature(png)?;
        Ok(ChunkReader {
            bytes: png,
            offset: PNG_SIGNATURE.len(),
            finished: false,
        })
    }

    /// Bytes not consumed as chunks
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }

    fn read_chunk(&mut self) -> ExifResult<RawChunk<'a>> {
        let start = self.offset;
        let available = self.bytes.len() - start;
        if available < CHUNK_OVERHEAD {
            return Err(ExifError::TruncatedChunk { offset: start, needed: CHUNK_OVERHEAD, available });
        }

        let length = BigEndian::read_u32(&self.bytes[start..start + 4]) as usize;
        let total = CHUNK_OVERHEAD + length;
        if available < total {
            return Err(ExifError::TruncatedChunk { offset: start, needed: total, available });
        }

        let mut chunk_type = [0u8; 4];
        chunk_type.copy_from_slice(&self.bytes[start + 4..start + 8]);
        let data = &self.bytes[start + 8..start + 8 + length];
        let crc = BigEndian::read_u32(&self.bytes[start + 8 + length..start + total]);

        self.offset += total;

        let chunk = RawChunk {
            offset: start,
            chunk_type,
            data,
            crc,
            raw: &self.bytes[start..start + total],
        };
        trace!("Chunk {} at offset {}: {} bytes", chunk.type_name(), start, length);
        Ok(chunk)
    }
}

impl<'a> Iterator for ChunkReader<'a> {
    type Item = ExifResult<RawChunk<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.offset >= self.bytes.len() {
            return None;
        }

        match self.read_chunk() {
            Ok(chunk) => {
                if chunk.is_type(&chunk_types::IEND) {
                    self.finished = true;
                    if self.offset < self.bytes.len() {
                        warn!("{} bytes after IEND kept as is", self.bytes.len() - self.offset);
                    }
                }
                Some(Ok(chunk))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Reads every chunk of a PNG buffer
pub fn read_chunks(png: &[u8]) -> ExifResult<Vec<RawChunk<'_>>> {
    ChunkReader::new(png)?.collect()
}

/// A chunk built in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngChunk {
    pub chunk_type: [u8; 4],
    pub data: Vec<u8>,
}

impl PngChunk {
    pub fn new(chunk_type: [u8; 4], data: Vec<u8>) -> ExifResult<Self> {
        if data.len() > MAX_CHUNK_LENGTH {
            return Err(ExifError::ChunkTooLarge(data.len()));
        }
        Ok(PngChunk { chunk_type, data })
    }

    pub fn length(&self) -> usize {
        self.data.len()
    }

    /// Serialized size including length, type and CRC fields
    pub fn total_size(&self) -> usize {
        CHUNK_OVERHEAD + self.data.len()
    }

    /// CRC over type and data
    pub fn crc(&self) -> u32 {
        chunk_crc(&self.chunk_type, &self.data)
    }

    /// Appends the serialized chunk to `out`
    pub fn write_to(&self, out: &mut Vec<u8>) -> ExifResult<()> {
        let handler = BigEndianHandler;
        handler.write_u32(out, self.data.len() as u32)?;
        out.extend_from_slice(&self.chunk_type);
        out.extend_from_slice(&self.data);
        handler.write_u32(out, self.crc())?;
        Ok(())
    }

    pub fn to_bytes(&self) -> ExifResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.total_size());
        self.write_to(&mut out)?;
        Ok(out)
    }
}

fn chunk_crc(chunk_type: &[u8; 4], data: &[u8]) -> u32 {
    let mut hasher = Crc32::new();
    hasher.update(chunk_type);
    hasher.update(data);
    hasher.finalize()
}
