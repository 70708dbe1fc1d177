//! PNG container handling
//!
//! Just enough of PNG to relocate one chunk: signature check, chunk
//! streaming, CRC-32 and eXIf insertion/removal.

pub mod crc;
pub mod chunk;
pub mod surgeon;

pub use chunk::{chunk_types, read_chunks, validate_signature, ChunkReader, PngChunk, RawChunk, PNG_SIGNATURE};
pub use crc::{crc32, Crc32};
pub use surgeon::ChunkSurgeon;
