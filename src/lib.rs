pub mod io;
pub mod exif;
pub mod png;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{
    build_exif_blob, list_chunks, remove_exif_from_png, write_exif_to_png, ChunkSummary, ExifKit,
};

pub use exif::{EntryOrder, ExifError, ExifResult, FieldSet, WriteOptions};
pub use png::ChunkSurgeon;
