//! EXIF metadata encoding
//!
//! This module turns user-entered fields into a TIFF-structured EXIF
//! blob: field sanitization, rational encoding, directory building and
//! blob assembly.

pub mod errors;
pub mod constants;
pub mod rational;
pub mod gps;
pub mod fields;
pub mod ifd;
pub mod tag_names;
pub mod builder;
mod builders;
pub mod assembler;
#[cfg(test)]
mod tests;

pub use errors::{ExifError, ExifResult};
pub use rational::Rational;
pub use gps::{Axis, GpsAltitude, GpsCoordinate};
pub use fields::{FieldSet, SanitizedFields, FIELD_KEYS};
pub use ifd::{DirectoryKind, IFD, IFDEntry, TagValue};
pub use builder::{Directories, EntryOrder, ExifBuilder, WriteOptions};
pub use assembler::ExifAssembler;
