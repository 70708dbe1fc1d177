//! TIFF field type utilities

use crate::exif::constants::field_types;

/// Determine how much space a particular TIFF field type needs in bytes
///
/// Unknown types are treated as one byte per value.
pub fn get_field_type_size(field_type: u16) -> usize {
    match field_type {
        field_types::BYTE | field_types::ASCII | field_types::UNDEFINED => 1,
        field_types::SHORT => 2,
        field_types::LONG => 4,
        field_types::RATIONAL => 8,
        _ => 1,
    }
}

/// Get the name of a TIFF field type
pub fn get_field_type_name(field_type: u16) -> &'static str {
    match field_type {
        field_types::BYTE => "BYTE",
        field_types::ASCII => "ASCII",
        field_types::SHORT => "SHORT",
        field_types::LONG => "LONG",
        field_types::RATIONAL => "RATIONAL",
        field_types::UNDEFINED => "UNDEFINED",
        _ => "Unknown",
    }
}
