//! Directory builder strategy modules
//!
//! One builder per directory of the EXIF blob, used by `ExifBuilder`.

pub mod image_tags;
pub mod camera_tags;
pub mod gps_tags;
