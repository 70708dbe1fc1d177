//! EXIF format constants
//!
//! Tag numbers, field type codes and fixed payloads used when building
//! the EXIF directories, so the builders never deal in magic numbers.

/// EXIF wrapper and TIFF header constants
pub mod header {
    /// "Exif\0\0" marker that precedes the TIFF header
    pub const EXIF_MARKER: [u8; 6] = [0x45, 0x78, 0x69, 0x66, 0x00, 0x00];

    /// Standard TIFF version number (42)
    pub const TIFF_VERSION: u16 = 42;

    /// "II" byte order marker for little-endian
    pub const LITTLE_ENDIAN_MARKER: [u8; 2] = [0x49, 0x49];

    /// "MM" byte order marker for big-endian
    pub const BIG_ENDIAN_MARKER: [u8; 2] = [0x4D, 0x4D];

    /// Size of the TIFF header; IFD0 starts right after it
    pub const TIFF_HEADER_SIZE: u32 = 8;
}

/// Field types as defined in the TIFF spec
pub mod field_types {
    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // NUL-terminated 8-bit text
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
}

/// IFD0 (primary image) tags
pub mod tags {
    pub const IMAGE_DESCRIPTION: u16 = 0x010E;
    pub const MAKE: u16 = 0x010F;
    pub const MODEL: u16 = 0x0110;
    pub const ORIENTATION: u16 = 0x0112;
    pub const SOFTWARE: u16 = 0x0131;
    pub const DATE_TIME: u16 = 0x0132;
    pub const ARTIST: u16 = 0x013B;
    pub const COPYRIGHT: u16 = 0x8298;
    pub const EXIF_IFD_POINTER: u16 = 0x8769;
    pub const GPS_IFD_POINTER: u16 = 0x8825;
}

/// Exif sub-IFD tags
pub mod exif_tags {
    pub const EXPOSURE_TIME: u16 = 0x829A;
    pub const F_NUMBER: u16 = 0x829D;
    pub const ISO_SPEED_RATINGS: u16 = 0x8827;
    pub const EXIF_VERSION: u16 = 0x9000;
    pub const DATE_TIME_ORIGINAL: u16 = 0x9003;
    pub const DATE_TIME_DIGITIZED: u16 = 0x9004;
    pub const FOCAL_LENGTH: u16 = 0x920A;
    pub const FLASHPIX_VERSION: u16 = 0xA000;
    pub const LENS_MODEL: u16 = 0xA434;
}

/// GPS sub-IFD tags
pub mod gps_tags {
    pub const VERSION_ID: u16 = 0x0000;
    pub const LATITUDE_REF: u16 = 0x0001;
    pub const LATITUDE: u16 = 0x0002;
    pub const LONGITUDE_REF: u16 = 0x0003;
    pub const LONGITUDE: u16 = 0x0004;
    pub const ALTITUDE_REF: u16 = 0x0005;
    pub const ALTITUDE: u16 = 0x0006;
}

/// Fixed payloads written regardless of user input
pub mod values {
    /// Exif version 2.31
    pub const EXIF_VERSION: [u8; 4] = *b"0231";

    /// FlashPix version 1.0
    pub const FLASHPIX_VERSION: [u8; 4] = *b"0100";

    /// GPS tag version 2.3.0.0
    pub const GPS_VERSION: [u8; 4] = [2, 3, 0, 0];

    /// Value of the Software tag
    pub const SOFTWARE: &str = concat!("exifkit ", env!("CARGO_PKG_VERSION"));

    /// GPSAltitudeRef: at or above sea level
    pub const ALTITUDE_ABOVE_SEA_LEVEL: u8 = 0;

    /// GPSAltitudeRef: below sea level
    pub const ALTITUDE_BELOW_SEA_LEVEL: u8 = 1;
}

/// Orientation values
pub mod orientation {
    pub const TOP_LEFT: u16 = 1;          // 0th row = top, 0th column = left side
    pub const TOP_RIGHT: u16 = 2;         // 0th row = top, 0th column = right side
    pub const BOTTOM_RIGHT: u16 = 3;      // 0th row = bottom, 0th column = right side
    pub const BOTTOM_LEFT: u16 = 4;       // 0th row = bottom, 0th column = left side
    pub const LEFT_TOP: u16 = 5;          // 0th row = left side, 0th column = top
    pub const RIGHT_TOP: u16 = 6;         // 0th row = right side, 0th column = top
    pub const RIGHT_BOTTOM: u16 = 7;      // 0th row = right side, 0th column = bottom
    pub const LEFT_BOTTOM: u16 = 8;       // 0th row = left side, 0th column = bottom

    pub const ALL: [u16; 8] = [
        TOP_LEFT, TOP_RIGHT, BOTTOM_RIGHT, BOTTOM_LEFT,
        LEFT_TOP, RIGHT_TOP, RIGHT_BOTTOM, LEFT_BOTTOM,
    ];
}
