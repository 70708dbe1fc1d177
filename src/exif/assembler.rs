//! EXIF blob assembly
//!
//! Lays out the `Exif\0\0` marker, a little-endian TIFF header, IFD0 and
//! the optional sub-directories back to back:
//!
//! ```text
//! "Exif\0\0" | II 2A 00 08 00 00 00 | IFD0 | Exif IFD | GPS IFD
//! ```
//!
//! All offsets are relative to the TIFF header, so IFD0 sits at 8, the
//! Exif sub-IFD right after IFD0, and the GPS sub-IFD right after that.

use log::{debug, info, warn};

use crate::exif::constants::{header, tags};
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::ifd::IFD;
use crate::io::byte_order::ByteOrder;

/// Byte order used for every directory
pub const BYTE_ORDER: ByteOrder = ByteOrder::LittleEndian;

/// Links directories together and serializes them
pub struct ExifAssembler;

impl ExifAssembler {
    /// Assemble a complete EXIF blob
    ///
    /// Sizes are computed first so that the IFD0 pointer entries can be
    /// resolved before anything is written. A pointer entry whose
    /// sub-directory is missing is written as zero.
    pub fn assemble(ifd0: &IFD, exif_ifd: Option<&IFD>, gps_ifd: Option<&IFD>) -> ExifResult<Vec<u8>> {
        let ifd0_size = ifd0.size();
        let exif_size = exif_ifd.map_or(0, IFD::size);
        let gps_size = gps_ifd.map_or(0, IFD::size);

        let ifd0_offset = header::TIFF_HEADER_SIZE as usize;
        let exif_offset = ifd0_offset + ifd0_size;
        let gps_offset = exif_offset + exif_size;
        let tiff_size = gps_offset + gps_size;

        let to_u32 = |offset: usize| u32::try_from(offset)
            .map_err(|_| ExifError::GenericError(format!("EXIF blob too large: {} bytes", tiff_size)));

        debug!("Directory sizes: IFD0={}, Exif={}, GPS={}", ifd0_size, exif_size, gps_size);

        let mut linked_ifd0 = ifd0.clone();
        Self::resolve_pointer(&mut linked_ifd0, tags::EXIF_IFD_POINTER, exif_ifd.map(|_| to_u32(exif_offset)).transpose()?);
        Self::resolve_pointer(&mut linked_ifd0, tags::GPS_IFD_POINTER, gps_ifd.map(|_| to_u32(gps_offset)).transpose()?);

        let handler = BYTE_ORDER.create_handler();
        let mut blob = Vec::with_capacity(header::EXIF_MARKER.len() + tiff_size);

        blob.extend_from_slice(&header::EXIF_MARKER);
        Self::write_header(&mut blob, BYTE_ORDER)?;

        blob.extend_from_slice(&linked_ifd0.to_bytes(to_u32(ifd0_offset)?, handler.as_ref())?);
        if let Some(exif) = exif_ifd {
            blob.extend_from_slice(&exif.to_bytes(to_u32(exif_offset)?, handler.as_ref())?);
        }
        if let Some(gps) = gps_ifd {
            blob.extend_from_slice(&gps.to_bytes(to_u32(gps_offset)?, handler.as_ref())?);
        }

        info!("Assembled EXIF blob: {} bytes, {}", blob.len(), BYTE_ORDER.name());
        Ok(blob)
    }

    /// Write the TIFF header
    ///
    /// Byte order marker, version 42 and the offset of IFD0.
    fn write_header(blob: &mut Vec<u8>, byte_order: ByteOrder) -> ExifResult<()> {
        let handler = byte_order.create_handler();
        blob.extend_from_slice(&byte_order.marker());
        handler.write_u16(blob, header::TIFF_VERSION)?;
        handler.write_u32(blob, header::TIFF_HEADER_SIZE)?;
        Ok(())
    }

    fn resolve_pointer(ifd0: &mut IFD, tag: u16, offset: Option<u32>) {
        if !ifd0.has_tag(tag) {
            return;
        }

        match offset {
            Some(value) => {
                debug!("Pointer {:#06x} -> {}", tag, value);
                ifd0.set_long_value(tag, value);
            }
            None => {
                warn!("Pointer {:#06x} has no sub-directory, writing 0", tag);
                ifd0.set_long_value(tag, 0);
            }
        }
    }
}
