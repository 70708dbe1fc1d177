//! IFD0 tag strategies
//!
//! The primary directory carries the descriptive text fields, the
//! orientation and, when sub-directories exist, the pointers to them.

use log::debug;

use crate::exif::constants::{tags, values};
use crate::exif::fields::SanitizedFields;
use crate::exif::ifd::{DirectoryKind, IFD, IFDEntry};

/// Builds the primary image directory
pub struct ImageTagsBuilder;

impl ImageTagsBuilder {
    /// Build IFD0 entries in their fixed emission order
    ///
    /// Software is always present and Orientation always has a value, so
    /// the result is never empty. Pointer entries are added separately by
    /// `add_sub_ifd_pointers` once the sub-directories are known.
    pub fn build(fields: &SanitizedFields) -> IFD {
        let mut ifd = IFD::new(DirectoryKind::Ifd0);

        Self::add_ascii(&mut ifd, tags::MAKE, &fields.make);
        Self::add_ascii(&mut ifd, tags::MODEL, &fields.model);
        ifd.add_entry(IFDEntry::ascii(tags::SOFTWARE, values::SOFTWARE));
        Self::add_ascii(&mut ifd, tags::DATE_TIME, &fields.date_time);
        Self::add_ascii(&mut ifd, tags::IMAGE_DESCRIPTION, &fields.image_description);
        Self::add_ascii(&mut ifd, tags::ARTIST, &fields.artist);
        Self::add_ascii(&mut ifd, tags::COPYRIGHT, &fields.copyright);
        ifd.add_entry(IFDEntry::short(tags::ORIENTATION, fields.orientation));

        ifd
    }

    /// Add LONG pointer entries for the sub-directories that will be written
    ///
    /// Values are placeholders; the assembler fills in the offsets once
    /// every directory size is known.
    pub fn add_sub_ifd_pointers(ifd: &mut IFD, has_exif: bool, has_gps: bool) {
        if has_exif {
            debug!("Adding Exif sub-IFD pointer");
            ifd.add_entry(IFDEntry::long(tags::EXIF_IFD_POINTER, 0));
        }
        if has_gps {
            debug!("Adding GPS sub-IFD pointer");
            ifd.add_entry(IFDEntry::long(tags::GPS_IFD_POINTER, 0));
        }
    }

    fn add_ascii(ifd: &mut IFD, tag: u16, value: &Option<String>) {
        if let Some(text) = value {
            ifd.add_entry(IFDEntry::ascii(tag, text));
        }
    }
}
