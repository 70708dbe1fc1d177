//! Exif sub-IFD tag strategies
//!
//! Capture settings: timestamps, exposure, aperture, sensitivity and lens.

use crate::exif::constants::{exif_tags, values};
use crate::exif::fields::SanitizedFields;
use crate::exif::ifd::{DirectoryKind, IFD, IFDEntry};
use crate::exif::rational::Rational;

/// Builds the Exif sub-IFD
pub struct CameraTagsBuilder;

impl CameraTagsBuilder {
    /// Build the Exif sub-IFD, or `None` when no capture field is present
    ///
    /// The version tags are written whenever the directory exists; they
    /// alone never cause it to be written.
    pub fn build(fields: &SanitizedFields) -> Option<IFD> {
        if !fields.has_exif_section() {
            return None;
        }

        let mut ifd = IFD::new(DirectoryKind::Exif);

        if let Some(date_time) = &fields.date_time {
            ifd.add_entry(IFDEntry::ascii(exif_tags::DATE_TIME_ORIGINAL, date_time));
            ifd.add_entry(IFDEntry::ascii(exif_tags::DATE_TIME_DIGITIZED, date_time));
        }
        ifd.add_entry(IFDEntry::undefined(exif_tags::EXIF_VERSION, &values::EXIF_VERSION));
        ifd.add_entry(IFDEntry::undefined(exif_tags::FLASHPIX_VERSION, &values::FLASHPIX_VERSION));

        Self::add_rational(&mut ifd, exif_tags::EXPOSURE_TIME, fields.exposure_time);
        Self::add_rational(&mut ifd, exif_tags::F_NUMBER, fields.f_number);
        if let Some(iso) = fields.iso_speed_ratings {
            ifd.add_entry(IFDEntry::short(exif_tags::ISO_SPEED_RATINGS, iso));
        }
        Self::add_rational(&mut ifd, exif_tags::FOCAL_LENGTH, fields.focal_length);
        if let Some(lens) = &fields.lens_model {
            ifd.add_entry(IFDEntry::ascii(exif_tags::LENS_MODEL, lens));
        }

        Some(ifd)
    }

    fn add_rational(ifd: &mut IFD, tag: u16, value: Option<Rational>) {
        if let Some(rational) = value {
            ifd.add_entry(IFDEntry::rationals(tag, &[rational]));
        }
    }
}
