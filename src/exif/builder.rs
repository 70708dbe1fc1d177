//! EXIF directory construction
//!
//! Turns sanitized fields into the three directories of an EXIF blob.

use log::{debug, info};

use crate::exif::assembler::ExifAssembler;
use crate::exif::builders::camera_tags::CameraTagsBuilder;
use crate::exif::builders::gps_tags::GpsTagsBuilder;
use crate::exif::builders::image_tags::ImageTagsBuilder;
use crate::exif::errors::ExifResult;
use crate::exif::fields::SanitizedFields;
use crate::exif::ifd::IFD;

/// Order of entries within each directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryOrder {
    /// Fixed field emission order
    #[default]
    Emission,
    /// Ascending tag number, as strict TIFF readers expect
    Ascending,
}

/// Options controlling how metadata is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOptions {
    pub entry_order: EntryOrder,
}

/// The directories of one EXIF blob
#[derive(Debug, Clone, PartialEq)]
pub struct Directories {
    pub ifd0: IFD,
    pub exif: Option<IFD>,
    pub gps: Option<IFD>,
}

impl Directories {
    /// Links and serializes the directories into an EXIF blob
    pub fn assemble(&self) -> ExifResult<Vec<u8>> {
        ExifAssembler::assemble(&self.ifd0, self.exif.as_ref(), self.gps.as_ref())
    }

    /// Iterates over the directories that will be written
    pub fn iter(&self) -> impl Iterator<Item = &IFD> {
        std::iter::once(&self.ifd0)
            .chain(self.exif.as_ref())
            .chain(self.gps.as_ref())
    }
}

/// Builder for the EXIF directories
pub struct ExifBuilder {
    options: WriteOptions,
}

impl ExifBuilder {
    pub fn new(options: WriteOptions) -> Self {
        ExifBuilder { options }
    }

    /// Build IFD0 and the optional Exif and GPS sub-IFDs
    ///
    /// Never fails: fields that did not parse were already dropped during
    /// sanitization, so the worst case is a smaller directory.
    pub fn build(&self, fields: &SanitizedFields) -> Directories {
        let exif = CameraTagsBuilder::build(fields);
        let gps = GpsTagsBuilder::build(fields);

        let mut ifd0 = ImageTagsBuilder::build(fields);
        ImageTagsBuilder::add_sub_ifd_pointers(&mut ifd0, exif.is_some(), gps.is_some());

        let mut directories = Directories { ifd0, exif, gps };

        if self.options.entry_order == EntryOrder::Ascending {
            debug!("Sorting directory entries by tag number");
            directories.ifd0.sort_entries();
            if let Some(exif) = directories.exif.as_mut() {
                exif.sort_entries();
            }
            if let Some(gps) = directories.gps.as_mut() {
                gps.sort_entries();
            }
        }

        info!("Built directories: IFD0 {} entries, Exif {}, GPS {}",
              directories.ifd0.entry_count(),
              directories.exif.as_ref().map_or(0, IFD::entry_count),
              directories.gps.as_ref().map_or(0, IFD::entry_count));

        directories
    }
}
