//! Tests for blob assembly and pointer resolution

use crate::exif::assembler::ExifAssembler;
use crate::exif::builder::{EntryOrder, ExifBuilder, WriteOptions};
use crate::exif::constants::{exif_tags, gps_tags, header, tags, values};
use crate::exif::fields::FieldSet;
use crate::exif::ifd::{DirectoryKind, IFD, IFDEntry};
use crate::exif::tests::test_utils::{read_ifd, sample_fields, tiff_bytes};

fn assemble(fields: &FieldSet, entry_order: EntryOrder) -> (crate::exif::builder::Directories, Vec<u8>) {
    let directories = ExifBuilder::new(WriteOptions { entry_order }).build(&fields.sanitize());
    let blob = directories.assemble().unwrap();
    (directories, blob)
}

#[test]
fn test_blob_header() {
    let (_, blob) = assemble(&FieldSet::new().with("Make", "Canon"), EntryOrder::Emission);

    assert_eq!(&blob[..6], b"Exif\0\0");
    assert_eq!(&blob[6..14], &[0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00]);
}

#[test]
fn test_ifd0_only_blob() {
    let (directories, blob) = assemble(&FieldSet::new().with("Make", "Canon"), EntryOrder::Emission);
    assert_eq!(blob.len(), header::EXIF_MARKER.len() + 8 + directories.ifd0.size());

    let tiff = tiff_bytes(&blob);
    let ifd0 = read_ifd(tiff, 8);
    assert_eq!(ifd0.next_offset, 0);
    assert_eq!(ifd0.tags(), vec![tags::MAKE, tags::SOFTWARE, tags::ORIENTATION]);

    // Make is the first out-of-line value, right after the entry table
    let make = ifd0.entry(tags::MAKE);
    assert_eq!(make.offset(), 8 + 2 + 3 * 12 + 4);
    assert_eq!(make.as_ascii(), "Canon");
    assert_eq!(ifd0.entry(tags::SOFTWARE).as_ascii(), values::SOFTWARE);
    assert_eq!(ifd0.entry(tags::ORIENTATION).as_u16(), 1);
}

#[test]
fn test_sub_ifd_pointers() {
    let (directories, blob) = assemble(&sample_fields(), EntryOrder::Emission);
    let ifd0_size = directories.ifd0.size();
    let exif_size = directories.exif.as_ref().unwrap().size();
    let gps_size = directories.gps.as_ref().unwrap().size();

    assert_eq!(blob.len(), 6 + 8 + ifd0_size + exif_size + gps_size);

    let tiff = tiff_bytes(&blob);
    let ifd0 = read_ifd(tiff, 8);

    let exif_offset = ifd0.entry(tags::EXIF_IFD_POINTER).as_u32();
    let gps_offset = ifd0.entry(tags::GPS_IFD_POINTER).as_u32();
    assert_eq!(exif_offset as usize, 8 + ifd0_size);
    assert_eq!(gps_offset as usize, 8 + ifd0_size + exif_size);

    let exif = read_ifd(tiff, exif_offset as usize);
    assert_eq!(exif.entry(exif_tags::DATE_TIME_ORIGINAL).as_ascii(), "2024:05:01 10:20:30");
    assert_eq!(exif.entry(exif_tags::EXPOSURE_TIME).as_rationals(), vec![(1, 250)]);
    assert_eq!(exif.entry(exif_tags::F_NUMBER).as_rationals(), vec![(14, 5)]);
    assert_eq!(exif.entry(exif_tags::ISO_SPEED_RATINGS).as_u16(), 400);
    assert_eq!(exif.entry(exif_tags::FOCAL_LENGTH).as_rationals(), vec![(35, 1)]);
    assert_eq!(exif.entry(exif_tags::LENS_MODEL).as_ascii(), "RF 35mm F1.8");
    assert_eq!(exif.entry(exif_tags::EXIF_VERSION).value, b"0231");

    let gps = read_ifd(tiff, gps_offset as usize);
    assert_eq!(gps.entry(gps_tags::VERSION_ID).value, vec![2, 3, 0, 0]);
    assert_eq!(gps.entry(gps_tags::LATITUDE_REF).as_ascii(), "N");
    assert_eq!(gps.entry(gps_tags::LATITUDE).as_rationals(), vec![(40, 1), (42, 1), (1152, 25)]);
    assert_eq!(gps.entry(gps_tags::LONGITUDE_REF).as_ascii(), "W");
    assert_eq!(gps.entry(gps_tags::LONGITUDE).as_rationals(), vec![(74, 1), (0, 1), (108, 5)]);
    assert_eq!(gps.entry(gps_tags::ALTITUDE_REF).value, vec![0]);
    assert_eq!(gps.entry(gps_tags::ALTITUDE).as_rationals(), vec![(10, 1)]);
}

#[test]
fn test_gps_pointer_without_exif() {
    let fields = FieldSet::new()
        .with("GPSLatitude", "1.5")
        .with("GPSLongitude", "2.5");
    let (directories, blob) = assemble(&fields, EntryOrder::Emission);

    let tiff = tiff_bytes(&blob);
    let ifd0 = read_ifd(tiff, 8);
    assert_eq!(ifd0.entry(tags::GPS_IFD_POINTER).as_u32() as usize, 8 + directories.ifd0.size());
}

#[test]
fn test_out_of_line_offsets_inside_blob() {
    let (_, blob) = assemble(&sample_fields(), EntryOrder::Ascending);
    let tiff = tiff_bytes(&blob);
    let ifd0 = read_ifd(tiff, 8);

    for offset in [ifd0.entry(tags::EXIF_IFD_POINTER).as_u32(), ifd0.entry(tags::GPS_IFD_POINTER).as_u32()] {
        let ifd = read_ifd(tiff, offset as usize);
        for entry in ifd.entries.iter().filter(|entry| entry.value.len() > 4) {
            let start = entry.offset() as usize;
            assert_eq!(start % 2, 0, "tag {:#06x} not word aligned", entry.tag);
            assert!(start + entry.value.len() <= tiff.len());
        }
    }
}

#[test]
fn test_missing_sub_directory_pointer_written_as_zero() {
    let mut ifd0 = IFD::new(DirectoryKind::Ifd0);
    ifd0.add_entry(IFDEntry::short(tags::ORIENTATION, 1));
    ifd0.add_entry(IFDEntry::long(tags::EXIF_IFD_POINTER, 1234));

    let blob = ExifAssembler::assemble(&ifd0, None, None).unwrap();
    let parsed = read_ifd(tiff_bytes(&blob), 8);
    assert_eq!(parsed.entry(tags::EXIF_IFD_POINTER).as_u32(), 0);
}
