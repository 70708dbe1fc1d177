//! Tests for directory layout and entry encoding

use crate::exif::constants::{exif_tags, field_types, tags};
use crate::exif::ifd::{DirectoryKind, IFD, IFDEntry, TagValue};
use crate::exif::rational::Rational;
use crate::exif::tests::test_utils::read_ifd;
use crate::io::byte_order::{ByteOrder, LittleEndianHandler};

#[test]
fn test_entry_counts_and_types() {
    let make = IFDEntry::ascii(tags::MAKE, "Canon");
    assert_eq!(make.field_type(), field_types::ASCII);
    assert_eq!(make.count(), 6);
    assert_eq!(make.payload_len(), 6);
    assert!(!make.is_value_inline());

    let orientation = IFDEntry::short(tags::ORIENTATION, 1);
    assert_eq!(orientation.count(), 1);
    assert_eq!(orientation.payload_len(), 2);
    assert!(orientation.is_value_inline());

    let dms = IFDEntry::rationals(2, &[Rational::ZERO; 3]);
    assert_eq!(dms.count(), 3);
    assert_eq!(dms.payload_len(), 24);
}

#[test]
fn test_ascii_truncates_at_nul() {
    let entry = IFDEntry::ascii(tags::ARTIST, "Ann\0ignored");
    assert_eq!(entry.value, TagValue::Ascii("Ann".to_string()));
    assert_eq!(entry.count(), 4);
}

#[test]
fn test_out_of_line_size_is_even() {
    assert_eq!(IFDEntry::ascii(tags::MAKE, "Nikon").out_of_line_size(), 6);
    assert_eq!(IFDEntry::ascii(tags::MAKE, "Canon!").out_of_line_size(), 8);
    assert_eq!(IFDEntry::ascii(tags::MAKE, "abc").out_of_line_size(), 0);
}

#[test]
fn test_size_formula() {
    let mut ifd = IFD::new(DirectoryKind::Ifd0);
    ifd.add_entry(IFDEntry::ascii(tags::MAKE, "Canon"));
    ifd.add_entry(IFDEntry::ascii(tags::MODEL, "X"));
    ifd.add_entry(IFDEntry::short(tags::ORIENTATION, 6));

    assert_eq!(ifd.table_size(), 2 + 12 * 3 + 4);
    assert_eq!(ifd.size(), ifd.table_size() + 6);
}

#[test]
fn test_to_bytes_layout() {
    let mut ifd = IFD::new(DirectoryKind::Exif);
    ifd.add_entry(IFDEntry::ascii(exif_tags::LENS_MODEL, "Lens"));
    ifd.add_entry(IFDEntry::short(exif_tags::ISO_SPEED_RATINGS, 400));
    ifd.add_entry(IFDEntry::rationals(exif_tags::F_NUMBER, &[Rational::reduce(14, 5).unwrap()]));
    ifd.add_entry(IFDEntry::undefined(exif_tags::EXIF_VERSION, b"0231"));

    let base = 100u32;
    let bytes = ifd.to_bytes(base, &LittleEndianHandler).unwrap();
    assert_eq!(bytes.len(), ifd.size());

    // Place the directory at its offset so the reader resolves offsets
    let mut tiff = vec![0u8; base as usize];
    tiff.extend_from_slice(&bytes);
    let parsed = read_ifd(&tiff, base as usize);

    assert_eq!(parsed.next_offset, 0);
    assert_eq!(parsed.tags(), vec![exif_tags::LENS_MODEL, exif_tags::ISO_SPEED_RATINGS,
                                   exif_tags::F_NUMBER, exif_tags::EXIF_VERSION]);

    let data_start = base + ifd.table_size() as u32;
    let lens = parsed.entry(exif_tags::LENS_MODEL);
    assert_eq!(lens.offset(), data_start);
    assert_eq!(lens.as_ascii(), "Lens");
    assert_eq!((lens.field_type, lens.count), (field_types::ASCII, 5));

    // "Lens\0" is padded to 6 bytes before the next value
    let f_number = parsed.entry(exif_tags::F_NUMBER);
    assert_eq!(f_number.offset(), data_start + 6);
    assert_eq!(f_number.as_rationals(), vec![(14, 5)]);

    let iso = parsed.entry(exif_tags::ISO_SPEED_RATINGS);
    assert_eq!(iso.value_field, [0x90, 0x01, 0, 0]);
    assert_eq!(iso.as_u16(), 400);

    let version = parsed.entry(exif_tags::EXIF_VERSION);
    assert_eq!(&version.value_field, b"0231");
}

#[test]
fn test_negative_rational_rejected_on_encode() {
    let mut ifd = IFD::new(DirectoryKind::Exif);
    ifd.add_entry(IFDEntry::rationals(exif_tags::EXPOSURE_TIME, &[Rational::reduce(-1, 250).unwrap()]));

    let handler = ByteOrder::LittleEndian.create_handler();
    assert!(ifd.to_bytes(8, handler.as_ref()).is_err());
}

#[test]
fn test_sort_entries_keeps_last_duplicate() {
    let mut ifd = IFD::new(DirectoryKind::Ifd0);
    ifd.add_entry(IFDEntry::short(tags::ORIENTATION, 1));
    ifd.add_entry(IFDEntry::ascii(tags::MAKE, "First"));
    ifd.add_entry(IFDEntry::ascii(tags::MAKE, "Second"));

    ifd.sort_entries();

    assert_eq!(ifd.entry_count(), 2);
    assert_eq!(ifd.entries[0].tag, tags::MAKE);
    assert_eq!(ifd.entries[0].value, TagValue::Ascii("Second".to_string()));
    assert_eq!(ifd.entries[1].tag, tags::ORIENTATION);
}

#[test]
fn test_display_uses_tag_names() {
    let mut ifd = IFD::new(DirectoryKind::Gps);
    ifd.add_entry(IFDEntry::ascii(1, "N"));

    let text = ifd.to_string();
    assert!(text.contains("GPS directory"));
    assert!(text.contains("GPSLatitudeRef"));
}
