//! Tests for directory construction

use crate::exif::builder::{EntryOrder, ExifBuilder, WriteOptions};
use crate::exif::constants::{exif_tags, gps_tags, tags, values};
use crate::exif::fields::FieldSet;
use crate::exif::ifd::TagValue;
use crate::exif::tests::test_utils::sample_fields;

fn build(fields: &FieldSet, entry_order: EntryOrder) -> crate::exif::builder::Directories {
    ExifBuilder::new(WriteOptions { entry_order }).build(&fields.sanitize())
}

fn tags_of(ifd: &crate::exif::ifd::IFD) -> Vec<u16> {
    ifd.entries.iter().map(|entry| entry.tag).collect()
}

#[test]
fn test_ifd0_emission_order() {
    let directories = build(&sample_fields(), EntryOrder::Emission);

    assert_eq!(tags_of(&directories.ifd0), vec![
        tags::MAKE,
        tags::MODEL,
        tags::SOFTWARE,
        tags::DATE_TIME,
        tags::ORIENTATION,
        tags::EXIF_IFD_POINTER,
        tags::GPS_IFD_POINTER,
    ]);
    assert_eq!(directories.ifd0.get_entry(tags::SOFTWARE).unwrap().value,
               TagValue::Ascii(values::SOFTWARE.to_string()));
    assert_eq!(directories.ifd0.get_entry(tags::ORIENTATION).unwrap().value, TagValue::Short(6));
}

#[test]
fn test_exif_emission_order() {
    let directories = build(&sample_fields(), EntryOrder::Emission);
    let exif = directories.exif.expect("Exif directory");

    assert_eq!(tags_of(&exif), vec![
        exif_tags::DATE_TIME_ORIGINAL,
        exif_tags::DATE_TIME_DIGITIZED,
        exif_tags::EXIF_VERSION,
        exif_tags::FLASHPIX_VERSION,
        exif_tags::EXPOSURE_TIME,
        exif_tags::F_NUMBER,
        exif_tags::ISO_SPEED_RATINGS,
        exif_tags::FOCAL_LENGTH,
        exif_tags::LENS_MODEL,
    ]);
    assert_eq!(exif.get_entry(exif_tags::ISO_SPEED_RATINGS).unwrap().value, TagValue::Short(400));
}

#[test]
fn test_gps_entries() {
    let directories = build(&sample_fields(), EntryOrder::Emission);
    let gps = directories.gps.expect("GPS directory");

    assert_eq!(tags_of(&gps), vec![
        gps_tags::VERSION_ID,
        gps_tags::LATITUDE_REF,
        gps_tags::LATITUDE,
        gps_tags::LONGITUDE_REF,
        gps_tags::LONGITUDE,
        gps_tags::ALTITUDE_REF,
        gps_tags::ALTITUDE,
    ]);
    assert_eq!(gps.get_entry(gps_tags::VERSION_ID).unwrap().value, TagValue::Byte(vec![2, 3, 0, 0]));
    assert_eq!(gps.get_entry(gps_tags::LATITUDE_REF).unwrap().value, TagValue::Ascii("N".to_string()));
    assert_eq!(gps.get_entry(gps_tags::LONGITUDE_REF).unwrap().value, TagValue::Ascii("W".to_string()));
    assert_eq!(gps.get_entry(gps_tags::ALTITUDE_REF).unwrap().value, TagValue::Byte(vec![0]));
}

#[test]
fn test_minimal_fields_have_no_sub_directories() {
    let directories = build(&FieldSet::new().with("Make", "Canon"), EntryOrder::Emission);

    assert!(directories.exif.is_none());
    assert!(directories.gps.is_none());
    assert_eq!(tags_of(&directories.ifd0), vec![tags::MAKE, tags::SOFTWARE, tags::ORIENTATION]);
    assert_eq!(directories.ifd0.get_entry(tags::ORIENTATION).unwrap().value, TagValue::Short(1));
}

#[test]
fn test_gps_without_altitude() {
    let fields = FieldSet::new()
        .with("GPSLatitude", "-33.8688")
        .with("GPSLongitude", "151.2093")
        .with("GPSAltitude", "high");
    let directories = build(&fields, EntryOrder::Emission);
    let gps = directories.gps.expect("GPS directory");

    assert_eq!(gps.entry_count(), 5);
    assert!(!gps.has_tag(gps_tags::ALTITUDE));
    assert_eq!(gps.get_entry(gps_tags::LATITUDE_REF).unwrap().value, TagValue::Ascii("S".to_string()));
    assert_eq!(gps.get_entry(gps_tags::LONGITUDE_REF).unwrap().value, TagValue::Ascii("E".to_string()));

    assert!(directories.exif.is_none());
    assert!(directories.ifd0.has_tag(tags::GPS_IFD_POINTER));
    assert!(!directories.ifd0.has_tag(tags::EXIF_IFD_POINTER));
}

#[test]
fn test_date_time_alone_creates_exif_directory() {
    let directories = build(&FieldSet::new().with("DateTime", "2024:05:01 10:20:30"), EntryOrder::Emission);
    let exif = directories.exif.expect("Exif directory");

    assert_eq!(tags_of(&exif), vec![
        exif_tags::DATE_TIME_ORIGINAL,
        exif_tags::DATE_TIME_DIGITIZED,
        exif_tags::EXIF_VERSION,
        exif_tags::FLASHPIX_VERSION,
    ]);
}

#[test]
fn test_ascending_order() {
    let directories = build(&sample_fields(), EntryOrder::Ascending);

    for ifd in directories.iter() {
        let tags = tags_of(ifd);
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        assert_eq!(tags, sorted, "{} directory not sorted", ifd.kind.name());
    }
    assert_eq!(directories.iter().count(), 3);
}
