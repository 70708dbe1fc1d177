//! GPS sub-IFD tag strategies

use log::warn;

use crate::exif::constants::{gps_tags, values};
use crate::exif::fields::SanitizedFields;
use crate::exif::gps::{Axis, GpsAltitude, GpsCoordinate};
use crate::exif::ifd::{DirectoryKind, IFD, IFDEntry};

/// Builds the GPS sub-IFD
pub struct GpsTagsBuilder;

impl GpsTagsBuilder {
    /// Build the GPS sub-IFD, or `None` unless both coordinates are usable
    ///
    /// Altitude is added only when it is numeric; a missing altitude does
    /// not drop the coordinates.
    pub fn build(fields: &SanitizedFields) -> Option<IFD> {
        let (latitude, longitude) = match (fields.gps_latitude, fields.gps_longitude) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => return None,
        };

        let latitude = GpsCoordinate::from_decimal(Axis::Latitude, latitude);
        let longitude = GpsCoordinate::from_decimal(Axis::Longitude, longitude);
        let (latitude, longitude) = match (latitude, longitude) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => {
                warn!("Omitting GPS section: coordinates out of encodable range");
                return None;
            }
        };

        let mut ifd = IFD::new(DirectoryKind::Gps);
        ifd.add_entry(IFDEntry::bytes(gps_tags::VERSION_ID, &values::GPS_VERSION));
        Self::add_coordinate(&mut ifd, gps_tags::LATITUDE_REF, gps_tags::LATITUDE, &latitude);
        Self::add_coordinate(&mut ifd, gps_tags::LONGITUDE_REF, gps_tags::LONGITUDE, &longitude);

        if let Some(meters) = fields.gps_altitude {
            match GpsAltitude::from_meters(meters) {
                Some(altitude) => {
                    ifd.add_entry(IFDEntry::bytes(gps_tags::ALTITUDE_REF, &[altitude.reference]));
                    ifd.add_entry(IFDEntry::rationals(gps_tags::ALTITUDE, &[altitude.meters]));
                }
                None => warn!("Omitting GPS altitude: {} m is out of encodable range", meters),
            }
        }

        Some(ifd)
    }

    fn add_coordinate(ifd: &mut IFD, ref_tag: u16, value_tag: u16, coordinate: &GpsCoordinate) {
        ifd.add_entry(IFDEntry::ascii(ref_tag, &coordinate.reference.to_string()));
        ifd.add_entry(IFDEntry::rationals(value_tag, &coordinate.dms));
    }
}
