//! User-entered metadata fields
//!
//! A `FieldSet` carries the raw text a user typed for each field. Calling
//! `sanitize` parses every field with its own fallback rule; anything that
//! does not parse simply becomes absent, so building directories from a
//! `SanitizedFields` can never fail.

use std::fs;
use log::{debug, warn};

use crate::exif::constants::orientation;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::gps::{Axis, GpsCoordinate};
use crate::exif::rational::Rational;
use crate::utils::string_utils;

/// Field keys, as used in field files and `FieldSet::set`
pub const FIELD_KEYS: [&str; 15] = [
    "Make",
    "Model",
    "DateTime",
    "ImageDescription",
    "Artist",
    "Copyright",
    "Orientation",
    "ExposureTime",
    "FNumber",
    "ISOSpeedRatings",
    "FocalLength",
    "LensModel",
    "GPSLatitude",
    "GPSLongitude",
    "GPSAltitude",
];

/// Raw field values as entered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    pub make: Option<String>,
    pub model: Option<String>,
    /// `YYYY:MM:DD HH:MM:SS`
    pub date_time: Option<String>,
    pub image_description: Option<String>,
    pub artist: Option<String>,
    pub copyright: Option<String>,
    pub orientation: Option<String>,
    /// Plain number or `n/d`
    pub exposure_time: Option<String>,
    /// Optionally prefixed with `f/`
    pub f_number: Option<String>,
    pub iso_speed_ratings: Option<String>,
    /// Optionally suffixed with `mm`
    pub focal_length: Option<String>,
    pub lens_model: Option<String>,
    /// Signed decimal degrees
    pub gps_latitude: Option<String>,
    /// Signed decimal degrees
    pub gps_longitude: Option<String>,
    /// Signed meters
    pub gps_altitude: Option<String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        let slot = match key {
            "Make" => &mut self.make,
            "Model" => &mut self.model,
            "DateTime" => &mut self.date_time,
            "ImageDescription" => &mut self.image_description,
            "Artist" => &mut self.artist,
            "Copyright" => &mut self.copyright,
            "Orientation" => &mut self.orientation,
            "ExposureTime" => &mut self.exposure_time,
            "FNumber" => &mut self.f_number,
            "ISOSpeedRatings" => &mut self.iso_speed_ratings,
            "FocalLength" => &mut self.focal_length,
            "LensModel" => &mut self.lens_model,
            "GPSLatitude" => &mut self.gps_latitude,
            "GPSLongitude" => &mut self.gps_longitude,
            "GPSAltitude" => &mut self.gps_altitude,
            _ => return None,
        };
        Some(slot)
    }

    /// Sets a field by key; returns false for an unknown key
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.slot_mut(key) {
            Some(slot) => {
                *slot = Some(value.into());
                true
            }
            None => false,
        }
    }

    /// Builder-style `set`; unknown keys are ignored
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        if !self.set(key, value) {
            warn!("Ignoring unknown field '{}'", key);
        }
        self
    }

    /// Raw value of a field by key
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "Make" => &self.make,
            "Model" => &self.model,
            "DateTime" => &self.date_time,
            "ImageDescription" => &self.image_description,
            "Artist" => &self.artist,
            "Copyright" => &self.copyright,
            "Orientation" => &self.orientation,
            "ExposureTime" => &self.exposure_time,
            "FNumber" => &self.f_number,
            "ISOSpeedRatings" => &self.iso_speed_ratings,
            "FocalLength" => &self.focal_length,
            "LensModel" => &self.lens_model,
            "GPSLatitude" => &self.gps_latitude,
            "GPSLongitude" => &self.gps_longitude,
            "GPSAltitude" => &self.gps_altitude,
            _ => return None,
        };
        value.as_deref()
    }

    /// Copies every field that is set in `other` over this one
    pub fn merge(&mut self, other: &FieldSet) {
        for key in FIELD_KEYS {
            if let Some(value) = other.get(key) {
                self.set(key, value);
            }
        }
    }

    /// Parses a field set from a TOML document
    ///
    /// Top-level keys are field names. Strings, integers and floats are
    /// kept as text; other values and unknown keys are skipped.
    pub fn from_toml_str(content: &str) -> ExifResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| ExifError::InvalidFieldFile(format!("{}", e)))?;

        let table = toml_value.as_table()
            .ok_or_else(|| ExifError::InvalidFieldFile("expected a table of fields".to_string()))?;

        let mut fields = FieldSet::new();
        for (key, value) in table {
            let text = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                other => {
                    warn!("Ignoring field '{}' with unsupported {} value", key, other.type_str());
                    continue;
                }
            };

            if !fields.set(key, text) {
                warn!("Ignoring unknown field '{}'", key);
            }
        }

        Ok(fields)
    }

    /// Loads a field set from a TOML file
    pub fn from_file(path: &str) -> ExifResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Trims and parses every field
    pub fn sanitize(&self) -> SanitizedFields {
        let date_time = text_field(&self.date_time).map(|value| string_utils::normalize_date_time(&value));
        let (orientation, orientation_supplied) = parse_orientation(self.orientation.as_deref());

        let sanitized = SanitizedFields {
            make: text_field(&self.make),
            model: text_field(&self.model),
            date_time,
            image_description: text_field(&self.image_description),
            artist: text_field(&self.artist),
            copyright: text_field(&self.copyright),
            orientation,
            orientation_supplied,
            exposure_time: rational_field("ExposureTime", self.exposure_time.as_deref(), |t| t),
            f_number: rational_field("FNumber", self.f_number.as_deref(),
                                     |t| string_utils::strip_prefix(t, "f/")),
            iso_speed_ratings: parse_short("ISOSpeedRatings", self.iso_speed_ratings.as_deref()),
            focal_length: rational_field("FocalLength", self.focal_length.as_deref(),
                                         |t| string_utils::strip_suffix_ignore_case(t, "mm")),
            lens_model: text_field(&self.lens_model),
            gps_latitude: parse_number("GPSLatitude", self.gps_latitude.as_deref()),
            gps_longitude: parse_number("GPSLongitude", self.gps_longitude.as_deref()),
            gps_altitude: parse_number("GPSAltitude", self.gps_altitude.as_deref()),
        };

        debug!("Sanitized fields: {:?}", sanitized);
        sanitized
    }
}

/// Parsed field values ready for directory construction
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedFields {
    pub make: Option<String>,
    pub model: Option<String>,
    pub date_time: Option<String>,
    pub image_description: Option<String>,
    pub artist: Option<String>,
    pub copyright: Option<String>,
    /// Always set; 1 unless a valid value was supplied
    pub orientation: u16,
    /// Whether `orientation` came from the user rather than the default
    pub orientation_supplied: bool,
    pub exposure_time: Option<Rational>,
    pub f_number: Option<Rational>,
    pub iso_speed_ratings: Option<u16>,
    pub focal_length: Option<Rational>,
    pub lens_model: Option<String>,
    pub gps_latitude: Option<f64>,
    pub gps_longitude: Option<f64>,
    pub gps_altitude: Option<f64>,
}

impl SanitizedFields {
    /// Whether the Exif sub-IFD will be written
    pub fn has_exif_section(&self) -> bool {
        self.exposure_time.is_some()
            || self.f_number.is_some()
            || self.iso_speed_ratings.is_some()
            || self.focal_length.is_some()
            || self.lens_model.is_some()
            || self.date_time.is_some()
    }

    /// Whether the GPS sub-IFD will be written
    ///
    /// Both coordinates must be present and encodable as DMS rationals.
    pub fn has_gps_section(&self) -> bool {
        match (self.gps_latitude, self.gps_longitude) {
            (Some(lat), Some(lng)) => {
                GpsCoordinate::from_decimal(Axis::Latitude, lat).is_some()
                    && GpsCoordinate::from_decimal(Axis::Longitude, lng).is_some()
            }
            _ => false,
        }
    }

    /// Whether any user-supplied value would be written
    ///
    /// The Software tag and the default Orientation are always written but
    /// do not count: a write carrying only those is refused.
    pub fn has_writable_content(&self) -> bool {
        let has_ifd0_text = [&self.make, &self.model, &self.image_description, &self.artist, &self.copyright]
            .iter()
            .any(|field| field.is_some());

        has_ifd0_text || self.orientation_supplied || self.has_exif_section() || self.has_gps_section()
    }
}

fn text_field(value: &Option<String>) -> Option<String> {
    value.as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

fn rational_field(name: &str, value: Option<&str>, normalize: impl Fn(&str) -> &str) -> Option<Rational> {
    let text = present(value)?;
    match Rational::parse_fraction(normalize(text)) {
        Some(rational) if rational.is_negative() => {
            warn!("Omitting {}: negative value '{}'", name, text);
            None
        }
        Some(rational) => Some(rational),
        None => {
            debug!("Omitting {}: '{}' is not a usable fraction", name, text);
            None
        }
    }
}

fn parse_number(name: &str, value: Option<&str>) -> Option<f64> {
    let text = present(value)?;
    match text.parse::<f64>() {
        Ok(number) if number.is_finite() => Some(number),
        _ => {
            debug!("Omitting {}: '{}' is not a number", name, text);
            None
        }
    }
}

fn parse_short(name: &str, value: Option<&str>) -> Option<u16> {
    let number = parse_number(name, value)?.round();
    if number < 0.0 {
        warn!("Omitting {}: negative value {}", name, number);
        return None;
    }
    Some(number.min(u16::MAX as f64) as u16)
}

fn parse_orientation(value: Option<&str>) -> (u16, bool) {
    let parsed = present(value)
        .and_then(|text| text.parse::<f64>().ok())
        .filter(|number| number.fract() == 0.0)
        .map(|number| number as i64)
        .and_then(|number| orientation::ALL.iter().copied().find(|&code| code as i64 == number));

    match parsed {
        Some(code) => (code, true),
        None => {
            if let Some(text) = present(value) {
                debug!("Orientation '{}' is invalid, using {}", text, orientation::TOP_LEFT);
            }
            (orientation::TOP_LEFT, false)
        }
    }
}
