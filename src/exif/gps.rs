//! GPS coordinate encoding
//!
//! Converts signed decimal degrees into the degrees/minutes/seconds
//! rational triple plus hemisphere reference that the GPS sub-IFD
//! stores, and signed altitude into a reference byte plus magnitude.

use log::debug;

use crate::exif::constants::values;
use crate::exif::rational::{Rational, APPROXIMATION_DENOMINATOR};

const SECONDS_UNITS_PER_MINUTE: i64 = 60 * APPROXIMATION_DENOMINATOR as i64;

/// Which coordinate a value describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Hemisphere reference character for a signed decimal value
    pub fn reference(&self, decimal: f64) -> char {
        match (self, decimal >= 0.0) {
            (Axis::Latitude, true) => 'N',
            (Axis::Latitude, false) => 'S',
            (Axis::Longitude, true) => 'E',
            (Axis::Longitude, false) => 'W',
        }
    }
}

/// A coordinate as stored in the GPS sub-IFD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpsCoordinate {
    pub axis: Axis,
    /// `N`/`S` for latitude, `E`/`W` for longitude
    pub reference: char,
    /// Degrees, minutes and seconds, all non-negative
    pub dms: [Rational; 3],
}

impl GpsCoordinate {
    /// Splits signed decimal degrees into degrees, minutes and seconds
    ///
    /// Degrees and minutes are whole numbers. Seconds keep four decimal
    /// digits; a value that rounds up to a full minute carries into the
    /// minutes (and on into the degrees) so every component stays in range.
    pub fn from_decimal(axis: Axis, decimal: f64) -> Option<Self> {
        if !decimal.is_finite() {
            return None;
        }

        let magnitude = decimal.abs();
        let mut degrees = magnitude.floor();
        let minutes_float = (magnitude - degrees) * 60.0;
        let mut minutes = minutes_float.floor();
        let seconds = (minutes_float - minutes) * 60.0;

        let mut seconds_units = (seconds * APPROXIMATION_DENOMINATOR as f64).round() as i64;
        if seconds_units >= SECONDS_UNITS_PER_MINUTE {
            seconds_units -= SECONDS_UNITS_PER_MINUTE;
            minutes += 1.0;
        }
        if minutes >= 60.0 {
            minutes -= 60.0;
            degrees += 1.0;
        }

        let dms = [
            whole_component(degrees)?,
            whole_component(minutes)?,
            Rational::reduce(seconds_units, APPROXIMATION_DENOMINATOR as i64)?,
        ];

        debug!("{:?} {} -> {} {} {} {}", axis, decimal, dms[0], dms[1], dms[2], axis.reference(decimal));

        Some(GpsCoordinate {
            axis,
            reference: axis.reference(decimal),
            dms,
        })
    }

    /// Recovers signed decimal degrees
    pub fn to_decimal(&self) -> f64 {
        let [degrees, minutes, seconds] = self.dms;
        let value = degrees.to_f64() + minutes.to_f64() / 60.0 + seconds.to_f64() / 3600.0;
        match self.reference {
            'S' | 'W' => -value,
            _ => value,
        }
    }
}

/// Altitude as stored in the GPS sub-IFD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpsAltitude {
    /// 0 above sea level, 1 below
    pub reference: u8,
    /// Non-negative magnitude in meters
    pub meters: Rational,
}

impl GpsAltitude {
    pub fn from_meters(altitude: f64) -> Option<Self> {
        if !altitude.is_finite() {
            return None;
        }

        let reference = if altitude < 0.0 {
            values::ALTITUDE_BELOW_SEA_LEVEL
        } else {
            values::ALTITUDE_ABOVE_SEA_LEVEL
        };

        let magnitude = altitude.abs();
        let meters = if magnitude == 0.0 {
            Rational::ZERO
        } else {
            Rational::to_fraction(magnitude)?
        };

        Some(GpsAltitude { reference, meters })
    }

    /// Signed altitude in meters
    pub fn to_meters(&self) -> f64 {
        if self.reference == values::ALTITUDE_BELOW_SEA_LEVEL {
            -self.meters.to_f64()
        } else {
            self.meters.to_f64()
        }
    }
}

fn whole_component(value: f64) -> Option<Rational> {
    if value == 0.0 {
        Some(Rational::ZERO)
    } else {
        Rational::to_fraction(value)
    }
}
