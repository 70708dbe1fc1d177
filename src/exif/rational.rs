//! Exact fractions for RATIONAL tag values
//!
//! TIFF stores non-integer values as numerator/denominator pairs. User
//! input arrives as text ("1/250", "2.8", "35"), so this module handles
//! both exact fractions and the fixed-denominator approximation of
//! decimal values.

use std::fmt;
use log::trace;

/// Denominator used when approximating a decimal value
///
/// This caps the precision of every approximated value at four decimal
/// digits.
pub const APPROXIMATION_DENOMINATOR: u32 = 10_000;

/// A reduced fraction with the sign carried on the numerator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i32,
    denominator: u32,
}

impl Rational {
    /// The canonical zero value, 0/1
    pub const ZERO: Rational = Rational { numerator: 0, denominator: 1 };

    /// Builds a fraction in lowest terms
    ///
    /// A negative denominator moves its sign onto the numerator. Returns
    /// `None` for a zero denominator or when the reduced terms do not fit
    /// the 32-bit fields TIFF uses.
    pub fn reduce(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        if numerator == 0 {
            return Some(Self::ZERO);
        }

        let (mut num, mut den) = (numerator as i128, denominator as i128);
        if den < 0 {
            num = -num;
            den = -den;
        }

        let divisor = gcd(num.unsigned_abs(), den as u128) as i128;
        let num = num / divisor;
        let den = den / divisor;

        match (i32::try_from(num), u32::try_from(den)) {
            (Ok(numerator), Ok(denominator)) => Some(Rational { numerator, denominator }),
            _ => {
                trace!("Fraction {}/{} does not fit 32-bit terms", num, den);
                None
            }
        }
    }

    /// Approximates a decimal with the fixed denominator, then reduces
    ///
    /// Non-finite input and values too large for 32-bit terms yield `None`.
    pub fn to_fraction(decimal: f64) -> Option<Self> {
        if !decimal.is_finite() {
            return None;
        }

        let scaled = (decimal.abs() * APPROXIMATION_DENOMINATOR as f64).round();
        if scaled > i64::MAX as f64 {
            return None;
        }

        let magnitude = scaled as i64;
        let numerator = if decimal < 0.0 { -magnitude } else { magnitude };
        Self::reduce(numerator, APPROXIMATION_DENOMINATOR as i64)
    }

    /// Parses user text into a fraction
    ///
    /// Text containing `/` is read as `numerator/denominator`; both sides
    /// are rounded to integers and anything after a second `/` is ignored. Anything else is read as a decimal number.
    /// Unparsable text, a zero denominator and a plain value of zero all
    /// yield `None`, which means "write no entry".
    pub fn parse_fraction(text: &str) -> Option<Self> {
        let normalized = text.trim();
        if normalized.is_empty() {
            return None;
        }

        if let Some((num, rest)) = normalized.split_once('/') {
            let den = rest.split('/').next().unwrap_or(rest);
            let num = parse_finite(num)?.round();
            let den = parse_finite(den)?.round();
            if den == 0.0 || num.abs() > i64::MAX as f64 || den.abs() > i64::MAX as f64 {
                return None;
            }
            return Self::reduce(num as i64, den as i64);
        }

        let numeric = parse_finite(normalized)?;
        if numeric == 0.0 {
            return None;
        }
        Self::to_fraction(numeric)
    }

    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Floating-point value of this fraction
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Euclid's algorithm on magnitudes
fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a.max(1)
}

fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
