//! Tests for fraction reduction and parsing

use proptest::prelude::*;

use crate::exif::rational::Rational;

fn terms(rational: Rational) -> (i32, u32) {
    (rational.numerator(), rational.denominator())
}

#[test]
fn test_reduce_lowest_terms() {
    assert_eq!(terms(Rational::reduce(2, 4).unwrap()), (1, 2));
    assert_eq!(terms(Rational::reduce(10000, 10000).unwrap()), (1, 1));
    assert_eq!(terms(Rational::reduce(460800, 10000).unwrap()), (1152, 25));
}

#[test]
fn test_reduce_moves_sign_to_numerator() {
    assert_eq!(terms(Rational::reduce(3, -6).unwrap()), (-1, 2));
    assert_eq!(terms(Rational::reduce(-3, -6).unwrap()), (1, 2));
}

#[test]
fn test_reduce_zero() {
    assert_eq!(Rational::reduce(0, 7), Some(Rational::ZERO));
    assert_eq!(Rational::reduce(1, 0), None);
}

#[test]
fn test_reduce_rejects_oversized_terms() {
    assert_eq!(Rational::reduce(i64::MAX, 1), None);
}

#[test]
fn test_to_fraction_fixed_denominator() {
    assert_eq!(terms(Rational::to_fraction(2.8).unwrap()), (14, 5));
    assert_eq!(terms(Rational::to_fraction(0.004).unwrap()), (1, 250));
    assert_eq!(terms(Rational::to_fraction(-0.5).unwrap()), (-1, 2));
    // Precision stops at four decimal digits
    assert_eq!(terms(Rational::to_fraction(0.33333).unwrap()), (3333, 10000));
    assert_eq!(Rational::to_fraction(f64::NAN), None);
}

#[test]
fn test_parse_fraction_slash_form() {
    assert_eq!(terms(Rational::parse_fraction("1/250").unwrap()), (1, 250));
    assert_eq!(terms(Rational::parse_fraction(" 2 / 4 ").unwrap()), (1, 2));
    assert_eq!(terms(Rational::parse_fraction("1.4/2").unwrap()), (1, 2));
    assert_eq!(Rational::parse_fraction("1/0"), None);
    assert_eq!(Rational::parse_fraction("a/2"), None);
    assert_eq!(terms(Rational::parse_fraction("1/2/3").unwrap()), (1, 2));
    assert_eq!(Rational::parse_fraction("1/x/3"), None);
}

#[test]
fn test_parse_fraction_decimal_form() {
    assert_eq!(terms(Rational::parse_fraction("35").unwrap()), (35, 1));
    assert_eq!(terms(Rational::parse_fraction("2.8").unwrap()), (14, 5));
    assert_eq!(Rational::parse_fraction("0"), None);
    assert_eq!(Rational::parse_fraction("0.0"), None);
    assert_eq!(Rational::parse_fraction("abc"), None);
    assert_eq!(Rational::parse_fraction(""), None);
}

#[test]
fn test_display() {
    assert_eq!(Rational::reduce(1, 250).unwrap().to_string(), "1/250");
    assert_eq!(Rational::ZERO.to_string(), "0/1");
}

proptest! {
    #[test]
    fn prop_reduce_is_lowest_terms(num in -1_000_000i64..1_000_000, den in 1i64..1_000_000) {
        let rational = Rational::reduce(num, den).unwrap();
        let (n, d) = (rational.numerator() as i64, rational.denominator() as i64);

        prop_assert!(d > 0);
        // Same value: n/d == num/den
        prop_assert_eq!(n * den, num * d);

        let (mut a, mut b) = (n.abs(), d);
        while b != 0 {
            let r = a % b;
            a = b;
            b = r;
        }
        prop_assert_eq!(a, if n == 0 { d } else { 1 });
    }

    #[test]
    fn prop_to_fraction_within_precision(value in -100_000.0f64..100_000.0) {
        let rational = Rational::to_fraction(value).unwrap();
        prop_assert!((rational.to_f64() - value).abs() <= 0.5 / 10_000.0 + 1e-9);
    }
}
