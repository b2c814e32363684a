//! The textual round trip used to convert elements between types at runtime.
//!
//! An element type takes part in runtime-indexed access, iteration and joining by implementing
//! [`Textual`]: it must be able to write itself as text and to read itself back from text.
//! Floating-point values are written with [`SIGNIFICANT_DIGITS`] significant digits in the
//! shortest of fixed or scientific notation, matching the `%.15g` conversion of C's `printf`.

use std::any::type_name;
use std::fmt::Write;

use thiserror::Error;

/// The number of significant decimal digits used when writing floating-point values as text.
pub const SIGNIFICANT_DIGITS: usize = 15;

/// The error returned when text cannot be read back as the requested element type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("cannot read {text:?} as `{target}`")]
pub struct ParseTextError {
    text: String,
    target: &'static str,
}

impl ParseTextError {
    /// Construct the error for `text` which could not be read as a `T`.
    pub fn new<T: ?Sized>(text: &str) -> Self {
        ParseTextError {
            text: text.to_owned(),
            target: type_name::<T>(),
        }
    }

    /// The rejected text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The name of the type the text was to be read as.
    pub fn target(&self) -> &'static str {
        self.target
    }
}

/// A type which can be written to and read back from text.
///
/// # Examples
///
/// ```
/// use catena::text::Textual;
///
/// assert_eq!(47.11_f64.to_text(), "47.11");
/// assert_eq!(i32::parse_text(" 12").unwrap(), 12);
/// assert!(i32::parse_text("34.56").is_err());
/// ```
pub trait Textual: Sized {
    /// Append the textual form of `self` to `out`.
    fn write_text(&self, out: &mut String);

    /// Read a value back from its textual form.
    fn parse_text(text: &str) -> Result<Self, ParseTextError>;

    /// The textual form of `self`.
    fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }
}

macro_rules! impl_textual_via_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Textual for $t {
                fn write_text(&self, out: &mut String) {
                    // Writing into a `String` cannot fail.
                    let _ = write!(out, "{}", self);
                }

                fn parse_text(text: &str) -> Result<Self, ParseTextError> {
                    text.trim()
                        .parse::<$t>()
                        .map_err(|_| ParseTextError::new::<$t>(text))
                }
            }
        )*
    };
}

impl_textual_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char,
);

impl Textual for f64 {
    fn write_text(&self, out: &mut String) {
        out.push_str(&format_significant(*self, SIGNIFICANT_DIGITS));
    }

    fn parse_text(text: &str) -> Result<Self, ParseTextError> {
        parse_float(text)
    }
}

impl Textual for f32 {
    fn write_text(&self, out: &mut String) {
        out.push_str(&format_significant(f64::from(*self), SIGNIFICANT_DIGITS));
    }

    fn parse_text(text: &str) -> Result<Self, ParseTextError> {
        parse_float(text)
    }
}

impl Textual for String {
    fn write_text(&self, out: &mut String) {
        out.push_str(self);
    }

    fn parse_text(text: &str) -> Result<Self, ParseTextError> {
        Ok(text.to_owned())
    }
}

/// Read a float, accepting the `nan` and `inf` spellings written by [`format_significant`].
fn parse_float<F: std::str::FromStr>(text: &str) -> Result<F, ParseTextError> {
    text.trim()
        .parse::<F>()
        .map_err(|_| ParseTextError::new::<F>(text))
}

/// Format `value` with `digits` significant digits, choosing fixed or scientific notation the way
/// the `%g` conversion does and dropping trailing zeros.
///
/// # Examples
///
/// ```
/// use catena::text::format_significant;
///
/// assert_eq!(format_significant(3.4, 15), "3.4");
/// assert_eq!(format_significant(0.0001, 15), "0.0001");
/// assert_eq!(format_significant(1e-5, 15), "1e-05");
/// assert_eq!(format_significant(1e20, 15), "1e+20");
/// assert_eq!(format_significant(2.0 / 3.0, 15), "0.666666666666667");
/// ```
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => (mantissa, exponent),
            Err(_) => return scientific,
        },
        None => return scientific,
    };

    if exponent < -4 || exponent >= digits as i32 {
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            if exponent < 0 { '-' } else { '+' },
            exponent.abs(),
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_owned()
    }
}

/// Drop trailing zeros after a decimal point, and the point itself if nothing follows it.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_notation_drops_trailing_zeros() {
        assert_eq!(47.11_f64.to_text(), "47.11");
        assert_eq!(78.90_f64.to_text(), "78.9");
        assert_eq!(100.0_f64.to_text(), "100");
        assert_eq!((-2.5_f64).to_text(), "-2.5");
        assert_eq!(3.14159265_f64.to_text(), "3.14159265");
    }

    #[test]
    fn fifteen_significant_digits() {
        assert_eq!(std::f64::consts::PI.to_text(), "3.14159265358979");
        assert_eq!(123456789012345.0_f64.to_text(), "123456789012345");
        assert_eq!(1234567890123456.0_f64.to_text(), "1.23456789012346e+15");
    }

    #[test]
    fn scientific_notation_bounds() {
        assert_eq!(0.000123_f64.to_text(), "0.000123");
        assert_eq!(0.0000123_f64.to_text(), "1.23e-05");
        assert_eq!(1.5e300_f64.to_text(), "1.5e+300");
    }

    #[test]
    fn special_values() {
        assert_eq!(f64::NAN.to_text(), "nan");
        assert_eq!(f64::INFINITY.to_text(), "inf");
        assert_eq!(f64::NEG_INFINITY.to_text(), "-inf");
        assert_eq!(0.0_f64.to_text(), "0");
        assert_eq!((-0.0_f64).to_text(), "-0");
    }

    #[test]
    fn single_precision_widens_before_formatting() {
        assert_eq!(0.5_f32.to_text(), "0.5");
        assert_eq!(3.4_f32.to_text(), "3.40000009536743");
    }

    #[test]
    fn parse_accepts_surrounding_whitespace() {
        assert_eq!(i64::parse_text(" -17 ").unwrap(), -17);
        assert_eq!(f64::parse_text("34.56\n").unwrap(), 34.56);
        assert!(bool::parse_text("true").unwrap());
    }

    #[test]
    fn parse_failure_names_the_target() {
        let error = u8::parse_text("300").unwrap_err();
        assert_eq!(error.text(), "300");
        assert_eq!(error.target(), "u8");
        assert_eq!(error.to_string(), "cannot read \"300\" as `u8`");
    }

    #[test]
    fn strings_round_trip_unchanged() {
        let text = "  two words ".to_string();
        assert_eq!(text.to_text(), "  two words ");
        assert_eq!(String::parse_text("  two words ").unwrap(), "  two words ");
    }
}
