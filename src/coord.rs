//! Conversion of the `ddmm.mmmm` position fields into decimal degrees.

use std::str::FromStr;

use err::CoordinateError;

const MINUTES_PER_DEGREE: f64 = 60.0;

/// The axis a position field belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Number of digits that make up the degrees.
    #[inline]
    fn deg_split(self) -> usize {
        match self {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        }
    }

    /// Maximum absolute value in degrees.
    #[inline]
    fn abs_max(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    /// Sign of the hemisphere letter, `None` if it does not belong to
    /// this axis.
    #[inline]
    fn sign(self, hemisphere: &str) -> Option<f64> {
        match (self, hemisphere) {
            (Axis::Latitude, "N") | (Axis::Longitude, "E") => Some(1.0),
            (Axis::Latitude, "S") | (Axis::Longitude, "W") => Some(-1.0),
            _ => None,
        }
    }
}

/// Parse `value` as a coordinate on `axis`.
/// A positive result lies north/east, a negative one south/west.
/// Returns `Ok(None)` if either field is empty, which receivers emit while
/// they have no fix.
pub fn decimal_degrees(
    value: &str,
    hemisphere: &str,
    axis: Axis,
) -> Result<Option<f64>, CoordinateError> {
    if value.is_empty() || hemisphere.is_empty() {
        return Ok(None);
    }

    let sign = match axis.sign(hemisphere) {
        Some(sign) => sign,
        None => return Err(CoordinateError::InvalidHemisphere(hemisphere.to_owned())),
    };

    // This check is needed to ensure we don't panic
    let split = axis.deg_split();
    let (deg, dec_min) = match (value.get(..split), value.get(split..)) {
        (Some(deg), Some(dec_min)) if !dec_min.is_empty() => (deg, dec_min),
        _ => return Err(CoordinateError::TooShort(value.to_owned())),
    };

    let degrees = f64::from(u16::from_str(deg)?);
    let minutes = f64::from_str(dec_min)?;
    if !(0.0..MINUTES_PER_DEGREE).contains(&minutes) {
        return Err(CoordinateError::InvalidMinutes(minutes));
    }
    let dec_deg = degrees + minutes / MINUTES_PER_DEGREE;
    if dec_deg > axis.abs_max() {
        return Err(CoordinateError::InvalidCoord(dec_deg, axis.abs_max()));
    }
    Ok(Some(dec_deg * sign))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn converts_latitude() {
        let lat = decimal_degrees("4807.038", "N", Axis::Latitude).unwrap().unwrap();
        assert!(close(lat, 48.1173));

        let lat = decimal_degrees("4043.79444", "S", Axis::Latitude).unwrap().unwrap();
        assert!(close(lat, -40.729907333));
    }

    #[test]
    fn converts_longitude() {
        let long = decimal_degrees("07359.60944", "W", Axis::Longitude).unwrap().unwrap();
        assert!(close(long, -73.993490667));

        let long = decimal_degrees("17959.999", "E", Axis::Longitude).unwrap().unwrap();
        assert!(close(long, 179.99998333));
    }

    #[test]
    fn empty_fields_are_absent() {
        assert_eq!(decimal_degrees("", "N", Axis::Latitude), Ok(None));
        assert_eq!(decimal_degrees("4807.038", "", Axis::Latitude), Ok(None));
    }

    #[test]
    fn rejects_bad_values() {
        assert_matches!(
            decimal_degrees("4807.038", "E", Axis::Latitude),
            Err(CoordinateError::InvalidHemisphere(_))
        );
        assert_matches!(
            decimal_degrees("48", "N", Axis::Latitude),
            Err(CoordinateError::TooShort(_))
        );
        assert_matches!(
            decimal_degrees("x807.038", "N", Axis::Latitude),
            Err(CoordinateError::Degrees(_))
        );
        assert_matches!(
            decimal_degrees("48o7.038", "N", Axis::Latitude),
            Err(CoordinateError::DecimalMin(_))
        );
        assert_matches!(
            decimal_degrees("9100.000", "N", Axis::Latitude),
            Err(CoordinateError::InvalidCoord(_, _))
        );
    }

    #[test]
    fn rejects_minutes_out_of_range() {
        assert_matches!(
            decimal_degrees("4899.0", "N", Axis::Latitude),
            Err(CoordinateError::InvalidMinutes(m)) if m == 99.0
        );
        assert_matches!(
            decimal_degrees("48-5.0", "N", Axis::Latitude),
            Err(CoordinateError::InvalidMinutes(m)) if m == -5.0
        );
        assert_matches!(
            decimal_degrees("01160.000", "E", Axis::Longitude),
            Err(CoordinateError::InvalidMinutes(_))
        );
        assert_matches!(
            decimal_degrees("4859.999", "S", Axis::Latitude),
            Ok(Some(_))
        );
    }
}
