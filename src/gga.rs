//! The *GGA* (global positioning system fix data) sentence.

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use coord::{self, Axis};
use datetime::{self, Clock};
use err::{CoordinateError, DecodeError};
use lexer::{self, Fields};

/// Number of fields up to and including the station id/checksum field.
pub const FIELD_COUNT: usize = 15;

/// Quality of the fix reported by the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FixType {
    None,
    Fix,
    Delta,
}

impl FixType {
    /// Takes an integer in the range `0..=2` and returns the corresponding
    /// `FixType`.
    /// Else `DecodeError::UnrecognizedFixType` is returned.
    #[inline]
    pub fn try_from_i64(int: i64) -> Result<Self, DecodeError> {
        match int {
            0 => Ok(FixType::None),
            1 => Ok(FixType::Fix),
            2 => Ok(FixType::Delta),
            _ => Err(DecodeError::UnrecognizedFixType(int)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FixType::None => "none",
            FixType::Fix => "fix",
            FixType::Delta => "delta",
        }
    }
}

impl fmt::Display for FixType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded GGA sentence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GgaSentence {
    /// Time of the fix on the date of decoding. GGA carries no date.
    pub utc: DateTime<Utc>,
    /// Latitude as `ddmm.mmmm`.
    pub latitude: String,
    /// `N` or `S`.
    pub lat_pole: String,
    /// Longitude as `dddmm.mmmm`.
    pub longitude: String,
    /// `E` or `W`.
    pub long_pole: String,
    pub fix_type: FixType,
    /// Number of satellites in use.
    pub sat_count: String,
    /// Horizontal dilution of precision
    pub hdop: String,
    /// Antenna altitude above/below mean-sea-level (geoid)
    pub altitude: String,
    pub altitude_unit: String,
    /// Geoidal separation, the difference between the WGS-84 earth ellipsoid
    /// and mean-sea-level (geoid), "-" means mean-sea-level below ellipsoid
    pub geoidal_sep: String,
    pub geoidal_sep_unit: String,
    /// Age of differential GPS data, time in seconds since last SC104 type
    /// 1 or 9 update, empty when DGPS is not used
    pub differential_age: String,
    /// Differential reference station ID, 0000-1023
    pub differential_station: String,
    /// The last field, station id included.
    pub checksum: String,
}

impl GgaSentence {
    /// Latitude in decimal degrees, negative in the southern hemisphere.
    pub fn latitude(&self) -> Result<Option<f64>, CoordinateError> {
        coord::decimal_degrees(&self.latitude, &self.lat_pole, Axis::Latitude)
    }

    /// Longitude in decimal degrees, negative in the western hemisphere.
    pub fn longitude(&self) -> Result<Option<f64>, CoordinateError> {
        coord::decimal_degrees(&self.longitude, &self.long_pole, Axis::Longitude)
    }
}

pub(crate) fn decode<C: Clock + ?Sized>(
    fields: &Fields,
    clock: &C,
) -> Result<GgaSentence, DecodeError> {
    let [_, time, lat, lat_pole, long, long_pole, fix, sats, hdop, alt, alt_unit, geo_sep, geo_sep_unit, age, station] =
        fields.leading::<FIELD_COUNT>("GGA")?;

    let utc = datetime::reconstruct(clock, None, Some(time))?;

    let fix = i64::from_str(fix).map_err(|_| DecodeError::UnparsableNumber {
        field: "fix type",
        token: fix.to_owned(),
    })?;
    let fix_type = FixType::try_from_i64(fix)?;

    Ok(GgaSentence {
        utc,
        latitude: lat.to_owned(),
        lat_pole: lat_pole.to_owned(),
        longitude: long.to_owned(),
        long_pole: long_pole.to_owned(),
        fix_type,
        sat_count: sats.to_owned(),
        hdop: hdop.to_owned(),
        altitude: alt.to_owned(),
        altitude_unit: alt_unit.to_owned(),
        geoidal_sep: geo_sep.to_owned(),
        geoidal_sep_unit: geo_sep_unit.to_owned(),
        differential_age: age.to_owned(),
        differential_station: lexer::strip_checksum(station).to_owned(),
        checksum: station.to_owned(),
    })
}
