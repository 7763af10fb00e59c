//! The *RMC* (recommended minimum) sentence: position, speed, track and
//! the date/time of the fix.

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::Serialize;

use coord::{self, Axis};
use datetime::{self, Clock};
use err::{CoordinateError, DecodeError};
use lexer::Fields;

/// Number of fields up to and including the checksum field.
pub const FIELD_COUNT: usize = 13;

/// A decoded RMC sentence. Apart from `utc`, every field holds the text of
/// the sentence as is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RmcSentence {
    /// UTC time of the fix, `hhmmss.ss`.
    pub time: String,
    /// `A` for active, `V` for void.
    pub status: String,
    /// Latitude as `ddmm.mmmm`.
    pub latitude: String,
    /// `N` or `S`.
    pub lat_dir: String,
    /// Longitude as `dddmm.mmmm`.
    pub longitude: String,
    /// `E` or `W`.
    pub long_dir: String,
    /// Speed over ground in knots.
    pub speed: String,
    /// Track angle in degrees true.
    pub track: String,
    /// UTC date of the fix, `ddmmyy`.
    pub date: String,
    /// Magnetic variation in degrees.
    pub variation: String,
    /// `E` or `W`.
    pub variation_dir: String,
    /// The last field, checksum suffix included.
    pub checksum: String,
    /// `date` and `time` combined.
    pub utc: DateTime<Utc>,
}

impl RmcSentence {
    /// Whether the receiver flagged the data as valid.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == "A"
    }

    /// Latitude in decimal degrees, negative in the southern hemisphere.
    pub fn latitude(&self) -> Result<Option<f64>, CoordinateError> {
        coord::decimal_degrees(&self.latitude, &self.lat_dir, Axis::Latitude)
    }

    /// Longitude in decimal degrees, negative in the western hemisphere.
    pub fn longitude(&self) -> Result<Option<f64>, CoordinateError> {
        coord::decimal_degrees(&self.longitude, &self.long_dir, Axis::Longitude)
    }
}

pub(crate) fn decode<C: Clock + ?Sized>(
    fields: &Fields,
    clock: &C,
) -> Result<RmcSentence, DecodeError> {
    let [_, time, status, lat, lat_dir, long, long_dir, speed, track, date, variation, variation_dir, checksum] =
        fields.leading::<FIELD_COUNT>("RMC")?;

    let utc = datetime::reconstruct(clock, Some(date), Some(time))?;

    Ok(RmcSentence {
        time: time.to_owned(),
        status: status.to_owned(),
        latitude: lat.to_owned(),
        lat_dir: lat_dir.to_owned(),
        longitude: long.to_owned(),
        long_dir: long_dir.to_owned(),
        speed: speed.to_owned(),
        track: track.to_owned(),
        date: date.to_owned(),
        variation: variation.to_owned(),
        variation_dir: variation_dir.to_owned(),
        checksum: checksum.to_owned(),
        utc,
    })
}
