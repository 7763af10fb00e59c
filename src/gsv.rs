//! The *GSV* (satellites in view) sentence.
//!
//! GSV has a variable number of fields depending on the number of satellites
//! reported, e.g.
//!
//! ```text
//! $GPGSV,3,1,12,05,58,322,36,02,55,032,,26,50,173,,04,31,085,00*79
//! ```
//!
//! A four field header (type, number of messages, message number, satellites
//! in view) is followed by one group of four fields per satellite. The
//! checksum suffix shares the last field with the final group.

use std::str::FromStr;
#[cfg(feature = "serde")]
use serde::Serialize;

use err::{DecodeError, Malformed};
use lexer::{Fields, CHECKSUM_DELIMITER};

pub const HEADER_LENGTH: usize = 4;
pub const GROUP_LENGTH: usize = 4;

/// One satellite of a GSV sentence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Satellite {
    /// Satellite PRN number.
    pub id: u16,
    /// Elevation in degrees.
    pub elevation: f64,
    /// Azimuth in degrees true.
    pub azimuth: f64,
    /// Signal to noise ratio in dB. `None` while the satellite is tracked
    /// without a signal.
    pub snr: Option<f64>,
}

/// A decoded GSV sentence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GsvSentence {
    /// Total number of GSV messages in this cycle.
    pub msg_count: String,
    /// Number of this message within the cycle, starting at 1.
    pub msg_num: String,
    /// Total number of satellites in view.
    pub sats_in_view: String,
    /// Satellites in the order of the sentence.
    pub satellites: Vec<Satellite>,
    /// The last field, checksum suffix included.
    pub checksum: String,
}

pub(crate) fn decode(fields: &Fields) -> Result<GsvSentence, DecodeError> {
    let [_, msg_count, msg_num, sats_in_view] = fields.leading::<HEADER_LENGTH>("GSV")?;

    let groups = &fields.as_slice()[HEADER_LENGTH..];
    let trailing = groups.len() % GROUP_LENGTH;
    if trailing != 0 {
        return Err(Malformed::PartialSatelliteGroup { trailing }.into());
    }

    let group_count = groups.len() / GROUP_LENGTH;
    let satellites = groups
        .chunks(GROUP_LENGTH)
        .enumerate()
        .map(|(i, group)| parse_satellite(group, i + 1 == group_count))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GsvSentence {
        msg_count: msg_count.to_owned(),
        msg_num: msg_num.to_owned(),
        sats_in_view: sats_in_view.to_owned(),
        satellites,
        checksum: fields.last().to_owned(),
    })
}

/// `last` marks the group whose SNR field is the last field of the sentence.
fn parse_satellite(group: &[&str], last: bool) -> Result<Satellite, DecodeError> {
    match *group {
        [id, elevation, azimuth, snr] => Ok(Satellite {
            id: number(id, "satellite id")?,
            elevation: float(elevation, "elevation")?,
            azimuth: float(azimuth, "azimuth")?,
            snr: signal(snr, last)?,
        }),
        _ => Err(Malformed::PartialSatelliteGroup {
            trailing: group.len(),
        }
        .into()),
    }
}

/// An empty field means no signal. The last field of the sentence holds the
/// checksum and is not read as a signal.
fn signal(snr: &str, last: bool) -> Result<Option<f64>, DecodeError> {
    if snr.is_empty() || (last && snr.contains(CHECKSUM_DELIMITER)) {
        return Ok(None);
    }
    float(snr, "SNR").map(Some)
}

#[inline]
fn number<T: FromStr>(token: &str, field: &'static str) -> Result<T, DecodeError> {
    T::from_str(token).map_err(|_| DecodeError::UnparsableNumber {
        field,
        token: token.to_owned(),
    })
}

/// Like `number`, but `NaN` and infinities are rejected as well.
#[inline]
fn float(token: &str, field: &'static str) -> Result<f64, DecodeError> {
    let value: f64 = number(token, field)?;
    if !value.is_finite() {
        return Err(DecodeError::UnparsableNumber {
            field,
            token: token.to_owned(),
        });
    }
    Ok(value)
}
