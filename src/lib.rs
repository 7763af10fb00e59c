//! Decoder for *NMEA 0183* sentences as emitted by GPS receivers.
//!
//! RMC, GGA and GSV sentences are decoded into typed records, every other
//! sentence type into a map of its fields. Each record keeps the raw sentence
//! it was decoded from.
//!
//! ```
//! use nmea_records::{Decoder, SentenceData};
//!
//! let decoder = Decoder::new();
//! let rec = decoder
//!     .decode("$GPRMC,180826.9,V,4043.79444,N,07359.60944,W,,,160614,013.0,W,N*19")
//!     .unwrap();
//!
//! match rec.data {
//!     SentenceData::Rmc(rmc) => assert_eq!(rmc.utc.to_rfc3339(), "2014-06-16T18:08:26+00:00"),
//!     _ => unreachable!(),
//! }
//! ```

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[cfg(test)]
extern crate env_logger;
#[cfg(all(test, feature = "serde"))]
extern crate serde_json;
extern crate arrayvec;
extern crate chrono;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;
#[cfg(feature = "serde")]
extern crate serde;

pub mod err;
mod lexer;
mod coord;
pub mod datetime;
pub mod rmc;
pub mod gga;
pub mod gsv;
pub mod record;
pub mod parser;

pub use datetime::{Clock, FixedClock, SystemClock};
pub use err::{CoordinateError, DecodeError, Malformed};
pub use gga::{FixType, GgaSentence};
pub use gsv::{GsvSentence, Satellite};
pub use parser::{decode, decode_all, DecodeAll, Decoder};
pub use record::{DecodedRecord, GenericSentence, SentenceData};
pub use rmc::RmcSentence;
