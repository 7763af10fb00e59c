//! This module provides the decoder that turns raw *NMEA 0183* sentences
//! into [DecodedRecord](../record/struct.DecodedRecord.html)s.

use std::str;

use datetime::{Clock, SystemClock};
use err::DecodeError;
use lexer::Fields;
use record::{DecodedRecord, GenericSentence, SentenceData};
use gga;
use gsv;
use rmc;

/// Decodes RMC, GGA and GSV sentences. Sentences of any other type are
/// decoded into a [GenericSentence](../record/struct.GenericSentence.html).
///
/// The decoder keeps no state between sentences. The clock is only consulted
/// for sentences that lack a date (GGA) or a time.
#[derive(Debug, Clone, Default)]
pub struct Decoder<C = SystemClock> {
    clock: C,
}

impl Decoder {
    /// Create a decoder that reads the system clock.
    pub fn new() -> Self {
        Decoder { clock: SystemClock }
    }
}

impl<C: Clock> Decoder<C> {
    /// Create a decoder that takes the current date and time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Decoder { clock }
    }

    /// Decode a single sentence without line ending, e.g.
    /// `$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47`.
    pub fn decode(&self, raw: &str) -> Result<DecodedRecord, DecodeError> {
        let fields = Fields::split(raw)?;
        trace!("decoding {} sentence", fields.sentence_type());

        let data = match fields.key() {
            "rmc" => SentenceData::Rmc(rmc::decode(&fields, &self.clock)?),
            "gga" => SentenceData::Gga(gga::decode(&fields, &self.clock)?),
            "gsv" => SentenceData::Gsv(gsv::decode(&fields)?),
            _ => SentenceData::Generic(GenericSentence::from_fields(&fields)),
        };

        Ok(DecodedRecord {
            sentence_type: fields.sentence_type().to_owned(),
            raw_sentence: raw.to_owned(),
            data,
        })
    }

    /// Decode a sentence given as bytes.
    /// Returns `DecodeError::InvalidInput` if `raw` is not ASCII text.
    pub fn decode_bytes(&self, raw: &[u8]) -> Result<DecodedRecord, DecodeError> {
        match str::from_utf8(raw) {
            Ok(s) => self.decode(s),
            Err(_) => Err(DecodeError::InvalidInput("sentence is not ASCII text")),
        }
    }
}

impl<C: Clock + Clone> Decoder<C> {
    /// Decode every sentence of `sentences` in order.
    ///
    /// The returned iterator is lazy and yields one result per sentence, so
    /// a sentence that fails to decode does not affect the ones after it.
    pub fn decode_all<I>(&self, sentences: I) -> DecodeAll<I::IntoIter, C>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        DecodeAll {
            decoder: self.clone(),
            sentences: sentences.into_iter(),
            index: 0,
        }
    }
}

/// Iterator returned by [`Decoder::decode_all`](struct.Decoder.html#method.decode_all).
#[derive(Debug)]
pub struct DecodeAll<I, C = SystemClock> {
    decoder: Decoder<C>,
    sentences: I,
    index: usize,
}

impl<I, C> Iterator for DecodeAll<I, C>
where
    I: Iterator,
    I::Item: AsRef<str>,
    C: Clock,
{
    type Item = Result<DecodedRecord, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.sentences.next()?;
        let index = self.index;
        self.index += 1;

        let res = self.decoder.decode(raw.as_ref());
        if let Err(ref e) = res {
            debug!("skipping sentence {} ({:?}): {}", index, raw.as_ref(), e);
        }
        Some(res)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sentences.size_hint()
    }
}

/// Decode a single sentence, reading the system clock where needed.
pub fn decode(raw: &str) -> Result<DecodedRecord, DecodeError> {
    Decoder::new().decode(raw)
}

/// Decode a sequence of sentences, reading the system clock where needed.
pub fn decode_all<I>(sentences: I) -> DecodeAll<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Decoder::new().decode_all(sentences)
}
