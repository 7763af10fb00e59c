//! The records produced by the decoder.

use std::collections::BTreeMap;
#[cfg(feature = "serde")]
use serde::Serialize;

use gga::GgaSentence;
use gsv::GsvSentence;
use lexer::{Fields, START_DELIMITER, TYPE_CODE_LENGTH};
use rmc::RmcSentence;

const TALKER_ID_LENGTH: usize = 2;
/// Proprietary sentences carry a manufacturer code instead of a talker id.
const PROPRIETARY_PREFIX: &str = "$P";

/// One decoded sentence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DecodedRecord {
    /// The complete first field, e.g. `$GPRMC`.
    pub sentence_type: String,
    /// The sentence exactly as it was passed to the decoder.
    pub raw_sentence: String,
    pub data: SentenceData,
}

impl DecodedRecord {
    /// The two letter talker id, e.g. `GP` for GPS or `GL` for GLONASS.
    /// Returns `None` for proprietary sentences.
    pub fn talker_id(&self) -> Option<&str> {
        if self.sentence_type.starts_with(PROPRIETARY_PREFIX) {
            return None;
        }
        let start = START_DELIMITER.len_utf8();
        self.sentence_type.get(start..start + TALKER_ID_LENGTH)
    }

    /// The three character sentence type code as written, e.g. `RMC`.
    pub fn type_code(&self) -> &str {
        let len = self.sentence_type.len();
        self.sentence_type
            .get(len.saturating_sub(TYPE_CODE_LENGTH)..)
            .unwrap_or("")
    }
}

/// The sentence specific part of a record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum SentenceData {
    Rmc(RmcSentence),
    Gga(GgaSentence),
    Gsv(GsvSentence),
    /// Any sentence type without a dedicated decoder.
    Generic(GenericSentence),
}

/// A sentence of unknown type. Every field is kept under its position,
/// starting with the type field at `0`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GenericSentence {
    pub fields: BTreeMap<usize, String>,
}

impl GenericSentence {
    pub(crate) fn from_fields(fields: &Fields) -> Self {
        GenericSentence {
            fields: fields
                .as_slice()
                .iter()
                .enumerate()
                .map(|(i, f)| (i, (*f).to_owned()))
                .collect(),
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(&index).map(String::as_str)
    }
}
