//! Splits a raw sentence into its comma separated fields and derives the key
//! used to pick a sentence handler.

use arrayvec::ArrayString;

use err::{DecodeError, Malformed};

pub const START_DELIMITER: char = '$';
pub const CHECKSUM_DELIMITER: char = '*';
pub const FIELD_SEPARATOR: char = ',';
pub const TYPE_CODE_LENGTH: usize = 3;

/// Lower-cased sentence type code, e.g. `rmc` for `$GPRMC`.
pub type TypeKey = ArrayString<[u8; TYPE_CODE_LENGTH]>;

/// The fields of one sentence.
///
/// Field `0` is always the type field. Fields are kept exactly as they
/// appear between the commas, nothing is trimmed.
#[derive(Debug)]
pub struct Fields<'a> {
    tokens: Vec<&'a str>,
    key: TypeKey,
}

impl<'a> Fields<'a> {
    /// Split `raw` and validate the type field.
    pub fn split(raw: &'a str) -> Result<Self, DecodeError> {
        if raw.is_empty() {
            return Err(Malformed::Empty.into());
        }
        if !raw.is_ascii() {
            return Err(DecodeError::InvalidInput(
                "sentence contains non-ASCII characters",
            ));
        }
        if raw.contains(|c: char| c == '\r' || c == '\n') {
            return Err(DecodeError::InvalidInput(
                "sentence contains a line terminator",
            ));
        }

        let tokens: Vec<&str> = raw.split(FIELD_SEPARATOR).collect();
        let key = match tokens.first() {
            Some(head) => Self::type_key(head)?,
            None => return Err(Malformed::Empty.into()),
        };

        Ok(Fields { tokens, key })
    }

    /// Takes the last three characters of the type field and lower-cases them.
    fn type_key(head: &str) -> Result<TypeKey, DecodeError> {
        if !head.starts_with(START_DELIMITER) {
            return Err(Malformed::MissingStartDelimiter.into());
        }
        // the delimiter itself is not part of the code
        if head.len() < TYPE_CODE_LENGTH + 1 {
            return Err(Malformed::MissingTypeCode.into());
        }

        // the sentence is ASCII, so the code is exactly TYPE_CODE_LENGTH bytes
        let code = &head[head.len() - TYPE_CODE_LENGTH..];
        let mut key = TypeKey::new();
        key.push_str(code);
        key.make_ascii_lowercase();
        Ok(key)
    }

    #[inline]
    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    /// The full first field, e.g. `$GPGSV`.
    #[inline]
    pub fn sentence_type(&self) -> &'a str {
        self.tokens.first().cloned().unwrap_or("")
    }

    /// The last field, which carries the checksum suffix.
    #[inline]
    pub fn last(&self) -> &'a str {
        self.tokens.last().cloned().unwrap_or("")
    }

    #[inline]
    pub fn as_slice(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Returns the first `N` fields, or `Malformed::TooFewFields` if the
    /// sentence is shorter. Fields past `N` are ignored.
    pub fn leading<const N: usize>(
        &self,
        sentence: &'static str,
    ) -> Result<[&'a str; N], DecodeError> {
        if self.tokens.len() < N {
            return Err(Malformed::TooFewFields {
                sentence,
                expected: N,
                found: self.tokens.len(),
            }
            .into());
        }

        let mut fields = [""; N];
        fields.copy_from_slice(&self.tokens[..N]);
        Ok(fields)
    }
}

/// Returns the part of `field` in front of the checksum delimiter.
#[inline]
pub fn strip_checksum(field: &str) -> &str {
    match field.find(CHECKSUM_DELIMITER) {
        Some(pos) => &field[..pos],
        None => field,
    }
}
