//! Length-prefixed string list codec.
//!
//! Each string is written as `<delimiter><byte length><terminator><bytes>`.
//! With the default `$` / `#` pair, `["hello", ""]` becomes `"$5#hello$0#"`.
//! Decoding reads the whole digit run up to the terminator and then exactly
//! that many bytes, so payloads may contain digits, the delimiter or the
//! terminator without ambiguity.

use crate::error::{AlgoError, Result};
use serde::{Deserialize, Serialize};

/// Framing characters used by a [`Codec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Marks the start of every record.
    pub delimiter: char,
    /// Ends the decimal length of every record.
    pub terminator: char,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            delimiter: '$',
            terminator: '#',
        }
    }
}

/// Encoder/decoder for ordered lists of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Builds a codec from `config`.
    ///
    /// # Errors
    ///
    /// [`AlgoError::InvalidInput`] if either framing character is an ASCII
    /// digit or if both are the same character.
    pub fn new(config: CodecConfig) -> Result<Self> {
        let CodecConfig {
            delimiter,
            terminator,
        } = config;
        if delimiter.is_ascii_digit() || terminator.is_ascii_digit() {
            return Err(AlgoError::invalid(format!(
                "codec framing characters must not be digits (delimiter {delimiter:?}, terminator {terminator:?})"
            )));
        }
        if delimiter == terminator {
            return Err(AlgoError::invalid(format!(
                "codec delimiter and terminator must differ (both {delimiter:?})"
            )));
        }
        Ok(Self { config })
    }

    /// The framing characters in use.
    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// Concatenates `items` into a single buffer.
    pub fn encode<S: AsRef<str>>(&self, items: &[S]) -> String {
        let mut out = String::new();
        for item in items {
            let item = item.as_ref();
            out.push(self.config.delimiter);
            out.push_str(&item.len().to_string());
            out.push(self.config.terminator);
            out.push_str(item);
        }
        out
    }

    /// Splits a buffer produced by [`encode`](Self::encode) back into its
    /// strings. The empty buffer decodes to an empty list.
    ///
    /// # Errors
    ///
    /// [`AlgoError::MalformedEncoding`] if a record does not start with the
    /// delimiter, has no length digits, lacks the terminator, declares a
    /// length past the end of the buffer, or declares a length that ends
    /// inside a UTF-8 character.
    pub fn decode(&self, buf: &str) -> Result<Vec<String>> {
        let CodecConfig {
            delimiter,
            terminator,
        } = self.config;
        let mut items = Vec::new();
        let mut pos = 0;

        while pos < buf.len() {
            if !buf[pos..].starts_with(delimiter) {
                return Err(malformed(pos, "expected delimiter"));
            }
            pos += delimiter.len_utf8();

            let digits = buf[pos..].bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                return Err(malformed(pos, "expected length digits"));
            }
            let len: usize = buf[pos..pos + digits]
                .parse()
                .map_err(|_| malformed(pos, "length does not fit in usize"))?;
            pos += digits;

            if !buf[pos..].starts_with(terminator) {
                return Err(malformed(pos, "expected terminator after length"));
            }
            pos += terminator.len_utf8();

            let end = pos
                .checked_add(len)
                .filter(|&end| end <= buf.len())
                .ok_or_else(|| malformed(pos, "length runs past end of buffer"))?;
            let item = buf
                .get(pos..end)
                .ok_or_else(|| malformed(pos, "length ends inside a UTF-8 character"))?;
            items.push(item.to_owned());
            pos = end;
        }
        Ok(items)
    }
}

fn malformed(offset: usize, reason: &'static str) -> AlgoError {
    tracing::debug!(offset, reason, "rejecting encoded buffer");
    AlgoError::MalformedEncoding { offset, reason }
}

/// Encodes `items` with the default `$` / `#` framing.
///
/// ```rust
/// use algokit::codec::{decode, encode};
///
/// let encoded = encode(&["hello", "world"]);
/// assert_eq!(encoded, "$5#hello$5#world");
/// assert_eq!(decode(&encoded).unwrap(), vec!["hello", "world"]);
/// ```
pub fn encode<S: AsRef<str>>(items: &[S]) -> String {
    Codec::default().encode(items)
}

/// Decodes a buffer produced by [`encode`].
///
/// # Errors
///
/// See [`Codec::decode`].
pub fn decode(buf: &str) -> Result<Vec<String>> {
    Codec::default().decode(buf)
}
