//! Charset resolution and payload transcoding.
//!
//! Bodies are built as UTF-8 text. When the configured output encoding is
//! anything else, the whole payload is re-encoded in one pass; the first
//! character the target can't represent fails the call and nothing is
//! returned. Non-UTF-8 targets require the `transcode` feature.
//!
//! The byte-order mark is U+FEFF written in the target charset. Charsets with
//! no mapping for U+FEFF (all legacy single and double byte ones) get no
//! marker at all.

#[cfg(feature = "transcode")]
use encoding_rs::{EncoderResult, Encoding, UTF_8};

use crate::config::CANONICAL_ENCODING;
use crate::error::{CsvError, Result};

/// The UTF-8 encoded byte-order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const BOM: char = '\u{FEFF}';

/// A resolved output charset.
///
/// # Example
///
/// ```rust
/// use csvbody::core::Charset;
///
/// let utf8 = Charset::for_label("UTF8")?;
/// assert!(utf8.is_canonical());
/// assert_eq!(utf8.name(), "utf-8");
/// # Ok::<(), csvbody::CsvError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    #[cfg(feature = "transcode")]
    encoding: &'static Encoding,
    name: &'static str,
}

impl Charset {
    /// The canonical UTF-8 charset.
    pub fn utf8() -> Self {
        Self {
            #[cfg(feature = "transcode")]
            encoding: UTF_8,
            name: CANONICAL_ENCODING,
        }
    }

    /// Resolves a charset label such as `utf-8`, `latin1` or `Shift_JIS`.
    ///
    /// Labels follow the WHATWG Encoding Standard and are matched
    /// case-insensitively. Labels for charsets that can only be decoded
    /// (UTF-16, `replacement`) are rejected.
    #[cfg(feature = "transcode")]
    pub fn for_label(label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| CsvError::unsupported_encoding(label))?;

        if encoding == UTF_8 {
            return Ok(Self::utf8());
        }
        // UTF-16 and replacement encode back to UTF-8
        if encoding.output_encoding() != encoding {
            return Err(CsvError::unsupported_encoding(label));
        }

        Ok(Self {
            encoding,
            name: encoding.name(),
        })
    }

    /// Resolves a charset label. Without the `transcode` feature only UTF-8
    /// labels are accepted.
    #[cfg(not(feature = "transcode"))]
    pub fn for_label(label: &str) -> Result<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" | "unicode-1-1-utf-8" => Ok(Self::utf8()),
            _ => Err(CsvError::unsupported_encoding(label)),
        }
    }

    /// Charset name in WHATWG spelling (`utf-8`, `Shift_JIS`,
    /// `windows-1252`), suitable for a `Content-Type` parameter.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if payloads in this charset need no transcoding.
    pub fn is_canonical(&self) -> bool {
        self.name == CANONICAL_ENCODING
    }

    /// Builds the final payload: byte-order mark followed by `body`.
    pub(crate) fn encode_payload(&self, body: &str) -> Result<Vec<u8>> {
        if self.is_canonical() {
            let mut payload = Vec::with_capacity(UTF8_BOM.len() + body.len());
            payload.extend_from_slice(UTF8_BOM);
            payload.extend_from_slice(body.as_bytes());
            return Ok(payload);
        }
        self.transcode_payload(body)
    }

    #[cfg(feature = "transcode")]
    fn transcode_payload(&self, body: &str) -> Result<Vec<u8>> {
        tracing::trace!(charset = self.name, bytes = body.len(), "transcoding payload");

        let mut payload = encode_strict(self.encoding, BOM.encode_utf8(&mut [0; 4]))
            .unwrap_or_default();
        let encoded = encode_strict(self.encoding, body).map_err(|character| {
            tracing::debug!(charset = self.name, ?character, "unmappable character");
            CsvError::transcode_failure(self.name, character)
        })?;

        payload.extend_from_slice(&encoded);
        Ok(payload)
    }

    #[cfg(not(feature = "transcode"))]
    fn transcode_payload(&self, _body: &str) -> Result<Vec<u8>> {
        // for_label only ever yields UTF-8 here
        Err(CsvError::unsupported_encoding(self.name))
    }
}

/// Encodes `text` without replacement, returning the first unmappable
/// character on failure.
#[cfg(feature = "transcode")]
fn encode_strict(encoding: &'static Encoding, text: &str) -> std::result::Result<Vec<u8>, char> {
    let mut encoder = encoding.new_encoder();
    let mut out = Vec::with_capacity(text.len() + 16);
    let mut remaining = text;

    loop {
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(remaining, &mut out, true);
        remaining = &remaining[read..];
        match result {
            EncoderResult::InputEmpty => return Ok(out),
            EncoderResult::Unmappable(character) => return Err(character),
            EncoderResult::OutputFull => {
                let needed = encoder
                    .max_buffer_length_from_utf8_without_replacement(remaining.len())
                    .unwrap_or(remaining.len() * 4 + 16);
                out.reserve(needed);
            }
        }
    }
}
