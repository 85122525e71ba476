//! Lazy, exactly-once payload decoding.

use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::read::GzDecoder;

use crate::error::DecodeError;

type Outcome = Result<Arc<[u8]>, Arc<DecodeError>>;

/// Per-record decode state.
///
/// Moves at most once from empty to either a decoded buffer or a decode
/// error. Threads that arrive while the first decode is running block on the
/// `OnceLock` and then see its outcome; nothing is decoded twice, and a
/// stored error is returned as-is instead of retrying.
#[derive(Debug, Default)]
pub struct DecodeCell {
    outcome: OnceLock<Outcome>,
    attempts: AtomicUsize,
}

impl DecodeCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the decoded bytes, decoding `payload` on first use.
    ///
    /// `size == 0` short-circuits to an empty buffer without touching the
    /// decoder.
    pub fn get_or_decode(&self, path: &str, size: u64, payload: Option<&str>) -> Outcome {
        self.outcome
            .get_or_init(|| {
                if size == 0 {
                    return Ok(Arc::from(Vec::new()));
                }
                self.attempts.fetch_add(1, Ordering::Relaxed);
                let _span = tracing::debug_span!("decode", path, size).entered();
                let result = match payload {
                    Some(payload) => decode_payload(payload, size),
                    None => Err(DecodeError::MissingPayload { size }),
                };
                match result {
                    Ok(bytes) => {
                        tracing::debug!(bytes = bytes.len(), "asset decoded");
                        Ok(Arc::from(bytes))
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "asset decode failed");
                        Err(Arc::new(e))
                    }
                }
            })
            .clone()
    }

    /// Whether an outcome (success or failure) has been stored.
    pub fn is_settled(&self) -> bool {
        self.outcome.get().is_some()
    }

    /// How many times the decoder actually ran for this record: 0 or 1.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Relaxed)
    }
}

/// Decode a generated payload: base64 text of a gzip stream.
///
/// ASCII whitespace in the text is ignored since generated literals are
/// line-wrapped. The inflated length must equal `size`; inflation stops one
/// byte past `size`, so an oversized stream reports `actual == size + 1`.
pub fn decode_payload(payload: &str, size: u64) -> Result<Vec<u8>, DecodeError> {
    let text: Vec<u8> = payload
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let compressed = STANDARD.decode(&text)?;

    // `size` is untrusted, so the buffer grows with what actually inflates.
    let mut out = Vec::new();
    GzDecoder::new(compressed.as_slice())
        .take(size.saturating_add(1))
        .read_to_end(&mut out)
        .map_err(DecodeError::Inflate)?;

    let actual = out.len() as u64;
    if actual != size {
        return Err(DecodeError::SizeMismatch {
            expected: size,
            actual,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    fn pack(data: &[u8]) -> String {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(data).unwrap();
        STANDARD.encode(enc.finish().unwrap())
    }

    #[test]
    fn test_decode_roundtrip() {
        let payload = pack(b"hello, embedded world");
        let out = decode_payload(&payload, 21).unwrap();
        assert_eq!(out, b"hello, embedded world");
    }

    #[test]
    fn test_decode_ignores_line_wrapping() {
        let payload = pack(&[b'x'; 500]);
        let wrapped: String = payload
            .as_bytes()
            .chunks(16)
            .map(|c| format!("{}\n", std::str::from_utf8(c).unwrap()))
            .collect();
        let out = decode_payload(&format!("\n{wrapped}"), 500).unwrap();
        assert_eq!(out.len(), 500);
    }

    #[test]
    fn test_decode_bad_base64() {
        let err = decode_payload("!!not base64!!", 4).unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn test_decode_bad_stream() {
        let payload = STANDARD.encode(b"definitely not gzip data");
        let err = decode_payload(&payload, 4).unwrap_err();
        assert!(matches!(err, DecodeError::Inflate(_)));
    }

    #[test]
    fn test_decode_size_mismatch() {
        let payload = pack(b"abc");
        let err = decode_payload(&payload, 10).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::SizeMismatch { expected: 10, actual: 3 }
        ));
    }

    #[test]
    fn test_decode_huge_declared_size() {
        let payload = pack(b"abc");
        let err = decode_payload(&payload, u64::MAX / 2).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::SizeMismatch { expected, actual: 3 } if expected == u64::MAX / 2
        ));
    }

    #[test]
    fn test_decode_stops_past_declared_size() {
        let payload = pack(&[b'z'; 4096]);
        let err = decode_payload(&payload, 16).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::SizeMismatch { expected: 16, actual: 17 }
        ));
    }

    #[test]
    fn test_cell_zero_size_skips_decoder() {
        let cell = DecodeCell::new();
        let out = cell.get_or_decode("/empty", 0, Some("garbage")).unwrap();
        assert!(out.is_empty());
        assert_eq!(cell.attempts(), 0);
        assert!(cell.is_settled());
    }

    #[test]
    fn test_cell_decodes_once() {
        let cell = DecodeCell::new();
        let payload = pack(b"once");
        let a = cell.get_or_decode("/f", 4, Some(&payload)).unwrap();
        let b = cell.get_or_decode("/f", 4, Some(&payload)).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cell.attempts(), 1);
    }

    #[test]
    fn test_cell_replays_failure() {
        let cell = DecodeCell::new();
        let first = cell.get_or_decode("/bad", 4, Some("%%%")).unwrap_err();
        let second = cell.get_or_decode("/bad", 4, Some("%%%")).unwrap_err();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cell.attempts(), 1);
    }

    #[test]
    fn test_cell_missing_payload() {
        let cell = DecodeCell::new();
        let err = cell.get_or_decode("/f", 4, None).unwrap_err();
        assert!(matches!(*err, DecodeError::MissingPayload { size: 4 }));
    }
}
