//! Request body encoding.
//!
//! Bodies are serialized to JSON; anything larger than the configured
//! threshold is gzip-compressed before it goes on the wire.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Bodies strictly larger than this many bytes are gzip-compressed.
pub const DEFAULT_COMPRESS_THRESHOLD: usize = 10 * 1024;

/// A serialized request body ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBody {
    pub bytes: Vec<u8>,
    pub gzip: bool,
}

impl EncodedBody {
    /// Value for the `Content-Encoding` header, if any.
    pub fn content_encoding(&self) -> Option<&'static str> {
        if self.gzip {
            Some("gzip")
        } else {
            None
        }
    }
}

/// Serialize `body` to JSON and compress it when it exceeds `threshold` bytes.
pub fn encode_body(body: &serde_json::Value, threshold: usize) -> crate::Result<EncodedBody> {
    let json = serde_json::to_vec(body)?;
    if json.len() <= threshold {
        return Ok(EncodedBody {
            bytes: json,
            gzip: false,
        });
    }

    let mut encoder = GzEncoder::new(Vec::with_capacity(json.len() / 4), Compression::default());
    encoder.write_all(&json)?;
    let bytes = encoder.finish()?;
    Ok(EncodedBody { bytes, gzip: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use serde_json::json;
    use std::io::Read;

    #[test]
    fn test_small_body_is_plain_json() {
        let body = json!(["美好的世界"]);
        let encoded = encode_body(&body, DEFAULT_COMPRESS_THRESHOLD).unwrap();
        assert!(!encoded.gzip);
        assert_eq!(encoded.content_encoding(), None);
        assert_eq!(encoded.bytes, serde_json::to_vec(&body).unwrap());
    }

    #[test]
    fn test_large_body_is_gzipped() {
        // 800 x 5 CJK chars = 12000 UTF-8 bytes, over the 10 KB threshold
        let body = json!("美好的世界".repeat(800));
        let encoded = encode_body(&body, DEFAULT_COMPRESS_THRESHOLD).unwrap();
        assert!(encoded.gzip);
        assert_eq!(encoded.content_encoding(), Some("gzip"));

        let mut decoded = String::new();
        GzDecoder::new(&encoded.bytes[..])
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(serde_json::from_str::<serde_json::Value>(&decoded).unwrap(), body);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let body = json!("a".repeat(8));
        // serialized as "aaaaaaaa" with quotes: 10 bytes
        assert!(!encode_body(&body, 10).unwrap().gzip);
        assert!(encode_body(&body, 9).unwrap().gzip);
    }
}
