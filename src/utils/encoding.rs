//! Prompt decoding with encoding detection.
//!
//! Prompt files are not guaranteed to be UTF-8. Decoding strategy:
//! 1. BOM markers (UTF-8, UTF-16 LE/BE) win and are stripped
//! 2. Strict UTF-8 fast path
//! 3. chardetng guess, decoded with replacement characters

use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::io::Read;
use std::path::Path;

const DEFAULT_SAMPLE_SIZE: usize = 8192;

/// Decode raw prompt bytes. Returns the text and the lowercased name of the
/// encoding that was used.
pub fn decode_prompt_bytes(bytes: &[u8]) -> (String, String) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (decoded.into_owned(), encoding.name().to_lowercase());
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.to_string(), "utf-8".to_string());
    }

    let encoding = detect_encoding(bytes);
    let (decoded, _) = encoding.decode_without_bom_handling(bytes);
    (decoded.into_owned(), encoding.name().to_lowercase())
}

fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let sample = &bytes[..bytes.len().min(DEFAULT_SAMPLE_SIZE)];
    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == bytes.len());
    detector.guess(None, true)
}

/// Read a prompt from `path`, or from stdin when `path` is `-`.
pub fn read_prompt(path: &Path) -> Result<(String, String)> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).context("Failed to read prompt from stdin")?;
        buf
    } else {
        std::fs::read(path)
            .with_context(|| format!("Failed to read prompt file: {}", path.display()))?
    };

    let (text, encoding) = decode_prompt_bytes(&bytes);
    tracing::debug!(bytes = bytes.len(), %encoding, "decoded prompt");
    Ok((text, encoding))
}
