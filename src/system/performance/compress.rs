//! Compression probe: zlib round trip of a highly repetitive buffer.

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};

use super::timer::measure;
use super::Probe;
use crate::error::ProbeError;
use crate::models::ProbeId;

pub const COMPRESS_BUFFER_LEN: usize = 10_000_000;
/// Every byte of the input buffer.
pub const FILL_BYTE: u8 = b'A';

/// zlib-compress `data` at the default level.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, ProbeError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Inflate a zlib stream; `size_hint` pre-sizes the output.
pub fn decompress(compressed: &[u8], size_hint: usize) -> Result<Vec<u8>, ProbeError> {
    let mut decoder = ZlibDecoder::new(compressed);
    let mut out = Vec::with_capacity(size_hint);
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

/// Compress then decompress, returning the restored bytes.
pub fn round_trip(data: &[u8]) -> Result<Vec<u8>, ProbeError> {
    let compressed = compress(data)?;
    decompress(&compressed, data.len())
}

#[derive(Clone, Debug)]
pub struct CompressionProbe {
    len: usize,
}

impl Default for CompressionProbe {
    fn default() -> Self {
        CompressionProbe {
            len: COMPRESS_BUFFER_LEN,
        }
    }
}

impl CompressionProbe {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }
}

impl Probe for CompressionProbe {
    fn id(&self) -> ProbeId {
        ProbeId::Compression
    }

    fn run(&self) -> Result<f64, ProbeError> {
        let data = vec![FILL_BYTE; self.len];

        let (restored, elapsed) = measure(|| round_trip(&data));
        let restored = restored?;

        if restored != data {
            return Err(ProbeError::Verification(format!(
                "round trip changed the buffer ({} bytes in, {} bytes out)",
                data.len(),
                restored.len()
            )));
        }
        log::debug!("[COMPRESS] Round trip of {} bytes verified", data.len());
        Ok(elapsed)
    }
}
