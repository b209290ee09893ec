use log::{debug, trace};

use crate::block::Block;
use crate::format::{classify, TapeFormat};
use crate::SAMPLE_RATE;

/// How the encoder decides on a block plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    /// Sniff the image header
    #[default]
    Auto,
    /// Always send the whole image as one binary block
    Binary,
}

/// Result of encoding a tape image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub format: TapeFormat,
    pub samples: Vec<u8>,
}

impl Encoded {
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / SAMPLE_RATE as f64
    }
}

/// Tape image encoder
///
/// Classifies the image, splits it into blocks and renders each block as
/// carrier preamble + UART frames, all at 1200 baud.
#[derive(Debug, Clone, Default)]
pub struct TapeEncoder {
    mode: FormatMode,
}

impl TapeEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: FormatMode) -> Self {
        Self { mode }
    }

    pub fn format_of(&self, data: &[u8]) -> TapeFormat {
        match self.mode {
            FormatMode::Auto => classify(data),
            FormatMode::Binary => TapeFormat::Binary,
        }
    }

    fn blocks<'a>(&self, data: &'a [u8]) -> (TapeFormat, Vec<Block<'a>>) {
        let format = self.format_of(data);
        let blocks = format.plan(data);
        debug!(
            "{} byte image classified as {:?}, {} block(s)",
            data.len(),
            format,
            blocks.len()
        );
        (format, blocks)
    }

    /// Exact number of samples `encode` would produce, without rendering them
    pub fn encoded_len(&self, data: &[u8]) -> usize {
        let (_, blocks) = self.blocks(data);
        blocks.iter().map(Block::sample_len).sum()
    }

    /// Encode a tape image into 8-bit PCM samples
    /// Returns: the blocks' samples concatenated, nothing before or after
    pub fn encode(&self, data: &[u8]) -> Encoded {
        let (format, blocks) = self.blocks(data);

        let total: usize = blocks.iter().map(Block::sample_len).sum();
        let mut samples = Vec::with_capacity(total);
        for (i, block) in blocks.iter().enumerate() {
            trace!(
                "block {}: {:?} header, {} bytes, {} samples",
                i,
                block.header,
                block.payload.len(),
                block.sample_len()
            );
            block.append_to(&mut samples);
        }

        Encoded { format, samples }
    }
}
