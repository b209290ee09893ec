use crate::tone::append_square_wave;
use crate::uart::append_byte;
use crate::{BIT1_FREQ, FRAME_SAMPLES, LONG_HEADER_MS, SAMPLE_RATE, SHORT_HEADER_MS};

/// Length of the carrier tone that leads a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Long,
    Short,
}

impl HeaderKind {
    pub fn duration_ms(self) -> usize {
        match self {
            HeaderKind::Long => LONG_HEADER_MS,
            HeaderKind::Short => SHORT_HEADER_MS,
        }
    }

    /// Carrier length in samples, `SAMPLE_RATE * ms / 1000` with the remainder dropped
    pub fn samples(self) -> usize {
        SAMPLE_RATE * self.duration_ms() / 1000
    }
}

/// One preamble plus the bytes framed after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub header: HeaderKind,
    pub payload: &'a [u8],
}

impl<'a> Block<'a> {
    pub fn new(header: HeaderKind, payload: &'a [u8]) -> Self {
        Self { header, payload }
    }

    /// Total samples this block produces
    pub fn sample_len(&self) -> usize {
        self.header.samples() + self.payload.len() * FRAME_SAMPLES
    }

    pub(crate) fn append_to(&self, out: &mut Vec<u8>) {
        out.reserve(self.sample_len());
        append_square_wave(out, BIT1_FREQ, self.header.samples());
        for &byte in self.payload {
            append_byte(out, byte);
        }
    }
}

/// Encode a carrier preamble followed by every byte of `payload`, frames back-to-back
pub fn encode_block(payload: &[u8], use_short_header: bool) -> Vec<u8> {
    let header = if use_short_header {
        HeaderKind::Short
    } else {
        HeaderKind::Long
    };
    let block = Block::new(header, payload);
    let mut samples = Vec::with_capacity(block.sample_len());
    block.append_to(&mut samples);
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::generate_square_wave;
    use crate::uart::encode_byte;

    #[test]
    fn test_header_samples() {
        assert_eq!(HeaderKind::Long.samples(), 38400);
        assert_eq!(HeaderKind::Short.samples(), 9600);
    }

    #[test]
    fn test_empty_block_is_preamble_only() {
        let long = encode_block(&[], false);
        assert_eq!(long, generate_square_wave(BIT1_FREQ, 38400));

        let short = encode_block(&[], true);
        assert_eq!(short, generate_square_wave(BIT1_FREQ, 9600));
    }

    #[test]
    fn test_block_layout() {
        let payload = [0x00u8, 0xFF, 0x5A];
        let samples = encode_block(&payload, true);
        let preamble = HeaderKind::Short.samples();

        assert_eq!(samples.len(), preamble + 3 * FRAME_SAMPLES);
        assert_eq!(block_len(&payload, true), samples.len());

        for (i, &byte) in payload.iter().enumerate() {
            let start = preamble + i * FRAME_SAMPLES;
            assert_eq!(
                &samples[start..start + FRAME_SAMPLES],
                encode_byte(byte).as_slice(),
                "frame {}",
                i
            );
        }
    }

    #[test]
    fn test_sample_len_matches_output() {
        let payload = vec![0x42u8; 100];
        let block = Block::new(HeaderKind::Long, &payload);
        let mut out = Vec::new();
        block.append_to(&mut out);
        assert_eq!(out.len(), block.sample_len());
    }

    fn block_len(payload: &[u8], short: bool) -> usize {
        let header = if short { HeaderKind::Short } else { HeaderKind::Long };
        Block::new(header, payload).sample_len()
    }
}
