use crate::tone::append_square_wave;
use crate::{BIT0_FREQ, BIT1_FREQ, BIT_SAMPLES, DATA_BITS, FRAME_SAMPLES, STOP_BITS};

/// Tone frequency for a logical bit: low tone for 0, high tone for 1
pub fn bit_freq(bit: bool) -> usize {
    if bit {
        BIT1_FREQ
    } else {
        BIT0_FREQ
    }
}

pub(crate) fn append_bit(out: &mut Vec<u8>, bit: bool) {
    append_square_wave(out, bit_freq(bit), BIT_SAMPLES);
}

/// Append one UART frame for `byte`:
/// start bit (0), 8 data bits LSB first, then `STOP_BITS` stop bits (1).
pub(crate) fn append_byte(out: &mut Vec<u8>, byte: u8) {
    append_bit(out, false);
    for i in 0..DATA_BITS {
        append_bit(out, (byte >> i) & 1 == 1);
    }
    for _ in 0..STOP_BITS {
        append_bit(out, true);
    }
}

/// Encode a single bit period (`BIT_SAMPLES` samples)
pub fn encode_bit(bit: bool) -> Vec<u8> {
    let mut samples = Vec::with_capacity(BIT_SAMPLES);
    append_bit(&mut samples, bit);
    samples
}

/// Encode one byte as a back-to-back UART frame (`FRAME_SAMPLES` samples)
pub fn encode_byte(byte: u8) -> Vec<u8> {
    let mut samples = Vec::with_capacity(FRAME_SAMPLES);
    append_byte(&mut samples, byte);
    samples
}
