use crate::{SAMPLE_HIGH, SAMPLE_LOW, SAMPLE_RATE};

/// Number of samples spent at each level for a square wave of `freq` Hz.
///
/// Floor division: any fractional half-cycle is dropped.
pub fn half_cycle_samples(freq: usize) -> usize {
    SAMPLE_RATE / (freq * 2)
}

/// Append `num_samples` samples of an 8-bit square wave at `freq` Hz.
///
/// The wave always starts HIGH and flips level every `half_cycle_samples(freq)`
/// samples. The last half-cycle is truncated when `num_samples` is not a
/// multiple of the half-cycle length.
pub fn append_square_wave(out: &mut Vec<u8>, freq: usize, num_samples: usize) {
    debug_assert!(freq > 0, "square wave frequency must be positive");
    debug_assert!(freq * 2 <= SAMPLE_RATE, "{} Hz is above Nyquist", freq);

    let samples_per_half = half_cycle_samples(freq);
    let mut value = SAMPLE_HIGH;
    let mut count = 0;

    out.reserve(num_samples);
    for _ in 0..num_samples {
        out.push(value);
        count += 1;
        if count >= samples_per_half {
            value = if value == SAMPLE_HIGH { SAMPLE_LOW } else { SAMPLE_HIGH };
            count = 0;
        }
    }
}

/// Generate exactly `num_samples` samples of a square wave at `freq` Hz
pub fn generate_square_wave(freq: usize, num_samples: usize) -> Vec<u8> {
    let mut samples = Vec::with_capacity(num_samples);
    append_square_wave(&mut samples, freq, num_samples);
    samples
}
