//! WAV container for 8-bit mono PCM
//!
//! Written through `hound`: 44 byte header (`fmt ` chunk of 16 bytes, then
//! `data`), followed by the unsigned samples.

use std::io::{Cursor, Seek, Write};

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{Result, TapeError};
use crate::{SAMPLE_RATE, WAV_HEADER_SIZE};

pub fn wav_spec() -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 8,
        sample_format: SampleFormat::Int,
    }
}

/// The RIFF size field holds `samples + 36`, which must fit in 32 bits
fn check_sample_count(sample_count: usize) -> Result<()> {
    u32::try_from(sample_count)
        .ok()
        .and_then(|count| count.checked_add(WAV_HEADER_SIZE as u32 - 8))
        .map(|_| ())
        .ok_or(TapeError::PayloadTooLarge {
            samples: sample_count,
        })
}

/// Write header and samples to `writer`
pub fn write_wav<W: Write + Seek>(writer: &mut W, samples: &[u8]) -> Result<()> {
    check_sample_count(samples.len())?;

    let mut wav = WavWriter::new(&mut *writer, wav_spec())?;
    for &sample in samples {
        // hound stores 8-bit samples as signed and offsets them by 128 on write
        wav.write_sample((sample ^ 0x80) as i8)?;
    }
    wav.finalize()?;

    writer.flush()?;
    Ok(())
}

/// Build the complete WAV file in memory
pub fn wav_bytes(samples: &[u8]) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::with_capacity(WAV_HEADER_SIZE + samples.len()));
    write_wav(&mut cursor, samples)?;
    Ok(cursor.into_inner())
}
