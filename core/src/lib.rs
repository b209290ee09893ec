//! Cassette tape image to audio encoder
//!
//! Turns a raw tape image into the 1200 baud FSK signal a vintage 8-bit
//! microcomputer expects from its cassette interface, as unsigned 8-bit mono PCM.

pub mod error;
pub mod tone;
pub mod uart;
pub mod block;
pub mod format;
pub mod encoder;
pub mod wav;

pub use block::{encode_block, Block, HeaderKind};
pub use encoder::{Encoded, FormatMode, TapeEncoder};
pub use error::{Result, TapeError};
pub use format::{classify, TapeFormat};
pub use tone::generate_square_wave;
pub use uart::{encode_bit, encode_byte};
pub use wav::{wav_bytes, wav_spec, write_wav};

// Timing configuration
pub const SAMPLE_RATE: usize = 19200;
pub const BAUD_RATE: usize = 1200;
pub const BIT_SAMPLES: usize = SAMPLE_RATE / BAUD_RATE; // 16

// Tone frequencies (low tone = 0, high tone = 1)
pub const BIT0_FREQ: usize = BAUD_RATE;
pub const BIT1_FREQ: usize = BAUD_RATE * 2;

// UART framing
pub const DATA_BITS: usize = 8;
pub const STOP_BITS: usize = 3;
pub const FRAME_BITS: usize = 1 + DATA_BITS + STOP_BITS; // 12
pub const FRAME_SAMPLES: usize = FRAME_BITS * BIT_SAMPLES; // 192

// Carrier preambles
pub const LONG_HEADER_MS: usize = 2000;
pub const SHORT_HEADER_MS: usize = 500;

// BASIC program header: 10 sync bytes + 6 byte name
pub const BASIC_HEADER_SIZE: usize = 16;
pub const BASIC_SYNC_BYTE: u8 = 0xD3;
pub const BASIC_NAME_LEN: usize = 6;
pub const BASIC_SYNC_LEN: usize = BASIC_HEADER_SIZE - BASIC_NAME_LEN; // 10

// PCM levels
pub const SAMPLE_HIGH: u8 = 0xFF;
pub const SAMPLE_LOW: u8 = 0x00;

pub const WAV_HEADER_SIZE: usize = 44;

const _: () = assert!(
    SAMPLE_RATE % (BAUD_RATE * 2) == 0,
    "SAMPLE_RATE must be a multiple of BAUD_RATE * 2"
);
