use thiserror::Error;

#[derive(Debug, Error)]
pub enum TapeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(hound::Error),

    #[error("Payload of {samples} samples does not fit in a WAV container")]
    PayloadTooLarge { samples: usize },
}

impl From<hound::Error> for TapeError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) => TapeError::Io(e),
            other => TapeError::Wav(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, TapeError>;
