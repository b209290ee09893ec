use clap::Parser;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};
use tapewave_core::{write_wav, FormatMode, TapeEncoder, TapeError, SAMPLE_RATE};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create {}: {}", .path.display(), .source)]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: TapeError },
}

#[derive(Parser)]
#[command(name = "tapewave")]
#[command(about = "Convert a cassette tape image to a 1200 baud FSK WAV file")]
struct Cli {
    /// Input tape image
    #[arg(value_name = "INPUT.P6")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT.WAV")]
    output: PathBuf,

    /// Send the image as a single binary block, even if it looks like BASIC
    #[arg(short, long)]
    binary: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print the format line
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = encode_command(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn encode_command(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(&cli.input).map_err(|source| CliError::Read {
        path: cli.input.clone(),
        source,
    })?;
    if !cli.quiet {
        println!("Read {} bytes from {}", data.len(), cli.input.display());
    }

    let mode = if cli.binary {
        FormatMode::Binary
    } else {
        FormatMode::Auto
    };
    let encoder = TapeEncoder::with_mode(mode);
    let expected = encoder.encoded_len(&data);
    if !cli.quiet {
        println!(
            "Encoding to {} samples ({:.2} s)",
            expected,
            expected as f64 / SAMPLE_RATE as f64
        );
    }

    let encoded = encoder.encode(&data);
    eprintln!("{}", encoded.format.describe());
    info!(
        "Encoded to {} samples ({:.2} s at {} Hz)",
        encoded.samples.len(),
        encoded.duration_secs(),
        SAMPLE_RATE
    );

    write_output(&cli.output, &encoded.samples)?;

    if !cli.quiet {
        println!(
            "Wrote {} samples to {}",
            encoded.samples.len(),
            cli.output.display()
        );
    }
    Ok(())
}

fn write_output(path: &Path, samples: &[u8]) -> Result<(), CliError> {
    let file = File::create(path).map_err(|source| CliError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_output_to(path, BufWriter::new(file), samples)
}

/// Write the WAV to `writer`, which is backed by `path`.
/// On failure the incomplete file at `path` is removed.
fn write_output_to<W: Write + Seek>(
    path: &Path,
    mut writer: W,
    samples: &[u8],
) -> Result<(), CliError> {
    let result = write_wav(&mut writer, samples);
    drop(writer);

    result.map_err(|source| {
        remove_incomplete(path);
        CliError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Only regular files are removed; devices and pipes are left alone
fn remove_incomplete(path: &Path) {
    let is_file = std::fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_file())
        .unwrap_or(false);
    if is_file && std::fs::remove_file(path).is_ok() {
        debug!("Removed incomplete {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::SeekFrom;
    use tempfile::TempDir;

    /// Accepts `remaining` bytes, then fails every write
    struct FailingWriter {
        remaining: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.remaining == 0 {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
            }
            let n = buf.len().min(self.remaining);
            self.remaining -= n;
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Seek for FailingWriter {
        fn seek(&mut self, _: SeekFrom) -> std::io::Result<u64> {
            Ok(0)
        }
    }

    #[test]
    fn test_write_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.wav");
        write_output(&path, &[0xFF, 0x00]).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 46);
        assert_eq!(&bytes[44..], &[0xFF, 0x00]);
    }

    #[test]
    fn test_failed_write_removes_incomplete_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.wav");
        std::fs::write(&path, b"RIFF").unwrap();

        // Header goes through, the samples do not
        let writer = FailingWriter { remaining: 44 };
        match write_output_to(&path, writer, &[0xFF; 64]) {
            Err(CliError::Write { .. }) => {}
            other => panic!("Expected Write error, got {:?}", other),
        }
        assert!(!path.exists(), "Incomplete output should be removed");
    }

    #[test]
    fn test_failed_write_keeps_non_regular_path() {
        let dir = TempDir::new().unwrap();
        let writer = FailingWriter { remaining: 0 };

        let result = write_output_to(dir.path(), writer, &[0xFF; 8]);
        assert!(result.is_err());
        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_write_error_message() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.wav");
        let writer = FailingWriter { remaining: 0 };
        let err = write_output_to(&path, writer, &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Failed to write {}: I/O error: disk full", path.display())
        );
    }
}
