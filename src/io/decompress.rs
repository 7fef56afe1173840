//! Compression detection and decompression support.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Detected compression format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// No compression
    None,
    /// Gzip (.gz)
    Gzip,
}

impl Compression {
    /// Detect compression format from magic bytes.
    pub fn detect(data: &[u8]) -> Self {
        match data {
            // Gzip: 1f 8b
            [0x1f, 0x8b, ..] => Compression::Gzip,
            _ => Compression::None,
        }
    }

    /// Get the typical file extension for this compression format.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Compression::None => None,
            Compression::Gzip => Some("gz"),
        }
    }
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compression::None => write!(f, "none"),
            Compression::Gzip => write!(f, "gzip"),
        }
    }
}

/// Reader over a dataset file, decompressing when needed.
///
/// Enum dispatch keeps the CSV reader generic over one concrete type.
pub enum DatasetReader {
    /// Plain file
    Plain(BufReader<File>),
    /// Gzip-compressed file
    Gzip(BufReader<MultiGzDecoder<BufReader<File>>>),
}

impl DatasetReader {
    /// Compression format of the underlying file.
    pub fn compression(&self) -> Compression {
        match self {
            DatasetReader::Plain(_) => Compression::None,
            DatasetReader::Gzip(_) => Compression::Gzip,
        }
    }
}

impl Read for DatasetReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            DatasetReader::Plain(r) => r.read(buf),
            DatasetReader::Gzip(r) => r.read(buf),
        }
    }
}

impl BufRead for DatasetReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            DatasetReader::Plain(r) => r.fill_buf(),
            DatasetReader::Gzip(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            DatasetReader::Plain(r) => r.consume(amt),
            DatasetReader::Gzip(r) => r.consume(amt),
        }
    }
}

/// Open a dataset file, detecting compression from its magic bytes.
pub fn open_dataset(path: &Path) -> io::Result<DatasetReader> {
    let mut reader = BufReader::new(File::open(path)?);
    let compression = Compression::detect(reader.fill_buf()?);

    tracing::debug!("Opening {} (compression: {})", path.display(), compression);

    Ok(match compression {
        Compression::None => DatasetReader::Plain(reader),
        Compression::Gzip => DatasetReader::Gzip(BufReader::new(MultiGzDecoder::new(reader))),
    })
}
