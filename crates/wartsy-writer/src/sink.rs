use crate::config::Compression;
use bzip2::write::BzEncoder;
use std::fmt::{Debug, Formatter};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A warts output destination: a plain or bzip2 compressed file.
pub enum FileSink {
    /// An uncompressed, buffered file.
    Plain(BufWriter<File>),
    /// A bzip2 compressed file. Appending starts a fresh bzip2 stream;
    /// decoders read concatenated streams back to back.
    Bzip2(BzEncoder<BufWriter<File>>),
}

impl FileSink {
    /// Open the destination file.
    pub fn open(path: &Path, append: bool, compression: Compression) -> io::Result<Self> {
        let file = if append {
            OpenOptions::new().create(true).append(true).open(path)?
        } else {
            File::create(path)?
        };
        let writer = BufWriter::new(file);
        if compression.is_enabled_for(path) {
            Ok(Self::Bzip2(BzEncoder::new(
                writer,
                bzip2::Compression::best(),
            )))
        } else {
            Ok(Self::Plain(writer))
        }
    }

    /// Flush buffered data and, for a compressed sink, close the
    /// compression stream.
    pub fn finish(self) -> io::Result<()> {
        match self {
            Self::Plain(mut writer) => writer.flush(),
            Self::Bzip2(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(writer) => writer.write(buf),
            Self::Bzip2(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(writer) => writer.flush(),
            Self::Bzip2(encoder) => encoder.flush(),
        }
    }
}

impl Debug for FileSink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain(_) => write!(f, "Plain"),
            Self::Bzip2(_) => write!(f, "Bzip2"),
        }
    }
}
