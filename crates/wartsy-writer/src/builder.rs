use crate::config::{defaults, Compression};
use crate::error::Result;
use crate::sink::FileSink;
use crate::writer::Writer;
use std::path::{Path, PathBuf};

/// Build a [`Writer`] over a destination file.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> anyhow::Result<()> {
/// use wartsy_writer::Builder;
///
/// let mut writer = Builder::new("capture.warts.bz2")
///     .overwrite(false)
///     .build()?;
/// writer.write_list(1, 1, "yarrp")?;
/// writer.finish()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Builder {
    path: PathBuf,
    append: bool,
    overwrite: bool,
    compression: Compression,
}

impl Builder {
    /// Create a builder for the given destination path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            append: defaults::DEFAULT_APPEND,
            overwrite: defaults::DEFAULT_OVERWRITE,
            compression: defaults::DEFAULT_COMPRESSION,
        }
    }

    /// Append to the destination instead of creating it.
    ///
    /// Appending suppresses the auxiliary list, cycle and cycle-stop
    /// records so shared context is not duplicated across runs.
    #[must_use]
    pub const fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    /// Whether an existing destination may be overwritten.
    ///
    /// With `overwrite(false)`, an existing destination is never clobbered:
    /// the writer falls back to append mode instead.
    #[must_use]
    pub const fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Select the output compression policy.
    #[must_use]
    pub const fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Open the destination and build the writer.
    pub fn build(self) -> Result<Writer<FileSink>> {
        let mut append = self.append;
        if !self.overwrite && !append && self.path.exists() {
            tracing::debug!(path = %self.path.display(), "destination exists, appending");
            append = true;
        }
        tracing::debug!(
            path = %self.path.display(),
            append,
            compression = %self.compression,
            "opening capture"
        );
        let sink = FileSink::open(&self.path, append, self.compression)?;
        Ok(Writer::new(sink, append))
    }
}
