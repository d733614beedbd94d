use crate::error::{Error, Result};
use crate::sink::FileSink;
use std::io::Write;
use tracing::instrument;
use wartsy_format::{wire, ObjectType, Record, MAGIC};

/// Writes framed warts objects to an output sink.
///
/// Every object is framed as a fixed 8 byte header — 16 bit magic, 16 bit
/// type code, 32 bit body length, big-endian — followed by the body. The
/// body is fully serialized before the header is emitted, so a frame either
/// reaches the sink whole or not at all and an encoding failure never
/// corrupts previously written frames.
///
/// The auxiliary [`write_list`](Self::write_list),
/// [`write_cycle`](Self::write_cycle) and
/// [`write_cycle_stop`](Self::write_cycle_stop) records are suppressed when
/// appending, so the shared list and cycle context is not duplicated when
/// several runs extend one capture.
#[derive(Debug)]
pub struct Writer<W> {
    sink: W,
    append: bool,
}

impl<W: Write> Writer<W> {
    /// Create a writer over an open sink.
    ///
    /// `append` marks the sink as a continuation of an existing capture.
    /// To write files, use [`Builder`](crate::Builder) instead.
    pub const fn new(sink: W, append: bool) -> Self {
        Self { sink, append }
    }

    /// Whether this writer is appending to an existing capture.
    #[must_use]
    pub const fn is_append(&self) -> bool {
        self.append
    }

    /// Write a list record naming the measurement list.
    ///
    /// Suppressed when appending.
    #[instrument(skip(self), level = "trace")]
    pub fn write_list(&mut self, writer_list_id: u32, list_id: u32, name: &str) -> Result<()> {
        if self.append {
            return Ok(());
        }
        let mut body = Vec::with_capacity(name.len() + 10);
        wire::put_u32(&mut body, writer_list_id);
        wire::put_u32(&mut body, list_id);
        body.extend_from_slice(name.as_bytes());
        body.push(0);
        body.push(0); // no flags
        self.write_frame(ObjectType::List, &body)
    }

    /// Write a cycle record opening a measurement cycle.
    ///
    /// Suppressed when appending.
    #[instrument(skip(self), level = "trace")]
    pub fn write_cycle(
        &mut self,
        writer_cycle_id: u32,
        list_id: u32,
        cycle_id: u32,
        start_time: u32,
    ) -> Result<()> {
        if self.append {
            return Ok(());
        }
        let mut body = Vec::with_capacity(17);
        wire::put_u32(&mut body, writer_cycle_id);
        wire::put_u32(&mut body, list_id);
        wire::put_u32(&mut body, cycle_id);
        wire::put_u32(&mut body, start_time);
        body.push(0); // no flags
        self.write_frame(ObjectType::Cycle, &body)
    }

    /// Write a cycle-stop record closing a measurement cycle.
    ///
    /// Suppressed when appending.
    #[instrument(skip(self), level = "trace")]
    pub fn write_cycle_stop(&mut self, cycle_id: u32, stop_time: u32) -> Result<()> {
        if self.append {
            return Ok(());
        }
        let mut body = Vec::with_capacity(9);
        wire::put_u32(&mut body, cycle_id);
        wire::put_u32(&mut body, stop_time);
        body.push(0); // no flags
        self.write_frame(ObjectType::CycleStop, &body)
    }

    /// Finalize `record`, write it as one framed object and reset it for
    /// reuse on the next measurement.
    ///
    /// An encoding failure aborts this record only; nothing reaches the
    /// sink and the record is left unreset for inspection.
    #[instrument(skip(self, record), level = "trace")]
    pub fn write_record(&mut self, record: &mut Record) -> Result<()> {
        let body = record.finalize()?;
        self.write_frame(record.object_type(), &body)?;
        record.reset();
        Ok(())
    }

    /// Write pre-framed bytes as-is, for copying objects between captures.
    pub fn write_blob(&mut self, blob: &[u8]) -> Result<()> {
        self.sink.write_all(blob)?;
        Ok(())
    }

    /// Flush buffered data to the sink.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Consume the writer, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_frame(&mut self, typ: ObjectType, body: &[u8]) -> Result<()> {
        let len = u32::try_from(body.len()).map_err(|_| Error::FrameTooLarge(body.len()))?;
        let mut head = Vec::with_capacity(8);
        wire::put_u16(&mut head, MAGIC);
        wire::put_u16(&mut head, typ.code());
        wire::put_u32(&mut head, len);
        self.sink.write_all(&head)?;
        self.sink.write_all(body)?;
        Ok(())
    }
}

impl Writer<FileSink> {
    /// Flush and close the destination, ending any compression stream.
    pub fn finish(self) -> Result<()> {
        self.sink.finish()?;
        Ok(())
    }
}
