//! Framed warts capture file writing.
//!
//! This crate frames the record bodies built by `wartsy-format` into a
//! warts capture stream: an 8 byte header (magic, type code, body length)
//! per object, auxiliary list/cycle/cycle-stop bookkeeping records, and an
//! output sink that is a plain or bzip2 compressed file with a
//! create-or-append policy that never silently clobbers an existing
//! capture.
//!
//! # Example
//!
//! The following example writes a one-trace capture into memory; the
//! [`Builder`] opens file destinations the same way:
//!
//! ```rust
//! # fn main() -> anyhow::Result<()> {
//! use wartsy_format::{Record, Value};
//! use wartsy_writer::Writer;
//!
//! let mut writer = Writer::new(Vec::new(), false);
//! writer.write_list(1, 1, "yarrp")?;
//! writer.write_cycle(1, 1, 1, 1_500_000_000)?;
//!
//! let mut trace = Record::trace();
//! trace.merge([
//!     ("listid", Value::from(1_u32)),
//!     ("srcaddr", Value::from("192.0.2.1")),
//!     ("dstaddr", Value::from("198.51.100.1")),
//! ])?;
//! trace.add_reply([
//!     ("probettl", Value::from(1_u8)),
//!     ("addr", Value::from("10.0.0.1")),
//! ])?;
//! writer.write_record(&mut trace)?;
//!
//! writer.write_cycle_stop(1, 1_500_000_600)?;
//! let capture = writer.into_inner();
//! assert_eq!([0x12, 0x05], capture[..2]);
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod sink;
mod writer;

/// Writer errors.
pub mod error;

pub use builder::Builder;
pub use config::{defaults, Compression};
pub use error::{Error, Result};
pub use sink::FileSink;
pub use writer::Writer;
