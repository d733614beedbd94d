//! Warts capture wire format building.
//!
//! This crate builds the bodies of warts objects: the flag-record encoding
//! used by `PING` and `TRACE` measurement records, the per-record address
//! table that deduplicates repeated addresses into back-references, and the
//! object type codes shared with the container framing in `wartsy-writer`.
//!
//! # Endianness
//!
//! All multi-byte quantities are held in network byte order (big-endian);
//! values are accepted in host byte order and converted as they are
//! encoded.
//!
//! # Example
//!
//! The following example builds a trace record with two hops and serializes
//! its body. The second hop reuses the first hop's address, so it is
//! encoded as a 5 byte back-reference rather than a second literal:
//!
//! ```rust
//! # fn main() -> anyhow::Result<()> {
//! use wartsy_format::{Record, Value};
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
//! trace.add_reply([
//!     ("probettl", Value::from(2_u8)),
//!     ("addr", Value::from("10.0.0.1")),
//! ])?;
//! let body = trace.finalize()?;
//! assert_eq!(2, trace.reply_count());
//! assert_eq!(Some(2), trace.addr_table().lookup("10.0.0.1"));
//! # Ok(())
//! # }
//! ```

mod addr;
mod ping;
mod record;
mod trace;
mod types;
mod value;

/// Format errors.
pub mod error;

pub mod flags;
pub mod wire;

pub use addr::AddrTable;
pub use error::{Error, Result};
pub use flags::{FieldDef, FieldKind};
pub use ping::{PING_FIELDS, PING_REPLY_FIELDS};
pub use record::{Record, RecordKind};
pub use trace::{TRACE_FIELDS, TRACE_HOP_FIELDS};
pub use types::{HopFlags, ObjectType, MAGIC};
pub use value::{Attributes, Value};
