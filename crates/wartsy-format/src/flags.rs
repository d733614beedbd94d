//! The flag-record engine.
//!
//! A flag record is the sparse encoding used for the body of ping and trace
//! objects: a presence bitmap with one bit per declared field, a 16 bit
//! value-buffer length and the encoded values of the present fields in
//! declaration order. Which fields exist, and how each is encoded, is driven
//! entirely by a declarative field list.

use crate::addr::{self, AddrTable};
use crate::error::{Error, Result};
use crate::value::{Attributes, Value};
use crate::wire;

/// The encoder kind of a single field.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FieldKind {
    /// 8 bit unsigned integer.
    U8,
    /// 16 bit unsigned integer, big-endian.
    U16,
    /// 32 bit unsigned integer, big-endian.
    U32,
    /// Split seconds/microseconds timestamp.
    Timestamp,
    /// IPv4 or IPv6 address, literal or back-referenced.
    Addr,
    /// Raw bytes, emitted as-is.
    Bytes,
    /// Declared for wire compatibility but carried without an encoder;
    /// setting a reserved field is an error.
    Reserved,
}

impl FieldKind {
    /// Name of the kind, for error reporting.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::Timestamp => "timestamp",
            Self::Addr => "address",
            Self::Bytes => "bytes",
            Self::Reserved => "reserved",
        }
    }
}

/// A single named field within a record type's field list.
///
/// The position of a `FieldDef` within its list defines both its bit in the
/// presence bitmap and its on-wire value order; entries must never be
/// reordered or removed without breaking compatibility with every existing
/// reader.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FieldDef {
    name: &'static str,
    kind: FieldKind,
}

impl FieldDef {
    /// Declare a field with an explicit kind.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    /// Declare an 8 bit integer field.
    #[must_use]
    pub const fn u8(name: &'static str) -> Self {
        Self::new(name, FieldKind::U8)
    }

    /// Declare a 16 bit integer field.
    #[must_use]
    pub const fn u16(name: &'static str) -> Self {
        Self::new(name, FieldKind::U16)
    }

    /// Declare a 32 bit integer field.
    #[must_use]
    pub const fn u32(name: &'static str) -> Self {
        Self::new(name, FieldKind::U32)
    }

    /// Declare a timestamp field.
    #[must_use]
    pub const fn timestamp(name: &'static str) -> Self {
        Self::new(name, FieldKind::Timestamp)
    }

    /// Declare an address field.
    #[must_use]
    pub const fn addr(name: &'static str) -> Self {
        Self::new(name, FieldKind::Addr)
    }

    /// Declare a raw bytes field.
    #[must_use]
    pub const fn bytes(name: &'static str) -> Self {
        Self::new(name, FieldKind::Bytes)
    }

    /// Declare a reserved field.
    #[must_use]
    pub const fn reserved(name: &'static str) -> Self {
        Self::new(name, FieldKind::Reserved)
    }

    /// The field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The field's encoder kind.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }
}

/// Find the field named `name` within `fields`.
pub(crate) fn find(fields: &'static [FieldDef], name: &str) -> Result<&'static FieldDef> {
    fields
        .iter()
        .find(|field| field.name == name)
        .ok_or_else(|| Error::UnknownField(String::from(name)))
}

/// Check `value` against the declared kind of `field`.
///
/// This performs every check serialization will: kind match, fixed-width
/// range and address syntax. A record whose attributes all validated cannot
/// fail to serialize.
pub(crate) fn validate(field: &FieldDef, value: &Value) -> Result<()> {
    match (field.kind, value) {
        (FieldKind::Reserved, _) => Err(Error::ReservedField(field.name)),
        (FieldKind::U8, Value::Uint(val)) => {
            u8::try_from(*val)
                .map(|_| ())
                .map_err(|_| Error::ValueOutOfRange(field.name, *val))
        }
        (FieldKind::U16, Value::Uint(val)) => {
            u16::try_from(*val)
                .map(|_| ())
                .map_err(|_| Error::ValueOutOfRange(field.name, *val))
        }
        (FieldKind::U32, Value::Uint(val)) => {
            u32::try_from(*val)
                .map(|_| ())
                .map_err(|_| Error::ValueOutOfRange(field.name, *val))
        }
        (FieldKind::Timestamp, Value::Timestamp(_))
        | (FieldKind::Bytes, Value::Bytes(_)) => Ok(()),
        (FieldKind::Addr, Value::Addr(val)) => addr::classify(val).map(|_| ()),
        _ => Err(Error::WrongKind(
            field.name,
            field.kind.name(),
            value.kind_name(),
        )),
    }
}

/// Encode one field value, appending to `buf`.
fn encode_value(
    field: &FieldDef,
    value: &Value,
    addrs: &mut AddrTable,
    buf: &mut Vec<u8>,
) -> Result<()> {
    match (field.kind, value) {
        (FieldKind::Reserved, _) => Err(Error::ReservedField(field.name)),
        (FieldKind::U8, Value::Uint(val)) => {
            let val = u8::try_from(*val).map_err(|_| Error::ValueOutOfRange(field.name, *val))?;
            wire::put_u8(buf, val);
            Ok(())
        }
        (FieldKind::U16, Value::Uint(val)) => {
            let val = u16::try_from(*val).map_err(|_| Error::ValueOutOfRange(field.name, *val))?;
            wire::put_u16(buf, val);
            Ok(())
        }
        (FieldKind::U32, Value::Uint(val)) => {
            let val = u32::try_from(*val).map_err(|_| Error::ValueOutOfRange(field.name, *val))?;
            wire::put_u32(buf, val);
            Ok(())
        }
        (FieldKind::Timestamp, Value::Timestamp(val)) => {
            wire::put_timestamp(buf, *val);
            Ok(())
        }
        (FieldKind::Addr, Value::Addr(val)) => addrs.encode(val, buf),
        (FieldKind::Bytes, Value::Bytes(val)) => {
            buf.extend_from_slice(val);
            Ok(())
        }
        _ => Err(Error::WrongKind(
            field.name,
            field.kind.name(),
            value.kind_name(),
        )),
    }
}

/// Serialize one flag section for the given field list and attributes.
///
/// Emits the presence bitmap (7 payload bits per byte, continuation bit 0x80
/// on every byte but the last), the 16 bit value-buffer length and the
/// encoded values of the present fields, in field list order. Address fields
/// route through `addrs` so repeated addresses become back-references.
///
/// A value rejected by its encoder aborts the whole section; nothing is
/// appended to `buf` on error.
pub fn serialize(
    fields: &'static [FieldDef],
    attrs: &Attributes,
    addrs: &mut AddrTable,
    buf: &mut Vec<u8>,
) -> Result<()> {
    let mut flag_bytes = vec![0_u8; fields.len().div_ceil(7)];
    if let Some((_, rest)) = flag_bytes.split_last_mut() {
        for byte in rest {
            *byte = 0x80;
        }
    }
    let mut values = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        let Some(value) = attrs.get(field.name) else {
            continue;
        };
        flag_bytes[i / 7] |= 1 << (i % 7);
        encode_value(field, value, addrs, &mut values)?;
    }
    let len = u16::try_from(values.len()).map_err(|_| Error::SectionTooLarge(values.len()))?;
    buf.extend_from_slice(&flag_bytes);
    wire::put_u16(buf, len);
    buf.extend_from_slice(&values);
    Ok(())
}
