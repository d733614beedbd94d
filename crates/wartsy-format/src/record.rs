use crate::addr::AddrTable;
use crate::error::{Error, Result};
use crate::flags::{self, FieldDef};
use crate::ping::{PING_FIELDS, PING_REPLY_FIELDS};
use crate::trace::{TRACE_FIELDS, TRACE_HOP_FIELDS};
use crate::types::ObjectType;
use crate::value::{Attributes, Value};
use crate::wire;
use tracing::instrument;

/// The kind of a top level record.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RecordKind {
    /// A ping measurement with ping replies.
    Ping,
    /// A traceroute measurement with trace hops.
    Trace,
}

impl RecordKind {
    /// The field list of the top level record.
    #[must_use]
    pub const fn fields(self) -> &'static [FieldDef] {
        match self {
            Self::Ping => PING_FIELDS,
            Self::Trace => TRACE_FIELDS,
        }
    }

    /// The field list of the reply sub-record.
    #[must_use]
    pub const fn reply_fields(self) -> &'static [FieldDef] {
        match self {
            Self::Ping => PING_REPLY_FIELDS,
            Self::Trace => TRACE_HOP_FIELDS,
        }
    }

    /// The object type emitted in the container header.
    #[must_use]
    pub const fn object_type(self) -> ObjectType {
        match self {
            Self::Ping => ObjectType::Ping,
            Self::Trace => ObjectType::Trace,
        }
    }
}

/// A single top level measurement record.
///
/// A record is populated by [`merge`](Self::merge)-ing attribute maps and
/// [`add_reply`](Self::add_reply)-ing reply sub-records, then serialized
/// with [`finalize`](Self::finalize). The record owns the address table its
/// own fields and all of its replies share, so an address seen twice
/// anywhere within the record is encoded as a back-reference.
///
/// Attributes are validated as they arrive; a value rejected by its field's
/// encoder never leaves partial state behind and `finalize` on a fully
/// validated record cannot fail a field check.
///
/// Construct a fresh record per measurement, or reuse one instance via
/// [`reset`](Self::reset): resetting discards the attributes, replies and
/// address table, returning the record to its empty state. A writer resets
/// the record for you after writing it.
#[derive(Debug, Clone)]
pub struct Record {
    kind: RecordKind,
    attrs: Attributes,
    addrs: AddrTable,
    replies: Vec<Attributes>,
}

impl Record {
    /// Create an empty record of the given kind.
    #[must_use]
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            attrs: Attributes::new(),
            addrs: AddrTable::new(),
            replies: Vec::new(),
        }
    }

    /// Create an empty ping record.
    #[must_use]
    pub fn ping() -> Self {
        Self::new(RecordKind::Ping)
    }

    /// Create an empty trace record.
    #[must_use]
    pub fn trace() -> Self {
        Self::new(RecordKind::Trace)
    }

    /// The kind of this record.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The object type emitted in the container header.
    #[must_use]
    pub const fn object_type(&self) -> ObjectType {
        self.kind.object_type()
    }

    /// Whether the record holds no attributes and no replies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.replies.is_empty()
    }

    /// The number of replies appended so far.
    #[must_use]
    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }

    /// The address table of the most recent [`finalize`](Self::finalize).
    #[must_use]
    pub const fn addr_table(&self) -> &AddrTable {
        &self.addrs
    }

    /// Fold `attrs` into the record's own attributes.
    ///
    /// Merging is idempotent over the accumulated set: merging disjoint
    /// subsets sequentially serializes identically to one merge of their
    /// union, and a repeated key takes the latest value.
    ///
    /// Fails without changing the record if any attribute names an unknown
    /// or reserved field or carries a value its field rejects.
    #[instrument(skip(self, attrs), level = "trace")]
    pub fn merge(
        &mut self,
        attrs: impl IntoIterator<Item = (&'static str, Value)>,
    ) -> Result<()> {
        let validated = Self::validate(self.kind.fields(), attrs)?;
        self.attrs.extend(validated);
        Ok(())
    }

    /// Append one reply sub-record.
    ///
    /// The reply is validated against the reply field list of this record's
    /// kind (ping replies for a ping, hops for a trace) and shares the
    /// record's address table when serialized.
    #[instrument(skip(self, attrs), level = "trace")]
    pub fn add_reply(
        &mut self,
        attrs: impl IntoIterator<Item = (&'static str, Value)>,
    ) -> Result<()> {
        if self.replies.len() == usize::from(u16::MAX) {
            return Err(Error::TooManyReplies(self.replies.len() + 1));
        }
        let validated = Self::validate(self.kind.reply_fields(), attrs)?;
        self.replies.push(validated);
        Ok(())
    }

    /// Serialize the record body.
    ///
    /// Emits the record's own flag section, the 16 bit reply count and each
    /// reply's flag section in append order; a trace body ends with the 16
    /// bit zero hop-list terminator, which is always present and distinct
    /// from the count. A record with no replies emits count 0 and no reply
    /// bytes.
    ///
    /// Address ids are assigned in first-appearance order over the full
    /// body, so the table is rebuilt on every call and `finalize` may be
    /// repeated.
    #[instrument(skip(self), level = "trace")]
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        self.addrs.clear();
        let mut buf = Vec::new();
        flags::serialize(self.kind.fields(), &self.attrs, &mut self.addrs, &mut buf)?;
        let count = u16::try_from(self.replies.len())
            .map_err(|_| Error::TooManyReplies(self.replies.len()))?;
        wire::put_u16(&mut buf, count);
        for reply in &self.replies {
            flags::serialize(self.kind.reply_fields(), reply, &mut self.addrs, &mut buf)?;
        }
        if self.kind == RecordKind::Trace {
            wire::put_u16(&mut buf, 0);
        }
        Ok(buf)
    }

    /// Return the record to its empty state for reuse, discarding the
    /// attributes, replies and address table.
    #[instrument(skip(self), level = "trace")]
    pub fn reset(&mut self) {
        self.attrs.clear();
        self.replies.clear();
        self.addrs.clear();
    }

    fn validate(
        fields: &'static [FieldDef],
        attrs: impl IntoIterator<Item = (&'static str, Value)>,
    ) -> Result<Attributes> {
        let mut validated = Attributes::new();
        for (name, value) in attrs {
            let field = flags::find(fields, name)?;
            flags::validate(field, &value)?;
            validated.insert(name, value);
        }
        Ok(validated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_empty_ping() {
        let mut ping = Record::ping();
        assert!(ping.is_empty());
        let body = ping.finalize().unwrap();
        // 4 flag bytes, zero value length, zero reply count
        assert_eq!(hex!("80 80 80 00 00 00 00 00"), *body);
    }

    #[test]
    fn test_empty_trace_has_terminator() {
        let mut trace = Record::trace();
        let body = trace.finalize().unwrap();
        assert_eq!(hex!("80 80 80 00 00 00 00 00 00 00"), *body);
    }

    #[test]
    fn test_merge_unknown_field() {
        let mut ping = Record::ping();
        let err = ping
            .merge([("gaplimit", Value::from(1_u8))])
            .unwrap_err();
        assert_eq!(Error::UnknownField(String::from("gaplimit")), err);
        assert!(ping.is_empty());
    }

    #[test]
    fn test_merge_reserved_field() {
        let mut trace = Record::trace();
        let err = trace.merge([("srcipid", Value::from(1_u8))]).unwrap_err();
        assert_eq!(Error::ReservedField("srcipid"), err);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_merge_out_of_range() {
        let mut trace = Record::trace();
        let err = trace
            .merge([("firsttl", Value::from(300_u16))])
            .unwrap_err();
        assert_eq!(Error::ValueOutOfRange("firsttl", 300), err);
    }

    #[test]
    fn test_merge_is_idempotent_over_union() {
        let mut split = Record::trace();
        split.merge([("listid", Value::from(1_u32))]).unwrap();
        split.merge([("tracetyp", Value::from(5_u8))]).unwrap();
        split.merge([("listid", Value::from(2_u32))]).unwrap();
        let mut joined = Record::trace();
        joined
            .merge([
                ("listid", Value::from(2_u32)),
                ("tracetyp", Value::from(5_u8)),
            ])
            .unwrap();
        assert_eq!(split.finalize().unwrap(), joined.finalize().unwrap());
    }

    #[test]
    fn test_merge_after_reply() {
        let mut eager = Record::trace();
        eager.merge([("listid", Value::from(1_u32))]).unwrap();
        eager.merge([("srcaddr", Value::from("192.0.2.1"))]).unwrap();
        eager.add_reply([("addr", Value::from("10.0.0.1"))]).unwrap();

        let mut late = Record::trace();
        late.merge([("listid", Value::from(1_u32))]).unwrap();
        late.add_reply([("addr", Value::from("10.0.0.1"))]).unwrap();
        late.merge([("srcaddr", Value::from("192.0.2.1"))]).unwrap();

        assert_eq!(eager.finalize().unwrap(), late.finalize().unwrap());
    }

    #[test]
    fn test_reply_shares_parent_address() {
        let mut trace = Record::trace();
        trace
            .merge([("dstaddr", Value::from("198.51.100.1"))])
            .unwrap();
        trace
            .add_reply([("addr", Value::from("198.51.100.1"))])
            .unwrap();
        let body = trace.finalize().unwrap();
        // dstaddr literal takes id 0; the hop reply back-references it
        assert_eq!(Some(0), trace.addr_table().lookup("198.51.100.1"));
        let backref = hex!("00 00 00 00 00");
        assert_eq!(backref, body[body.len() - 7..body.len() - 2]);
    }

    #[test]
    fn test_trace_end_to_end() {
        let mut trace = Record::trace();
        trace
            .merge([
                ("listid", Value::from(1_u32)),
                ("srcaddr", Value::from("192.0.2.1")),
                ("dstaddr", Value::from("198.51.100.1")),
                ("tracetyp", Value::from(5_u8)),
            ])
            .unwrap();
        for (ttl, hop) in [(1_u8, "10.0.0.1"), (2, "10.0.0.1"), (3, "10.0.0.3")] {
            trace
                .add_reply([
                    ("probettl", Value::from(ttl)),
                    ("addr", Value::from(hop)),
                ])
                .unwrap();
        }
        let body = trace.finalize().unwrap();
        let expected = hex!(
            // record flags, value length, listid, tracetyp, srcaddr, dstaddr
            "81 88 80 30 00 11"
            "00 00 00 01"
            "05"
            "04 01 c0 00 02 01"
            "04 01 c6 33 64 01"
            // reply count
            "00 03"
            // hop 1: literal 10.0.0.1, id 2
            "82 80 08 00 07 01 04 01 0a 00 00 01"
            // hop 2: back-reference to id 2
            "82 80 08 00 06 02 00 00 00 00 02"
            // hop 3: literal 10.0.0.3, id 3
            "82 80 08 00 07 03 04 01 0a 00 00 03"
            // hop list terminator
            "00 00"
        );
        assert_eq!(expected, *body);
        assert_eq!(3, trace.reply_count());
        assert_eq!(Some(2), trace.addr_table().lookup("10.0.0.1"));
    }

    #[test]
    fn test_finalize_is_repeatable() {
        let mut trace = Record::trace();
        trace
            .merge([("srcaddr", Value::from("192.0.2.1"))])
            .unwrap();
        trace
            .add_reply([("addr", Value::from("192.0.2.1"))])
            .unwrap();
        let first = trace.finalize().unwrap();
        let second = trace.finalize().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_for_reuse() {
        let mut ping = Record::ping();
        ping.merge([("srcaddr", Value::from("192.0.2.1"))]).unwrap();
        ping.add_reply([("rtt", Value::from(1000_u32))]).unwrap();
        ping.finalize().unwrap();
        ping.reset();
        assert!(ping.is_empty());
        assert_eq!(0, ping.reply_count());
        assert!(ping.addr_table().is_empty());
        let body = ping.finalize().unwrap();
        assert_eq!(hex!("80 80 80 00 00 00 00 00"), *body);
    }

    #[test]
    fn test_ping_reply_wrong_kind() {
        let mut ping = Record::ping();
        let err = ping
            .add_reply([("rtt", Value::Addr(String::from("::1")))])
            .unwrap_err();
        assert_eq!(Error::WrongKind("rtt", "u32", "address"), err);
        assert_eq!(0, ping.reply_count());
    }
}
