//! `TRACE` record field lists.
//!
//! Attribute keys accepted for a trace record: `listid`, `cycleid`,
//! `timeval`, `stopreas`, `stopdata`, `traceflg`, `attempts`, `hoplimit`,
//! `tracetyp`, `probesiz`, `srcport`, `dstport`, `firsttl`, `iptos`,
//! `timeout`, `loops`, `probehop`, `gaplimit`, `gaprch`, `loopfnd`,
//! `probesent`, `minwait`, `confid`, `srcaddr`, `dstaddr`, `usrid`; and for
//! each hop: `probettl`, `replyttl`, `hopflags`, `probeid`, `rtt`, `icmp`,
//! `probesize`, `replysize`, `ipid`, `tos`, `mtu`, `qlen`, `qttl`,
//! `tcpflags`, `qtos`, `addr`.
//!
//! The `icmp` hop field carries the ICMP type in the high byte and code in
//! the low byte.

use crate::flags::FieldDef;

/// Fields of a top level trace record, in wire order.
pub const TRACE_FIELDS: &[FieldDef] = &[
    FieldDef::u32("listid"),
    FieldDef::u32("cycleid"),
    FieldDef::reserved("srcipid"),
    FieldDef::reserved("dstipid"),
    FieldDef::timestamp("timeval"),
    FieldDef::u8("stopreas"),
    FieldDef::u8("stopdata"),
    FieldDef::u8("traceflg"),
    FieldDef::u8("attempts"),
    FieldDef::u8("hoplimit"),
    FieldDef::u8("tracetyp"),
    FieldDef::u16("probesiz"),
    FieldDef::u16("srcport"),
    FieldDef::u16("dstport"),
    FieldDef::u8("firsttl"),
    FieldDef::u8("iptos"),
    FieldDef::u8("timeout"),
    FieldDef::u8("loops"),
    FieldDef::u16("probehop"),
    FieldDef::u8("gaplimit"),
    FieldDef::u8("gaprch"),
    FieldDef::u8("loopfnd"),
    FieldDef::u16("probesent"),
    FieldDef::u8("minwait"),
    FieldDef::u8("confid"),
    FieldDef::addr("srcaddr"),
    FieldDef::addr("dstaddr"),
    FieldDef::u32("usrid"),
];

/// Fields of a single trace hop, in wire order.
pub const TRACE_HOP_FIELDS: &[FieldDef] = &[
    FieldDef::reserved("addrid"),
    FieldDef::u8("probettl"),
    FieldDef::u8("replyttl"),
    FieldDef::u8("hopflags"),
    FieldDef::u8("probeid"),
    FieldDef::u32("rtt"),
    FieldDef::u16("icmp"),
    FieldDef::u16("probesize"),
    FieldDef::u16("replysize"),
    FieldDef::u16("ipid"),
    FieldDef::u8("tos"),
    FieldDef::u16("mtu"),
    FieldDef::u16("qlen"),
    FieldDef::u8("qttl"),
    FieldDef::u8("tcpflags"),
    FieldDef::u8("qtos"),
    FieldDef::reserved("icmpext"),
    FieldDef::addr("addr"),
];
