//! `PING` record field lists.
//!
//! Attribute keys accepted for a ping record: `listid`, `cycleid`,
//! `timeval`, `stopreas`, `stopdata`, `datalen`, `data`, `pcount`, `size`,
//! `wait`, `ttl`, `rcount`, `psent`, `method`, `sport`, `dport`, `userid`,
//! `srcaddr`, `dstaddr`, `flags`, `tos`, `icmpsum`, `pmtu`, `timeout`,
//! `waitus`; and for each reply: `flags`, `replyttl`, `replysize`, `icmp`,
//! `rtt`, `probeid`, `replyipid`, `probeipid`, `replyproto`, `tcpflags`,
//! `addr`, `v4rr`, `v4ts`, `replyipid32`, `tx`, `tsreply`.

use crate::flags::FieldDef;

/// Fields of a top level ping record, in wire order.
pub const PING_FIELDS: &[FieldDef] = &[
    FieldDef::u32("listid"),
    FieldDef::u32("cycleid"),
    FieldDef::reserved("srcipid"),
    FieldDef::reserved("dstipid"),
    FieldDef::timestamp("timeval"),
    FieldDef::u8("stopreas"),
    FieldDef::u8("stopdata"),
    FieldDef::u16("datalen"),
    FieldDef::u8("data"),
    FieldDef::u16("pcount"),
    FieldDef::u16("size"),
    FieldDef::u8("wait"),
    FieldDef::u8("ttl"),
    FieldDef::u16("rcount"),
    FieldDef::u16("psent"),
    FieldDef::u8("method"),
    FieldDef::u16("sport"),
    FieldDef::u16("dport"),
    FieldDef::u32("userid"),
    FieldDef::addr("srcaddr"),
    FieldDef::addr("dstaddr"),
    FieldDef::u8("flags"),
    FieldDef::u8("tos"),
    FieldDef::reserved("tsps"),
    FieldDef::u16("icmpsum"),
    FieldDef::u16("pmtu"),
    FieldDef::u8("timeout"),
    FieldDef::u32("waitus"),
];

/// Fields of a single ping reply, in wire order.
///
/// `tsreply` is encoded as 32 bits although the full field is 12 bytes;
/// existing captures carry the truncated form and readers expect it.
pub const PING_REPLY_FIELDS: &[FieldDef] = &[
    FieldDef::reserved("dstipid"),
    FieldDef::u8("flags"),
    FieldDef::u8("replyttl"),
    FieldDef::u16("replysize"),
    FieldDef::u16("icmp"),
    FieldDef::u32("rtt"),
    FieldDef::u16("probeid"),
    FieldDef::u16("replyipid"),
    FieldDef::u16("probeipid"),
    FieldDef::u8("replyproto"),
    FieldDef::u8("tcpflags"),
    FieldDef::addr("addr"),
    FieldDef::addr("v4rr"),
    FieldDef::addr("v4ts"),
    FieldDef::u32("replyipid32"),
    FieldDef::timestamp("tx"),
    FieldDef::u32("tsreply"),
];
