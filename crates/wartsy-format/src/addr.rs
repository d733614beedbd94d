use crate::error::{Error, Result};
use crate::wire;
use indexmap::IndexMap;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Address family byte for IPv4.
const FAMILY_IPV4: u8 = 0x01;

/// Address family byte for IPv6.
const FAMILY_IPV6: u8 = 0x02;

/// A classified address string.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Classified {
    V4(Ipv4Addr),
    V6(Ipv6Addr),
}

/// Classify an address string as IPv4 or IPv6.
///
/// A string that parses as a dotted quad is IPv4, anything else must parse
/// as IPv6; strings that are neither fail with [`Error::InvalidAddress`]
/// rather than being silently miscoded.
pub(crate) fn classify(addr: &str) -> Result<Classified> {
    if let Ok(v4) = addr.parse::<Ipv4Addr>() {
        Ok(Classified::V4(v4))
    } else if let Ok(v6) = addr.parse::<Ipv6Addr>() {
        Ok(Classified::V6(v6))
    } else {
        Err(Error::InvalidAddress(String::from(addr)))
    }
}

/// A per-record table of previously encoded addresses.
///
/// Ids are assigned strictly in first-use order starting at 0, regardless of
/// address family. The table is scoped to one top level record and shared
/// with the replies that record owns, so an address seen again anywhere in
/// the record is encoded as a compact back-reference.
#[derive(Debug, Clone, Default)]
pub struct AddrTable {
    /// The id to assign to the next unseen address.
    next_id: u32,
    /// Ids previously assigned, in first-use order.
    ids: IndexMap<String, u32>,
}

impl AddrTable {
    /// Create an empty `AddrTable`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The id previously assigned to `addr`, if any.
    #[must_use]
    pub fn lookup(&self, addr: &str) -> Option<u32> {
        self.ids.get(addr).copied()
    }

    /// The number of addresses in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the table holds no addresses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Remove all entries and restart id assignment at 0.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.next_id = 0;
    }

    /// Encode `addr`, appending to `buf`.
    ///
    /// An address already in the table becomes a 5 byte back-reference: one
    /// zero byte followed by the 32 bit id. An unseen address is emitted in
    /// full as a length byte (4 or 16), a family byte (0x01 IPv4, 0x02 IPv6)
    /// and the raw address bytes, then inserted at the next sequential id.
    pub fn encode(&mut self, addr: &str, buf: &mut Vec<u8>) -> Result<()> {
        if let Some(id) = self.lookup(addr) {
            wire::put_u8(buf, 0);
            wire::put_u32(buf, id);
            return Ok(());
        }
        match classify(addr)? {
            Classified::V4(v4) => {
                wire::put_u8(buf, 4);
                wire::put_u8(buf, FAMILY_IPV4);
                buf.extend_from_slice(&v4.octets());
            }
            Classified::V6(v6) => {
                wire::put_u8(buf, 16);
                wire::put_u8(buf, FAMILY_IPV6);
                buf.extend_from_slice(&v6.octets());
            }
        }
        self.ids.insert(String::from(addr), self.next_id);
        self.next_id += 1;
        Ok(())
    }
}
