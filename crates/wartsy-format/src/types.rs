use bitflags::bitflags;
use std::fmt::{Display, Formatter};

/// The 16 bit constant that opens every object header.
pub const MAGIC: u16 = 0x1205;

/// Warts object type.
///
/// Each variant maps to the fixed numeric code carried in the 16 bit type
/// field of the object header.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ObjectType {
    /// A measurement list definition.
    List,
    /// The start of a measurement cycle.
    Cycle,
    /// The end of a measurement cycle.
    CycleStop,
    /// A traceroute record.
    Trace,
    /// A ping record.
    Ping,
}

impl ObjectType {
    /// The on-wire type code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::List => 0x01,
            Self::Cycle => 0x03,
            Self::CycleStop => 0x04,
            Self::Trace => 0x06,
            Self::Ping => 0x07,
        }
    }
}

impl Display for ObjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Cycle => write!(f, "cycle"),
            Self::CycleStop => write!(f, "cycle-stop"),
            Self::Trace => write!(f, "trace"),
            Self::Ping => write!(f, "ping"),
        }
    }
}

bitflags! {
    /// Flags describing how a hop reply was observed.
    ///
    /// Carried in the `hopflags` field of a trace hop.
    #[derive(Debug, Clone, Copy, Eq, PartialEq)]
    pub struct HopFlags: u8 {
        /// The receive timestamp was taken from the socket.
        const TS_SOCK_RX = 0x01;
        /// The transmit timestamp was taken from the datalink layer.
        const TS_DL_TX = 0x02;
        /// The receive timestamp was taken from the datalink layer.
        const TS_DL_RX = 0x04;
        /// The reply TTL field is valid.
        const REPLY_TTL = 0x10;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ObjectType::List, 0x01; "list")]
    #[test_case(ObjectType::Cycle, 0x03; "cycle")]
    #[test_case(ObjectType::CycleStop, 0x04; "cycle stop")]
    #[test_case(ObjectType::Trace, 0x06; "trace")]
    #[test_case(ObjectType::Ping, 0x07; "ping")]
    fn test_object_type_code(typ: ObjectType, expected: u16) {
        assert_eq!(expected, typ.code());
    }

    #[test]
    fn test_hop_flags() {
        let flags = HopFlags::REPLY_TTL;
        assert_eq!(0x10, flags.bits());
        let flags = HopFlags::TS_SOCK_RX | HopFlags::TS_DL_RX;
        assert_eq!(0x05, flags.bits());
    }
}
