use indexmap::IndexMap;

/// An attribute map supplied per record instance.
///
/// Keys are field names from the record type's field list; values must match
/// the declared encoder kind of the field they are set on.
pub type Attributes = IndexMap<&'static str, Value>;

/// A typed attribute value supplied by a measurement producer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An unsigned integer, width checked against the field it is set on.
    Uint(u64),
    /// Seconds since the epoch, with fractional microseconds.
    Timestamp(f64),
    /// An IPv4 or IPv6 address string.
    Addr(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl Value {
    /// Name of the value kind, for error reporting.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Uint(_) => "integer",
            Self::Timestamp(_) => "timestamp",
            Self::Addr(_) => "address",
            Self::Bytes(_) => "bytes",
        }
    }
}

impl From<u8> for Value {
    fn from(val: u8) -> Self {
        Self::Uint(u64::from(val))
    }
}

impl From<u16> for Value {
    fn from(val: u16) -> Self {
        Self::Uint(u64::from(val))
    }
}

impl From<u32> for Value {
    fn from(val: u32) -> Self {
        Self::Uint(u64::from(val))
    }
}

impl From<u64> for Value {
    fn from(val: u64) -> Self {
        Self::Uint(val)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Self::Timestamp(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Self::Addr(String::from(val))
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Self::Addr(val)
    }
}

impl From<Vec<u8>> for Value {
    fn from(val: Vec<u8>) -> Self {
        Self::Bytes(val)
    }
}

impl From<&[u8]> for Value {
    fn from(val: &[u8]) -> Self {
        Self::Bytes(val.to_vec())
    }
}
