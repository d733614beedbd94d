use thiserror::Error;

/// A format error result.
pub type Result<T> = std::result::Result<T, Error>;

/// A wire format error.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The address string is neither valid IPv4 nor valid IPv6.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// The value does not fit the fixed width of the field it was set on.
    #[error("value {1} out of range for field {0}")]
    ValueOutOfRange(&'static str, u64),
    /// The value kind does not match the field's declared encoder kind.
    #[error("field {0} expects a {1} value, got {2}")]
    WrongKind(&'static str, &'static str, &'static str),
    /// The field is declared without an encoder and cannot be set.
    #[error("field {0} is reserved")]
    ReservedField(&'static str),
    /// The attribute name does not appear in the record's field list.
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// The serialized value buffer exceeds the 16 bit length prefix.
    #[error("value buffer length {0} exceeds u16")]
    SectionTooLarge(usize),
    /// The reply collection exceeds the 16 bit on-wire count.
    #[error("reply count {0} exceeds u16")]
    TooManyReplies(usize),
}
