use std::fmt::{Display, Formatter};
use std::path::Path;

/// Default values for configuration.
pub mod defaults {
    use crate::config::Compression;

    /// The default value for `append`.
    pub const DEFAULT_APPEND: bool = false;

    /// The default value for `overwrite`.
    pub const DEFAULT_OVERWRITE: bool = true;

    /// The default value for `compression`.
    pub const DEFAULT_COMPRESSION: Compression = Compression::Auto;
}

/// The output compression policy.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Compression {
    /// Choose by destination filename: a `.bz2` suffix selects bzip2.
    #[default]
    Auto,
    /// Never compress.
    None,
    /// Block compress with bzip2.
    Bzip2,
}

impl Compression {
    /// Whether output to `path` should be block compressed.
    #[must_use]
    pub fn is_enabled_for(self, path: &Path) -> bool {
        match self {
            Self::Auto => path.extension().is_some_and(|ext| ext == "bz2"),
            Self::None => false,
            Self::Bzip2 => true,
        }
    }
}

impl Display for Compression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::None => write!(f, "none"),
            Self::Bzip2 => write!(f, "bzip2"),
        }
    }
}
