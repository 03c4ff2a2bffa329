//! Error types for kzip.
//!
//! Anything that goes wrong while parsing or decoding a container is reported as
//! `KzipError::Corrupt` with a `ContainerFault` describing where the container broke.
//! The remaining variants belong to the command line glue.

/// The specific way a container failed to parse or decode.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerFault {
    #[error("no '.' after the tree length")]
    MissingDelimiter,
    #[error("tree length is not a decimal number")]
    BadTreeLength,
    #[error("tree length {declared} exceeds the {available} bytes available")]
    TreeTruncated { declared: usize, available: usize },
    #[error("tree data ended before the tree was complete")]
    TreeIncomplete,
    #[error("unknown tree flag {0:#04x} at offset {1}")]
    BadTreeFlag(u8, usize),
    #[error("{0} unused bytes after the tree")]
    TrailingTreeData(usize),
    #[error("tree is deeper than {0} levels")]
    TreeTooDeep(usize),
    #[error("symbol {0:#04x} appears twice in the tree")]
    DuplicateSymbol(u8),
    #[error("missing dummy bit count")]
    MissingDummyBits,
    #[error("dummy bit count {0:#04x} is not a digit 0-7")]
    BadDummyBits(u8),
    #[error("{0} dummy bits declared with no payload")]
    DummyBitsWithoutPayload(u8),
    #[error("payload of {0} bytes has no tree to decode against")]
    PayloadWithoutTree(usize),
    #[error("payload ends in the middle of a codeword")]
    PayloadTruncated,
}

#[derive(thiserror::Error, Debug)]
pub enum KzipError {
    #[error("corrupt container: {0}")]
    Corrupt(#[from] ContainerFault),
    #[error("can only decompress files with \".kzip\" format, got {0}")]
    BadExtension(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl KzipError {
    /// True if the error came from a malformed container rather than the environment.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, KzipError::Corrupt(_))
    }
}
