//! kzip, a static huffman file compressor.
//!
//! Version 0.1.0
//!
//! Converts any byte sequence into a compact container (a serialized decode tree plus the
//! huffman coded data) and reconstructs the original bytes from that container.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> kzip -c test.txt`
//!
//! This will compress the file and create the file test.txt.kzip.
//! `$> kzip -d test.txt.kzip` then writes DECOMPRESSED_test.txt.
//!
//! The library works on in-memory buffers only:
//!
//! ```
//! let packed = kzip::compress(b"aaaabbbcc");
//! assert_eq!(kzip::decompress(&packed).unwrap(), b"aaaabbbcc");
//! ```
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::compress;
pub use compression::decompress::decompress;
pub use error::{ContainerFault, KzipError};
