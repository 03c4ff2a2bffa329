//! The bitstream module forms the bit level I/O for kzip.
//!
//! - bitpacker: Packs codewords into bytes, recording how many padding bits finish the last byte.
//! - bitreader: Reads packed bytes back one bit at a time, stopping before the padding.
//!
pub mod bitpacker;
pub mod bitreader;
