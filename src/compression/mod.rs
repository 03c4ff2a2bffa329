//! The compression module holds the two kzip pipelines and the container they share.
//!
//! Compression happens in the following steps:
//! - Frequency count: Count how often each byte value occurs.
//! - Tree build: Merge the two lightest nodes until a single huffman tree remains.
//! - Code book: Walk the tree to give every byte value its codeword.
//! - Packing: Write each input byte's codeword into a bitstream, padding the last byte with zeros.
//! - Container: Write the tree length, the preorder tree, the padding count and the packed bytes.
//!
//! Decompression follows the inverse of the compression process.
//! - Container: Split the input into tree, padding count and packed bytes, checking every boundary.
//! - Tree rebuild: Read the preorder tree back into nodes.
//! - Unpacking: Walk the tree bit by bit, emitting a byte at every leaf.
//!
//! Both directions work entirely in memory on a single buffer.

pub mod compress;
pub mod container;
pub mod decompress;
