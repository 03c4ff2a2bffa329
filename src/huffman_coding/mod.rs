//! The huffman module builds the huffman tree and the codes kzip packs with, and converts
//! the tree to and from the compact form stored in the container.
//!
//! One static tree is built for the whole input. Its shape depends only on the byte
//! frequencies, and ties between equal weights are settled by symbol value, so the same
//! input always produces the same container.

pub mod huffman;
pub mod tree_codec;
