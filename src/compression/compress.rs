use log::{debug, info};

use crate::bitstream::bitpacker::BitPacker;
use crate::huffman_coding::huffman::{build_tree, code_book, CodeBook};
use crate::huffman_coding::tree_codec::serialize_tree;
use crate::tools::freq_count::{freqs, symbols_in_use};

use super::container::Container;

/// Compress data into a kzip container. Empty input gives the empty container `0.0`.
pub fn compress(data: &[u8]) -> Vec<u8> {
    let freqs = freqs(data);
    info!(
        "Compressing {} bytes, {} symbols in use.",
        data.len(),
        symbols_in_use(&freqs)
    );

    // Nothing to build a tree from, so short circuit.
    let tree = match build_tree(&freqs) {
        Some(tree) => tree,
        None => return Container::empty().to_bytes(),
    };
    let book = code_book(&tree);
    let tree_data = serialize_tree(&tree);
    let (payload, dummy_bits) = pack(data, &book);
    debug!(
        "Tree is {} bytes ({} levels deep), payload is {} bytes with {} dummy bits.",
        tree_data.len(),
        tree.depth(),
        payload.len(),
        dummy_bits
    );

    let out = Container {
        tree: &tree_data,
        dummy_bits,
        payload: &payload,
    }
    .to_bytes();
    info!("Container is {} bytes.", out.len());
    out
}

/// Encode every byte with its codeword. Returns the packed bytes and the number of
/// zero bits used to pad out the last byte.
///
/// Every byte of data must have an entry in the code book.
pub fn pack(data: &[u8], book: &CodeBook) -> (Vec<u8>, u8) {
    let mut bp = BitPacker::new(data.len() / 2 + 1);
    data.iter().for_each(|sym| bp.out_code(&book[sym]));
    bp.flush();
    (bp.output, bp.padding)
}
