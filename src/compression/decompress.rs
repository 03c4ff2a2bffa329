use log::{debug, info, trace};

use crate::bitstream::bitreader::BitReader;
use crate::error::{ContainerFault, KzipError};
use crate::huffman_coding::huffman::Node;
use crate::huffman_coding::tree_codec::deserialize_tree;

use super::container::Container;

/// Decompress a kzip container back into the original bytes.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, KzipError> {
    let container = Container::parse(data)?;
    debug!(
        "Tree is {} bytes, payload is {} bytes with {} dummy bits.",
        container.tree.len(),
        container.payload.len(),
        container.dummy_bits
    );

    let out = match deserialize_tree(container.tree)? {
        Some(root) => unpack(&root, container.payload, container.dummy_bits)?,
        None => Vec::new(),
    };
    info!(
        "Decompressed {} container bytes into {} bytes.",
        data.len(),
        out.len()
    );
    Ok(out)
}

/// Walk the tree with each payload bit (0 left, 1 right), emitting a symbol at every leaf.
/// The last `dummy_bits` bits of the payload are padding and are not walked.
///
/// A tree that is a single leaf emits its symbol once for every bit.
pub fn unpack(root: &Node, payload: &[u8], dummy_bits: u8) -> Result<Vec<u8>, ContainerFault> {
    let br = BitReader::new(payload, dummy_bits);
    trace!("\rUnpacking {} bits.", br.remaining());

    if let Node::Leaf(sym) = root {
        return Ok(vec![*sym; br.remaining()]);
    }

    let mut out = Vec::with_capacity(payload.len() * 2);
    let mut node = root;
    for bit in br {
        if let Node::Kids(left, right) = node {
            node = if bit { right.as_ref() } else { left.as_ref() };
        }
        if let Node::Leaf(sym) = node {
            out.push(*sym);
            node = root;
        }
    }
    // A partial walk means the payload was cut off mid codeword.
    if !std::ptr::eq(node, root) {
        return Err(ContainerFault::PayloadTruncated);
    }
    Ok(out)
}
