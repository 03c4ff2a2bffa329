//! Preorder serialization of the huffman tree.
//!
//! Each internal node is written as the flag byte `'0'` followed by its left and right subtrees.
//! Each leaf is written as the flag byte `'1'` followed by the raw symbol byte, which may be any
//! value 0-255. The flags alone fix the shape of the tree, so no per-node lengths are needed.

use crate::error::ContainerFault;

use super::huffman::Node;

const INTERNAL: u8 = b'0';
const LEAF: u8 = b'1';
/// 256 unique leaves can never sit deeper than this.
const MAX_DEPTH: usize = 255;

/// Returns the preorder flag/literal description of the tree.
pub fn serialize_tree(root: &Node) -> Vec<u8> {
    let mut out = Vec::with_capacity(root.leaf_count() * 3);
    push_node(root, &mut out);
    out
}

fn push_node(node: &Node, out: &mut Vec<u8>) {
    match node {
        Node::Kids(left, right) => {
            out.push(INTERNAL);
            push_node(left, out);
            push_node(right, out);
        }
        Node::Leaf(sym) => {
            out.push(LEAF);
            out.push(*sym);
        }
    }
}

/// Rebuild a tree from its preorder description. An empty description is the empty tree.
/// The description must hold exactly one complete tree with no bytes left over.
pub fn deserialize_tree(data: &[u8]) -> Result<Option<Node>, ContainerFault> {
    if data.is_empty() {
        return Ok(None);
    }
    let mut reader = TreeReader {
        data,
        cursor: 0,
        seen: [false; 256],
    };
    let root = reader.node(0)?;
    if reader.cursor < data.len() {
        return Err(ContainerFault::TrailingTreeData(data.len() - reader.cursor));
    }
    Ok(Some(root))
}

/// Running position in the serialized tree, plus the symbols found so far.
struct TreeReader<'a> {
    data: &'a [u8],
    cursor: usize,
    seen: [bool; 256],
}

impl<'a> TreeReader<'a> {
    fn byte(&mut self) -> Result<u8, ContainerFault> {
        let byte = *self
            .data
            .get(self.cursor)
            .ok_or(ContainerFault::TreeIncomplete)?;
        self.cursor += 1;
        Ok(byte)
    }

    fn node(&mut self, depth: usize) -> Result<Node, ContainerFault> {
        if depth > MAX_DEPTH {
            return Err(ContainerFault::TreeTooDeep(MAX_DEPTH));
        }
        let at = self.cursor;
        match self.byte()? {
            LEAF => {
                let sym = self.byte()?;
                if self.seen[sym as usize] {
                    return Err(ContainerFault::DuplicateSymbol(sym));
                }
                self.seen[sym as usize] = true;
                Ok(Node::Leaf(sym))
            }
            INTERNAL => {
                let left = self.node(depth + 1)?;
                let right = self.node(depth + 1)?;
                Ok(Node::Kids(Box::new(left), Box::new(right)))
            }
            flag => Err(ContainerFault::BadTreeFlag(flag, at)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::huffman::build_tree;
    use crate::tools::freq_count::freqs;

    #[test]
    fn serialize_test() {
        let tree = build_tree(&freqs(b"aaaabbbcc")).unwrap();
        assert_eq!(serialize_tree(&tree), b"01a01c1b".to_vec());
    }

    #[test]
    fn single_leaf_test() {
        let tree = Node::Leaf(0xff);
        let data = serialize_tree(&tree);
        assert_eq!(data, vec![b'1', 0xff]);
        assert_eq!(deserialize_tree(&data), Ok(Some(tree)));
    }

    #[test]
    fn raw_symbols_test() {
        // Symbols that look like flags or delimiters are stored raw.
        let data = [b'0', b'1', b'0', b'1', b'1', b'0', b'1', b'.', 0, 0, 0];
        let tree = build_tree(&freqs(&data)).unwrap();
        assert_eq!(deserialize_tree(&serialize_tree(&tree)), Ok(Some(tree)));
    }

    #[test]
    fn full_alphabet_test() {
        let data: Vec<u8> = (0..=255_u8)
            .flat_map(|b| std::iter::repeat(b).take(1 + b as usize % 7))
            .collect();
        let tree = build_tree(&freqs(&data)).unwrap();
        let ser = serialize_tree(&tree);
        // 255 internal flags + 256 leaf flags + 256 symbols
        assert_eq!(ser.len(), 767);
        assert_eq!(deserialize_tree(&ser), Ok(Some(tree)));
    }

    #[test]
    fn empty_test() {
        assert_eq!(deserialize_tree(&[]), Ok(None));
    }

    #[test]
    fn incomplete_test() {
        assert_eq!(
            deserialize_tree(b"01a01c1"),
            Err(ContainerFault::TreeIncomplete)
        );
        assert_eq!(deserialize_tree(b"01a0"), Err(ContainerFault::TreeIncomplete));
    }

    #[test]
    fn bad_flag_test() {
        assert_eq!(
            deserialize_tree(b"01a2"),
            Err(ContainerFault::BadTreeFlag(b'2', 3))
        );
    }

    #[test]
    fn trailing_test() {
        assert_eq!(
            deserialize_tree(b"01a1bxx"),
            Err(ContainerFault::TrailingTreeData(2))
        );
    }

    #[test]
    fn duplicate_test() {
        assert_eq!(
            deserialize_tree(b"01a1a"),
            Err(ContainerFault::DuplicateSymbol(b'a'))
        );
    }

    #[test]
    fn too_deep_test() {
        let data = vec![b'0'; 10_000];
        assert_eq!(
            deserialize_tree(&data),
            Err(ContainerFault::TreeTooDeep(MAX_DEPTH))
        );
    }
}
