use log::trace;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::tools::freq_count::FreqTable;

/// A huffman tree node. Parents own their kids outright; the tree is dropped as a unit.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Node {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Number of leaves (symbols) under this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Kids(left, right) => left.leaf_count() + right.leaf_count(),
            Node::Leaf(_) => 1,
        }
    }

    /// Longest path from this node to a leaf. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Kids(left, right) => 1 + left.depth().max(right.depth()),
            Node::Leaf(_) => 0,
        }
    }
}

/// A node while the tree is being built. The weight is dropped once the tree is done.
#[derive(Eq, PartialEq, Debug)]
struct Weighted {
    weight: u64,
    /// Smallest symbol in the subtree. Unique among live nodes, so it settles weight ties.
    low_sym: u8,
    node: Node,
}

impl Ord for Weighted {
    /// Sort by decreasing weight, then decreasing low symbol, so the node to take next sits at the end.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then(other.low_sym.cmp(&self.low_sym))
    }
}

impl PartialOrd for Weighted {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build a huffman tree from symbol frequencies. Returns None when no symbol is present.
///
/// The two lightest nodes are merged until one remains. Ties on weight go to the node
/// holding the smaller symbol, and the first node taken becomes the left child, so the
/// same frequencies always give the same tree.
pub fn build_tree(freqs: &FreqTable) -> Option<Node> {
    let mut tree: Vec<Weighted> = freqs
        .iter()
        .enumerate()
        .filter(|(_, &f)| f > 0)
        .map(|(sym, &f)| Weighted {
            weight: f,
            low_sym: sym as u8,
            node: Node::Leaf(sym as u8),
        })
        .collect();

    // ...then pare it down to one single node with child nodes - keep it sorted.
    loop {
        tree.sort_unstable();
        let left = tree.pop()?;
        let right = match tree.pop() {
            Some(right) => right,
            // Only the root is left
            None => return Some(left.node),
        };
        tree.push(Weighted {
            weight: left.weight + right.weight,
            low_sym: left.low_sym.min(right.low_sym),
            node: Node::Kids(Box::new(left.node), Box::new(right.node)),
        });
    }
}

/// A codeword, most significant (first written) bit first.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Code(Vec<bool>);

impl Code {
    pub fn new(bits: Vec<bool>) -> Self {
        Code(bits)
    }

    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every bit of self starts other.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0
            .iter()
            .try_for_each(|&bit| write!(f, "{}", if bit { '1' } else { '0' }))
    }
}

/// Symbol to codeword lookup.
pub type CodeBook = FxHashMap<u8, Code>;

/// Walk the tree and return the code for every leaf: 0 going left, 1 going right.
///
/// A tree that is a single leaf has no edges to walk, so its symbol gets the one bit code `0`.
/// The decoder mirrors this by emitting the lone symbol for every bit it reads.
pub fn code_book(root: &Node) -> CodeBook {
    let mut book = CodeBook::default();
    match root {
        Node::Leaf(sym) => {
            book.insert(*sym, Code(vec![false]));
        }
        Node::Kids(..) => return_codes(root, &mut Vec::new(), &mut book),
    }
    if log::log_enabled!(log::Level::Trace) {
        let mut syms: Vec<&u8> = book.keys().collect();
        syms.sort_unstable();
        for sym in syms {
            trace!("\rCode for {:#04x} is {}", sym, book[sym]);
        }
    }
    book
}

/// Recursively walk the tree, recording the path to each leaf in "book".
fn return_codes(node: &Node, path: &mut Vec<bool>, book: &mut CodeBook) {
    match node {
        Node::Kids(left, right) => {
            path.push(false);
            return_codes(left, path, book);
            path.pop();
            path.push(true);
            return_codes(right, path, book);
            path.pop();
        }
        Node::Leaf(sym) => {
            book.insert(*sym, Code(path.clone()));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::freq_count::freqs;

    fn code(s: &str) -> Code {
        Code::new(s.chars().map(|c| c == '1').collect())
    }

    #[test]
    fn empty_tree_test() {
        assert_eq!(build_tree(&freqs(&[])), None);
    }

    #[test]
    fn single_symbol_tree_test() {
        let tree = build_tree(&freqs(b"zzzz")).unwrap();
        assert_eq!(tree, Node::Leaf(b'z'));
        let book = code_book(&tree);
        assert_eq!(book.len(), 1);
        assert_eq!(book[&b'z'], code("0"));
    }

    #[test]
    fn three_symbol_test() {
        // a:4 b:3 c:2 -> c and b merge first (c taken first, so it goes left), then a joins.
        let tree = build_tree(&freqs(b"aaaabbbcc")).unwrap();
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(
            tree,
            Node::Kids(
                Box::new(Node::Leaf(b'a')),
                Box::new(Node::Kids(
                    Box::new(Node::Leaf(b'c')),
                    Box::new(Node::Leaf(b'b'))
                )),
            )
        );
        let book = code_book(&tree);
        assert_eq!(book[&b'a'], code("0"));
        assert_eq!(book[&b'c'], code("10"));
        assert_eq!(book[&b'b'], code("11"));
        assert!(book[&b'a'].len() < book[&b'b'].len());
        assert!(book[&b'c'].len() >= book[&b'b'].len());
    }

    #[test]
    fn tie_break_test() {
        // Equal weights: the smaller symbol is always taken first.
        let tree = build_tree(&freqs(b"dcba")).unwrap();
        assert_eq!(
            tree,
            Node::Kids(
                Box::new(Node::Kids(
                    Box::new(Node::Leaf(b'a')),
                    Box::new(Node::Leaf(b'b'))
                )),
                Box::new(Node::Kids(
                    Box::new(Node::Leaf(b'c')),
                    Box::new(Node::Leaf(b'd'))
                )),
            )
        );
        assert_eq!(build_tree(&freqs(b"dcba")), build_tree(&freqs(b"abcd")));
    }

    #[test]
    fn prefix_free_test() {
        let data = b"the quick brown fox jumps over the lazy dog, again and again and again!";
        let book = code_book(&build_tree(&freqs(data)).unwrap());
        for (a, code_a) in book.iter() {
            for (b, code_b) in book.iter() {
                if a != b {
                    assert!(!code_a.is_prefix_of(code_b), "{} prefixes {}", code_a, code_b);
                }
            }
        }
    }

    #[test]
    fn code_length_is_depth_test() {
        let data: Vec<u8> = (0..=255_u8).chain(0..10).collect();
        let tree = build_tree(&freqs(&data)).unwrap();
        let book = code_book(&tree);
        assert_eq!(book.len(), 256);
        let longest = book.values().map(|c| c.len()).max().unwrap();
        assert_eq!(longest, tree.depth());
        assert!(book.values().all(|c| !c.is_empty()));
    }

    #[test]
    fn display_test() {
        assert_eq!(code("0110").to_string(), "0110");
    }
}
