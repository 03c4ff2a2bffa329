//! The kzip container layout:
//!
//! ```text
//! <tree length, decimal ASCII> '.' <tree bytes> <dummy bits, ASCII '0'-'7'> <payload bytes>
//! ```
//!
//! The tree and payload regions may hold any byte value. Only the length prefix is restricted
//! to decimal digits followed by the '.' delimiter.

use crate::error::ContainerFault;

const DELIMITER: u8 = b'.';

/// The parts of a kzip container, borrowed from the buffers that hold them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container<'a> {
    /// Preorder tree description.
    pub tree: &'a [u8],
    /// Zero bits padding out the last payload byte (0-7).
    pub dummy_bits: u8,
    /// Packed codewords.
    pub payload: &'a [u8],
}

impl<'a> Container<'a> {
    /// The container for empty input: no tree, no payload, no padding.
    pub fn empty() -> Self {
        Container {
            tree: &[],
            dummy_bits: 0,
            payload: &[],
        }
    }

    /// Assemble the container bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = self.tree.len().to_string();
        let mut out = Vec::with_capacity(len.len() + self.tree.len() + self.payload.len() + 2);
        out.extend_from_slice(len.as_bytes());
        out.push(DELIMITER);
        out.extend_from_slice(self.tree);
        out.push(b'0' + self.dummy_bits);
        out.extend_from_slice(self.payload);
        out
    }

    /// Split container bytes into their parts, checking every boundary.
    pub fn parse(data: &'a [u8]) -> Result<Self, ContainerFault> {
        // Read the decimal tree length up to the delimiter.
        let mut tree_len: usize = 0;
        let mut digits = 0;
        let mut rest = data;
        loop {
            let (&byte, tail) = rest.split_first().ok_or(ContainerFault::MissingDelimiter)?;
            rest = tail;
            match byte {
                DELIMITER => break,
                b'0'..=b'9' => {
                    tree_len = tree_len
                        .checked_mul(10)
                        .and_then(|n| n.checked_add((byte - b'0') as usize))
                        .ok_or(ContainerFault::BadTreeLength)?;
                    digits += 1;
                }
                _ => return Err(ContainerFault::BadTreeLength),
            }
        }
        if digits == 0 {
            return Err(ContainerFault::BadTreeLength);
        }

        if tree_len > rest.len() {
            return Err(ContainerFault::TreeTruncated {
                declared: tree_len,
                available: rest.len(),
            });
        }
        let (tree, rest) = rest.split_at(tree_len);

        let (&digit, payload) = rest
            .split_first()
            .ok_or(ContainerFault::MissingDummyBits)?;
        if !(b'0'..=b'7').contains(&digit) {
            return Err(ContainerFault::BadDummyBits(digit));
        }
        let dummy_bits = digit - b'0';

        if payload.is_empty() && dummy_bits > 0 {
            return Err(ContainerFault::DummyBitsWithoutPayload(dummy_bits));
        }
        if tree.is_empty() && !payload.is_empty() {
            return Err(ContainerFault::PayloadWithoutTree(payload.len()));
        }

        Ok(Container {
            tree,
            dummy_bits,
            payload,
        })
    }
}
