//! BitReader: reads the packed payload of a kzip container one bit at a time.
//!
//! The last byte of a payload may end in padding bits. The reader is told how many,
//! and reports the end of the data once only padding is left.

const BIT_MASK: u8 = 0x80;

/// Reads a packed, most significant bit first, payload.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    /// Total number of real (non-padding) bits in buffer.
    end: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader over buffer, ignoring the last `padding` bits of the final byte.
    pub fn new(buffer: &'a [u8], padding: u8) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            end: (buffer.len() * 8).saturating_sub(padding as usize),
        }
    }

    /// Count of real bits not yet read.
    pub fn remaining(&self) -> usize {
        self.end - (self.cursor * 8 + self.bit_index)
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.remaining() == 0 {
            return None;
        }
        let bit = (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

impl<'a> Iterator for BitReader<'a> {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        self.bool_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}
