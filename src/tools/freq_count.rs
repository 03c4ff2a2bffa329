/// Occurrence count for every byte value. A zero count means the symbol is absent.
pub type FreqTable = [u64; 256];

/// Returns a frequency count of the input data.
pub fn freqs(data: &[u8]) -> FreqTable {
    let mut freqs = [0_u64; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

/// Number of distinct byte values present in a frequency table.
pub fn symbols_in_use(freqs: &FreqTable) -> usize {
    freqs.iter().filter(|&&f| f > 0).count()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn freqs_test() {
        let f = freqs(b"aaaabbbcc");
        assert_eq!(f[b'a' as usize], 4);
        assert_eq!(f[b'b' as usize], 3);
        assert_eq!(f[b'c' as usize], 2);
        assert_eq!(f.iter().sum::<u64>(), 9);
        assert_eq!(symbols_in_use(&f), 3);
    }

    #[test]
    fn empty_test() {
        let f = freqs(&[]);
        assert_eq!(symbols_in_use(&f), 0);
    }

    #[test]
    fn full_range_test() {
        let data = (0..=255).collect::<Vec<u8>>();
        let f = freqs(&data);
        assert!(f.iter().all(|&n| n == 1));
        assert_eq!(symbols_in_use(&f), 256);
    }
}
