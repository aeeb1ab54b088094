/// Set of character offsets, packed into 64-bit words
///
/// The backing storage is sized once per segmentation (see [`BitVec::reset()`]) and only
/// holds the words up to the highest offset set so far, so copying a set costs as much
/// as the prefix it describes, not the whole input.
#[derive(Clone, Debug, Default)]
pub(crate) struct BitVec {
    words: Vec<u64>,
    bits: usize,
}

impl BitVec {
    /// Empty the set and make room for offsets below `bits`
    pub(crate) fn reset(&mut self, bits: usize) {
        self.words.clear();
        self.words.reserve(words_for(bits));
        self.bits = bits;
    }

    pub(crate) fn set(&mut self, bit: usize) {
        debug_assert!(bit < self.bits);
        let (idx, shift) = (bit / 64, bit % 64);
        if idx >= self.words.len() {
            self.words.resize(idx + 1, 0);
        }
        self.words[idx] |= 1u64 << shift;
    }

    pub(crate) fn test(&self, bit: usize) -> bool {
        match self.words.get(bit / 64) {
            Some(word) => word & (1u64 << (bit % 64)) != 0,
            None => false,
        }
    }

    /// Replace the contents of `self` with those of `other`
    pub(crate) fn copy_from(&mut self, other: &BitVec) {
        self.words.clear();
        self.words.extend_from_slice(&other.words);
        self.bits = self.bits.max(other.bits);
    }

    pub(crate) fn clear(&mut self) {
        self.words.clear();
    }

    /// Iterate over the offsets in the set, in ascending order
    pub(crate) fn decode(&self) -> Splits<'_> {
        Splits {
            words: &self.words,
            idx: 0,
            cur: self.words.first().copied().unwrap_or(0),
        }
    }
}

pub(crate) struct Splits<'a> {
    words: &'a [u64],
    idx: usize,
    cur: u64,
}

impl<'a> Iterator for Splits<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cur == 0 {
            self.idx += 1;
            self.cur = *self.words.get(self.idx)?;
        }

        let trailing = self.cur.trailing_zeros();
        self.cur &= self.cur - 1;
        Some(self.idx * 64 + trailing as usize)
    }
}

fn words_for(bits: usize) -> usize {
    (bits + 63) / 64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitvec() {
        let mut splits = BitVec::default();
        splits.reset(256);
        assert_eq!(splits.decode().collect::<Vec<_>>(), vec![]);
        assert!(!splits.test(1));

        splits.set(1);
        assert_eq!(splits.decode().collect::<Vec<_>>(), vec![1]);
        assert!(splits.test(1));
        assert!(!splits.test(200));

        splits.set(5);
        splits.set(64);
        splits.set(255);
        assert_eq!(splits.decode().collect::<Vec<_>>(), vec![1, 5, 64, 255]);
        assert!(splits.test(64));
        assert!(!splits.test(63));
        assert!(!splits.test(65));

        let mut new = BitVec::default();
        new.reset(256);
        new.set(3);
        new.set(130);
        new.copy_from(&splits);
        assert_eq!(new.decode().collect::<Vec<_>>(), vec![1, 5, 64, 255]);
        assert!(!new.test(130));

        new.set(128);
        assert_eq!(new.decode().collect::<Vec<_>>(), vec![1, 5, 64, 128, 255]);
        assert_eq!(splits.decode().collect::<Vec<_>>(), vec![1, 5, 64, 255]);

        new.clear();
        assert_eq!(new.decode().count(), 0);
    }

    #[test]
    fn sparse() {
        let mut splits = BitVec::default();
        splits.reset(1000);
        splits.set(999);
        assert_eq!(splits.decode().collect::<Vec<_>>(), vec![999]);

        let mut empty = BitVec::default();
        empty.reset(1000);
        splits.copy_from(&empty);
        assert_eq!(splits.decode().count(), 0);
        assert!(!splits.test(999));
    }
}
