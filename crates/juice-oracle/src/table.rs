//! Range lookup tables and word lists.
//!
//! A [`LookupTable`] maps a key (usually a dice total) to a result through
//! ordered, inclusive ranges. The first entry containing the key wins. The
//! table never clamps: callers bring modified totals into
//! [`LookupTable::covered_range`] first, typically with
//! [`LookupTable::clamp`].
//!
//! A [`WordList`] is the flat d10-style list used throughout the oracle,
//! read with the "highest roll is index 0" convention printed tables use
//! (entries listed 1..9 then 0).

/// One inclusive range of a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry<T: 'static> {
    /// Lowest key (inclusive).
    pub min: i32,
    /// Highest key (inclusive).
    pub max: i32,
    /// The result for keys in range.
    pub result: T,
}

impl<T: 'static> TableEntry<T> {
    /// Create an entry covering `min..=max`.
    pub const fn new(min: i32, max: i32, result: T) -> Self {
        Self { min, max, result }
    }

    /// An entry covering a single key.
    pub const fn single(key: i32, result: T) -> Self {
        Self::new(key, key, result)
    }

    /// Whether `key` falls in this entry's range.
    pub fn contains(&self, key: i32) -> bool {
        (self.min..=self.max).contains(&key)
    }
}

/// An ordered list of range entries.
#[derive(Debug, Clone, Copy)]
pub struct LookupTable<T: 'static> {
    name: &'static str,
    entries: &'static [TableEntry<T>],
}

impl<T: 'static> LookupTable<T> {
    /// Create a table from static entries.
    pub const fn new(name: &'static str, entries: &'static [TableEntry<T>]) -> Self {
        Self { name, entries }
    }

    /// The table's display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The entries in declaration order.
    pub fn entries(&self) -> &'static [TableEntry<T>] {
        self.entries
    }

    /// The result of the first entry whose range contains `key`.
    pub fn lookup(&self, key: i32) -> Option<&'static T> {
        self.entries
            .iter()
            .find(|e| e.contains(key))
            .map(|e| &e.result)
    }

    /// Like [`LookupTable::lookup`], returning `fallback` on a miss.
    pub fn lookup_or<'a>(&self, key: i32, fallback: &'a T) -> &'a T {
        match self.lookup(key) {
            Some(result) => result,
            None => {
                tracing::warn!(table = self.name, key, "no table entry for key, using fallback");
                fallback
            }
        }
    }

    /// Lowest and highest key covered by any entry.
    pub fn covered_range(&self) -> Option<(i32, i32)> {
        let min = self.entries.iter().map(|e| e.min).min()?;
        let max = self.entries.iter().map(|e| e.max).max()?;
        Some((min, max))
    }

    /// Clamp `key` into the covered range. Empty tables leave it unchanged.
    pub fn clamp(&self, key: i32) -> i32 {
        match self.covered_range() {
            Some((min, max)) => key.clamp(min, max),
            None => key,
        }
    }

    /// True when entries are well formed, ascending, and each starts right
    /// after the previous one ends.
    pub fn is_contiguous(&self) -> bool {
        self.entries.iter().all(|e| e.min <= e.max)
            && self
                .entries
                .windows(2)
                .all(|pair| pair[1].min == pair[0].max + 1)
    }
}

/// A flat word list read by a single die.
#[derive(Debug, Clone, Copy)]
pub struct WordList {
    name: &'static str,
    words: &'static [&'static str],
}

impl WordList {
    /// Create a word list.
    pub const fn new(name: &'static str, words: &'static [&'static str]) -> Self {
        Self { name, words }
    }

    /// The list's display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of entries; also the die size that reads the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The die size that reads this list.
    pub fn sides(&self) -> u32 {
        self.words.len() as u32
    }

    /// Read the list with the printed-table convention: a roll equal to the
    /// list length reads index 0, every other roll reads its own index.
    pub fn pick(&self, roll: u32) -> &'static str {
        if self.words.is_empty() {
            return "";
        }
        let idx = roll as usize % self.words.len();
        self.words[idx]
    }

    /// Read the list as 1-indexed: roll 1 is the first entry. Rolls outside
    /// `1..=len` read the empty string.
    pub fn pick_one_indexed(&self, roll: u32) -> &'static str {
        (roll as usize)
            .checked_sub(1)
            .and_then(|idx| self.words.get(idx))
            .copied()
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: LookupTable<&str> = LookupTable::new(
        "Sample",
        &[
            TableEntry::new(2, 4, "low"),
            TableEntry::new(5, 9, "mid"),
            TableEntry::new(10, 12, "high"),
        ],
    );

    const GAPPY: LookupTable<u8> = LookupTable::new(
        "Gappy",
        &[TableEntry::new(1, 3, 1), TableEntry::new(5, 6, 2)],
    );

    const DIGITS: WordList = WordList::new(
        "Digits",
        &["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"],
    );

    #[test]
    fn lookup_first_match() {
        assert_eq!(SAMPLE.lookup(2), Some(&"low"));
        assert_eq!(SAMPLE.lookup(4), Some(&"low"));
        assert_eq!(SAMPLE.lookup(5), Some(&"mid"));
        assert_eq!(SAMPLE.lookup(12), Some(&"high"));
    }

    #[test]
    fn lookup_miss_returns_none() {
        assert_eq!(SAMPLE.lookup(1), None);
        assert_eq!(SAMPLE.lookup(13), None);
        assert_eq!(GAPPY.lookup(4), None);
    }

    #[test]
    fn lookup_or_falls_back() {
        assert_eq!(*SAMPLE.lookup_or(99, &"fallback"), "fallback");
        assert_eq!(*SAMPLE.lookup_or(7, &"fallback"), "mid");
    }

    #[test]
    fn clamp_into_covered_range() {
        assert_eq!(SAMPLE.covered_range(), Some((2, 12)));
        assert_eq!(SAMPLE.clamp(-3), 2);
        assert_eq!(SAMPLE.clamp(15), 12);
        assert_eq!(SAMPLE.clamp(7), 7);
    }

    #[test]
    fn empty_table() {
        const EMPTY: LookupTable<u8> = LookupTable::new("Empty", &[]);
        assert_eq!(EMPTY.covered_range(), None);
        assert_eq!(EMPTY.clamp(5), 5);
        assert_eq!(EMPTY.lookup(5), None);
        assert!(EMPTY.is_contiguous());
    }

    #[test]
    fn contiguity() {
        assert!(SAMPLE.is_contiguous());
        assert!(!GAPPY.is_contiguous());
    }

    #[test]
    fn highest_roll_reads_index_zero() {
        assert_eq!(DIGITS.pick(10), "zero");
        assert_eq!(DIGITS.pick(1), "one");
        assert_eq!(DIGITS.pick(9), "nine");
    }

    #[test]
    fn one_indexed_reads() {
        assert_eq!(DIGITS.pick_one_indexed(1), "zero");
        assert_eq!(DIGITS.pick_one_indexed(10), "nine");
        assert_eq!(DIGITS.pick_one_indexed(0), "");
        assert_eq!(DIGITS.pick_one_indexed(11), "");
    }

    #[test]
    fn empty_word_list() {
        const NONE: WordList = WordList::new("None", &[]);
        assert!(NONE.is_empty());
        assert_eq!(NONE.pick(3), "");
    }
}
