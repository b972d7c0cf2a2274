//! Fixed input corpus exercised by every variant

/// Corpus entries in report order
///
/// The empty string is a real entry; the end of the corpus is the end of
/// the slice, never a sentinel value.
pub const CORPUS: &[&str] = &[
    "",
    "a",
    "ab",
    "abc",
    "abcd",
    "abcde",
    "abcdef",
    "abcdefg",
    "abcdefgh",
    "abcdefghi",
    "abcdefghij",
    "abcdefghijk",
    "abcdefghijkl",
    "abcdefghijklm",
    "abcdefghijklmn",
    "abcdefghijklmno",
    "abcdefghijklmnop",
    "hello world",
    "xxHash is a very fast hashing algorithm",
    "This is a longer test string to verify the implementation works correctly",
];

/// One corpus entry, identified by its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputVector {
    index: usize,
    text: &'static str,
}

impl InputVector {
    /// Position of this entry in the corpus
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Original string form, echoed verbatim in the report
    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Bytes handed to the hash library
    #[must_use]
    pub fn as_bytes(&self) -> &'static [u8] {
        self.text.as_bytes()
    }

    /// Byte length of the entry
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if this is the empty entry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The compiled-in corpus
#[derive(Debug, Clone, Copy, Default)]
pub struct Corpus;

impl Corpus {
    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = InputVector> {
        CORPUS
            .iter()
            .enumerate()
            .map(|(index, &text)| InputVector { index, text })
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        CORPUS.len()
    }

    /// Always false; the corpus is a non-empty constant
    #[must_use]
    pub fn is_empty(&self) -> bool {
        CORPUS.is_empty()
    }

    /// Look up an entry by position
    #[must_use]
    pub fn get(&self, index: usize) -> Option<InputVector> {
        CORPUS.get(index).map(|&text| InputVector { index, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entry_is_first_and_distinct_from_end() {
        let corpus = Corpus;
        let first = corpus.get(0).expect("corpus has a first entry");
        assert!(first.is_empty());
        assert_eq!(first.as_bytes(), b"");
        assert!(corpus.get(corpus.len()).is_none());
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let indices: Vec<usize> = Corpus.iter().map(|v| v.index()).collect();
        assert_eq!(indices, (0..CORPUS.len()).collect::<Vec<_>>());
        assert_eq!(Corpus.iter().len(), 20);
    }
}
