use std::collections::BTreeMap;

use tracing::info;

/// Mutable tally of word, tag and word/tag counts.
///
/// Words and tags are raw bytes, compared exactly; the input encoding is
/// never decoded. Keys are kept in ordered maps so every later pass walks
/// words and tags in ascending byte order. Entries are only ever inserted or
/// incremented.
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    words: BTreeMap<Vec<u8>, u64>,
    tags: BTreeMap<Vec<u8>, u64>,
    word_tags: BTreeMap<Vec<u8>, BTreeMap<Vec<u8>, u64>>,
    tokens: u64,
    sentences: u64,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one sentence of `(word, tag)` pairs.
    pub fn ingest<I, W, T>(&mut self, sentence: I)
    where
        I: IntoIterator<Item = (W, T)>,
        W: AsRef<[u8]>,
        T: AsRef<[u8]>,
    {
        for (word, tag) in sentence {
            let (word, tag) = (word.as_ref(), tag.as_ref());
            bump(&mut self.words, word);
            bump(&mut self.tags, tag);
            match self.word_tags.get_mut(word) {
                Some(inner) => bump(inner, tag),
                None => {
                    self.word_tags
                        .insert(word.to_owned(), BTreeMap::from([(tag.to_owned(), 1)]));
                }
            }
            self.tokens += 1;
        }
        self.sentences += 1;
    }

    pub fn sentences(&self) -> u64 {
        self.sentences
    }

    pub fn tokens(&self) -> u64 {
        self.tokens
    }

    /// Freeze the tallies into a read-only [`Corpus`].
    pub fn finish(self) -> Corpus {
        info!(
            sentences = self.sentences,
            tokens = self.tokens,
            words = self.words.len(),
            tags = self.tags.len(),
            "aggregation finished"
        );
        Corpus {
            words: self.words,
            tags: self.tags,
            word_tags: self.word_tags,
            tokens: self.tokens,
            sentences: self.sentences,
        }
    }
}

fn bump(map: &mut BTreeMap<Vec<u8>, u64>, key: &[u8]) {
    match map.get_mut(key) {
        Some(count) => *count += 1,
        None => {
            map.insert(key.to_owned(), 1);
        }
    }
}

/// Final aggregated counts, shared read-only by ranking and statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    pub(crate) words: BTreeMap<Vec<u8>, u64>,
    pub(crate) tags: BTreeMap<Vec<u8>, u64>,
    pub(crate) word_tags: BTreeMap<Vec<u8>, BTreeMap<Vec<u8>, u64>>,
    pub(crate) tokens: u64,
    pub(crate) sentences: u64,
}

impl Corpus {
    pub fn sentences(&self) -> u64 {
        self.sentences
    }

    pub fn tokens(&self) -> u64 {
        self.tokens
    }

    pub fn word_types(&self) -> usize {
        self.words.len()
    }

    pub fn tag_types(&self) -> usize {
        self.tags.len()
    }

    pub fn word_count(&self, word: impl AsRef<[u8]>) -> Option<u64> {
        self.words.get(word.as_ref()).copied()
    }

    pub fn tag_count(&self, tag: impl AsRef<[u8]>) -> Option<u64> {
        self.tags.get(tag.as_ref()).copied()
    }

    pub fn joint_count(&self, word: impl AsRef<[u8]>, tag: impl AsRef<[u8]>) -> Option<u64> {
        self.word_tags.get(word.as_ref())?.get(tag.as_ref()).copied()
    }

    /// Tags observed with `word`, keyed by tag.
    pub fn tags_for(&self, word: impl AsRef<[u8]>) -> Option<&BTreeMap<Vec<u8>, u64>> {
        self.word_tags.get(word.as_ref())
    }

    /// Words with their totals, ascending by word bytes.
    pub fn words(&self) -> impl Iterator<Item = (&[u8], u64)> {
        self.words.iter().map(|(w, c)| (w.as_slice(), *c))
    }

    /// Tags with their totals, ascending by tag bytes.
    pub fn tags(&self) -> impl Iterator<Item = (&[u8], u64)> {
        self.tags.iter().map(|(t, c)| (t.as_slice(), *c))
    }
}
