use thiserror::Error;

/// Failures raised while building or reading a lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The joint word/tag counts of a word do not add up to its total.
    #[error("inconsistency for {}", String::from_utf8_lossy(word))]
    Inconsistency {
        word: Vec<u8>,
        expected: u64,
        found: u64,
    },
    #[error("line {line}: odd number of tokens ({tokens}), expected word/tag pairs")]
    OddTokenCount { line: usize, tokens: usize },
    #[error("malformed lexicon entry on line {line}")]
    MalformedEntry {
        line: usize,
        #[source]
        source: EntryError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reasons a single lexicon line cannot be read back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("missing word")]
    MissingWord,
    #[error("missing word count")]
    MissingCount,
    #[error("no tags listed")]
    MissingTags,
    #[error("tag {0} has no frequency")]
    MissingFrequency(String),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

pub type Result<T, E = LexiconError> = std::result::Result<T, E>;
