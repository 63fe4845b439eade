//! Build part-of-speech lexicons from tagged ("cooked") training text.
//!
//! Input is one sentence per line with tokens alternating word and tag.
//! Words and tags are kept as raw bytes, so corpora in Latin-1 or any other
//! ASCII-compatible encoding pass through unchanged. The
//! crate tallies word, tag and word/tag counts, ranks every word's tags by
//! frequency, verifies that the joint counts of each word add up to its
//! total, and derives corpus statistics: the ambiguity-class distribution,
//! the token-weighted mean ambiguity and the tag entropy in bits.
//!
//! The pipeline runs in three steps over explicit values:
//! 1. [`SentenceReader`] feeds lines into an [`Aggregator`].
//! 2. [`Aggregator::finish`] freezes the counts into a [`Corpus`].
//! 3. [`rank`] produces a verified [`RankedLexicon`]; [`CorpusStats`] is
//!    computed from the corpus and the ranked lexicon.
//!
//! # Example
//! ```rust
//! use taglex::{Aggregator, CorpusStats, SentenceReader, Silent, rank};
//!
//! # fn main() -> taglex::Result<()> {
//! let mut agg = Aggregator::new();
//! SentenceReader::new(Silent).read_into("dog N run V\ndog N\n".as_bytes(), &mut agg)?;
//! let corpus = agg.finish();
//!
//! let lexicon = rank(&corpus, false)?;
//! let mut out = Vec::new();
//! lexicon.write_to(&mut out)?;
//! assert_eq!(String::from_utf8(out).unwrap(), "dog N 2\nrun V 1\n");
//!
//! let stats = CorpusStats::compute(&corpus, &lexicon);
//! assert_eq!(stats.mean_ambiguity, 1.0);
//! assert!((stats.entropy - 0.918).abs() < 1e-3);
//! # Ok(()) }
//! ```

pub mod aggregate;
pub mod error;
pub mod lexicon;
pub mod rank;
pub mod reader;
pub mod stats;

pub use aggregate::{Aggregator, Corpus};
pub use error::{EntryError, LexiconError, Result};
pub use lexicon::{LexiconEntry, TagFreq, read_lexicon};
pub use rank::{RankedLexicon, rank, rank_tags};
pub use reader::{
    DEFAULT_PROGRESS_INTERVAL, Progress, SentenceReader, Silent, fields, is_separator, split_pairs,
};
pub use stats::{AmbiguityClass, AmbiguityTable, CorpusStats, tag_entropy};
