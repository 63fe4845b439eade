use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::io::Write;

use tracing::{debug, info};

use crate::aggregate::Corpus;
use crate::error::{LexiconError, Result};
use crate::lexicon::{LexiconEntry, TagFreq};
use crate::stats::AmbiguityTable;

/// Verified lexicon entries in ascending word order, plus the ambiguity
/// classes tallied while ranking them.
#[derive(Debug, Clone)]
pub struct RankedLexicon {
    entries: Vec<LexiconEntry>,
    ambiguity: AmbiguityTable,
}

impl RankedLexicon {
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn ambiguity(&self) -> &AmbiguityTable {
        &self.ambiguity
    }

    /// Write one line per entry, words and tags byte for byte.
    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for entry in &self.entries {
            entry.write_to(&mut out)?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// Order tags by descending frequency, ties broken by ascending tag.
pub fn rank_tags(tags: &BTreeMap<Vec<u8>, u64>) -> Vec<TagFreq> {
    let mut ranked: Vec<TagFreq> = tags
        .iter()
        .map(|(tag, freq)| TagFreq::new(tag.as_slice(), *freq))
        .collect();
    ranked.sort_unstable_by(|a, b| (Reverse(a.freq), &a.tag).cmp(&(Reverse(b.freq), &b.tag)));
    ranked
}

/// Rank every word's tags and check that its joint counts add up to its total.
///
/// Fails on the first word whose partition is off; no entries are returned
/// in that case, so nothing of a broken corpus reaches the output.
pub fn rank(corpus: &Corpus, with_counts: bool) -> Result<RankedLexicon> {
    let mut entries = Vec::with_capacity(corpus.word_types());
    let mut ambiguity = AmbiguityTable::default();
    let empty = BTreeMap::new();

    for (word, total) in corpus.words() {
        let tags = rank_tags(corpus.tags_for(word).unwrap_or(&empty));

        let found: u64 = tags.iter().map(|t| t.freq).sum();
        if found != total {
            debug!(
                word = %String::from_utf8_lossy(word),
                expected = total,
                found,
                "joint counts do not add up"
            );
            return Err(LexiconError::Inconsistency {
                word: word.to_owned(),
                expected: total,
                found,
            });
        }

        ambiguity.record(tags.len(), total);
        entries.push(LexiconEntry {
            word: word.to_owned(),
            count: with_counts.then_some(total),
            tags,
        });
    }

    info!(
        entries = entries.len(),
        max_ambiguity = ambiguity.max_degree(),
        "lexicon ranked"
    );
    Ok(RankedLexicon { entries, ambiguity })
}
