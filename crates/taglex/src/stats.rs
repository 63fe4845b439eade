//! Corpus-level ambiguity and entropy figures.
//!
//! Everything here is computed from a frozen [`Corpus`] and the ambiguity
//! classes collected by [`crate::rank`]. An empty corpus reports zero mean
//! ambiguity, zero entropy and zero percentages instead of dividing by zero.

use std::io::Write;

use tracing::warn;

use crate::aggregate::Corpus;
use crate::rank::RankedLexicon;

/// Word types and word tokens sharing one ambiguity degree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AmbiguityClass {
    pub types: u64,
    pub tokens: u64,
}

/// Ambiguity classes indexed by degree, `1..=max_degree()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AmbiguityTable {
    classes: Vec<AmbiguityClass>,
}

impl AmbiguityTable {
    /// Account for one word type seen with `degree` distinct tags.
    pub fn record(&mut self, degree: usize, tokens: u64) {
        if degree == 0 {
            return;
        }
        if self.classes.len() < degree {
            self.classes.resize(degree, AmbiguityClass::default());
        }
        let class = &mut self.classes[degree - 1];
        class.types += 1;
        class.tokens += tokens;
    }

    pub fn max_degree(&self) -> usize {
        self.classes.len()
    }

    /// Class for `degree`; degrees nobody reached are all zeros.
    pub fn class(&self, degree: usize) -> AmbiguityClass {
        degree
            .checked_sub(1)
            .and_then(|i| self.classes.get(i))
            .copied()
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, AmbiguityClass)> + '_ {
        self.classes.iter().enumerate().map(|(i, c)| (i + 1, *c))
    }

    /// Token-weighted mean degree.
    pub fn mean_ambiguity(&self, tokens: u64) -> f64 {
        if tokens == 0 {
            return 0.0;
        }
        let weighted: f64 = self
            .iter()
            .map(|(degree, class)| degree as f64 * class.tokens as f64)
            .sum();
        weighted / tokens as f64
    }
}

/// Shannon entropy, in bits, of the tag distribution.
pub fn tag_entropy(corpus: &Corpus) -> f64 {
    let total = corpus.tokens();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    let mut entropy = 0.0;
    for (_, count) in corpus.tags() {
        let p = count as f64 / total;
        entropy -= p * p.log2();
    }
    entropy
}

fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CorpusStats {
    pub sentences: u64,
    pub tag_types: usize,
    pub word_types: usize,
    pub tokens: u64,
    pub mean_ambiguity: f64,
    pub entropy: f64,
    pub ambiguity: AmbiguityTable,
}

impl CorpusStats {
    pub fn compute(corpus: &Corpus, lexicon: &RankedLexicon) -> Self {
        if corpus.tokens() == 0 {
            warn!("empty corpus, reporting zero ambiguity and entropy");
        }
        let ambiguity = lexicon.ambiguity().clone();
        Self {
            sentences: corpus.sentences(),
            tag_types: corpus.tag_types(),
            word_types: corpus.word_types(),
            tokens: corpus.tokens(),
            mean_ambiguity: ambiguity.mean_ambiguity(corpus.tokens()),
            entropy: tag_entropy(corpus),
            ambiguity,
        }
    }

    /// Summary line, one row per ambiguity degree, mean ambiguity and entropy.
    pub fn write_report<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        writeln!(
            out,
            "{} tags {} types {} tokens",
            self.tag_types, self.word_types, self.tokens
        )?;
        let word_types = self.word_types as u64;
        for degree in 1..=self.ambiguity.max_degree() {
            let class = self.ambiguity.class(degree);
            writeln!(
                out,
                "{:3} {:9} {:7.3}% {:9} {:7.3}% ",
                degree,
                class.types,
                percent(class.types, word_types),
                class.tokens,
                percent(class.tokens, self.tokens)
            )?;
        }
        writeln!(out, "Mean ambiguity A={:.6}", self.mean_ambiguity)?;
        writeln!(out)?;
        writeln!(out, "Entropy H(p)={:.6}", self.entropy)?;
        Ok(())
    }
}
