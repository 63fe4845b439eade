//! Lexicon lines: `word [count] tag freq [tag freq ...]`.
//!
//! The same format is written by [`crate::RankedLexicon::write_to`] and read
//! back by taggers through [`LexiconEntry::parse`] / [`read_lexicon`]. Words
//! and tags are raw bytes; `Display` renders them lossily and is meant for
//! messages, [`LexiconEntry::write_to`] reproduces them exactly.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::error::{EntryError, LexiconError, Result};
use crate::reader::fields;

/// One tag observed for a word and how often.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagFreq {
    pub tag: Vec<u8>,
    pub freq: u64,
}

impl TagFreq {
    pub fn new(tag: impl Into<Vec<u8>>, freq: u64) -> Self {
        Self {
            tag: tag.into(),
            freq,
        }
    }
}

impl fmt::Display for TagFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", String::from_utf8_lossy(&self.tag), self.freq)
    }
}

/// A word with its ranked tags and, optionally, its total count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexiconEntry {
    pub word: Vec<u8>,
    pub count: Option<u64>,
    pub tags: Vec<TagFreq>,
}

impl LexiconEntry {
    /// Parse a lexicon line. `with_counts` says whether the word is followed
    /// by its total count.
    pub fn parse(line: &[u8], with_counts: bool) -> Result<Self, EntryError> {
        let mut tokens = fields(line);
        let word = tokens.next().ok_or(EntryError::MissingWord)?.to_vec();
        let count = if with_counts {
            let raw = tokens.next().ok_or(EntryError::MissingCount)?;
            Some(parse_number(raw)?)
        } else {
            None
        };

        let mut tags = Vec::new();
        while let Some(tag) = tokens.next() {
            let raw = tokens
                .next()
                .ok_or_else(|| EntryError::MissingFrequency(lossy(tag)))?;
            tags.push(TagFreq::new(tag, parse_number(raw)?));
        }
        if tags.is_empty() {
            return Err(EntryError::MissingTags);
        }

        Ok(Self { word, count, tags })
    }

    /// Sum of all tag frequencies.
    pub fn total(&self) -> u64 {
        self.tags.iter().map(|t| t.freq).sum()
    }

    /// The first-ranked tag, used by taggers as the word's default.
    pub fn best_tag(&self) -> Option<&[u8]> {
        self.tags.first().map(|t| t.tag.as_slice())
    }

    pub fn ambiguity(&self) -> usize {
        self.tags.len()
    }

    /// Write the line, without a trailing newline, byte for byte.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(&self.word)?;
        if let Some(count) = self.count {
            write!(out, " {count}")?;
        }
        for tag in &self.tags {
            out.write_all(b" ")?;
            out.write_all(&tag.tag)?;
            write!(out, " {}", tag.freq)?;
        }
        Ok(())
    }
}

impl fmt::Display for LexiconEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.word))?;
        if let Some(count) = self.count {
            write!(f, " {count}")?;
        }
        for tag in &self.tags {
            write!(f, " {tag}")?;
        }
        Ok(())
    }
}

fn lossy(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn parse_number(raw: &[u8]) -> Result<u64, EntryError> {
    std::str::from_utf8(raw)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| EntryError::InvalidNumber(lossy(raw)))
}

/// Read a whole lexicon, skipping blank lines.
pub fn read_lexicon<R: BufRead>(reader: R, with_counts: bool) -> Result<Vec<LexiconEntry>> {
    let mut entries = Vec::new();
    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        if fields(&line).next().is_none() {
            continue;
        }
        let entry = LexiconEntry::parse(&line, with_counts).map_err(|source| {
            LexiconError::MalformedEntry {
                line: idx + 1,
                source,
            }
        })?;
        entries.push(entry);
    }
    Ok(entries)
}
