//! Framing of cooked training text: one sentence per line, tokens alternating
//! word and tag. Lines are handled as raw bytes in whatever encoding the
//! corpus uses.

use std::io::{self, BufRead};

use tracing::debug;

use crate::aggregate::Aggregator;
use crate::error::{LexiconError, Result};

pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100;

/// Observer notified while sentences are read.
pub trait Progress {
    /// Called every time the running sentence count hits a multiple of the
    /// reader's interval.
    fn tick(&mut self, sentences: u64) -> io::Result<()>;

    /// Called once the input is exhausted.
    fn finished(&mut self, _sentences: u64) -> io::Result<()> {
        Ok(())
    }
}

/// Progress observer that reports nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Progress for Silent {
    fn tick(&mut self, _sentences: u64) -> io::Result<()> {
        Ok(())
    }
}

impl<P: Progress + ?Sized> Progress for &mut P {
    fn tick(&mut self, sentences: u64) -> io::Result<()> {
        (**self).tick(sentences)
    }

    fn finished(&mut self, sentences: u64) -> io::Result<()> {
        (**self).finished(sentences)
    }
}

/// Field separators: ASCII space, tab, line feed, vertical tab, form feed and
/// carriage return. Bytes outside ASCII never separate fields, so a
/// non-breaking space or a Latin-1 letter stays inside its token.
pub fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}

/// Non-empty fields of a raw line.
pub fn fields(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|b| is_separator(*b)).filter(|f| !f.is_empty())
}

/// Split one line into `(word, tag)` pairs. `line_no` is only used for the
/// error.
pub fn split_pairs(line: &[u8], line_no: usize) -> Result<Vec<(&[u8], &[u8])>> {
    let tokens: Vec<&[u8]> = fields(line).collect();
    if tokens.len() % 2 != 0 {
        return Err(LexiconError::OddTokenCount {
            line: line_no,
            tokens: tokens.len(),
        });
    }
    Ok(tokens.chunks_exact(2).map(|p| (p[0], p[1])).collect())
}

/// Feeds lines from a reader into an [`Aggregator`], reporting progress.
#[derive(Debug)]
pub struct SentenceReader<P> {
    interval: u64,
    progress: P,
}

impl<P: Progress> SentenceReader<P> {
    pub fn new(progress: P) -> Self {
        Self {
            interval: DEFAULT_PROGRESS_INTERVAL,
            progress,
        }
    }

    /// Report every `interval` sentences; zero falls back to the default.
    pub fn with_interval(mut self, interval: u64) -> Self {
        self.interval = if interval == 0 {
            DEFAULT_PROGRESS_INTERVAL
        } else {
            interval
        };
        self
    }

    pub fn read_into<R: BufRead>(&mut self, reader: R, aggregator: &mut Aggregator) -> Result<()> {
        for (idx, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            let pairs = split_pairs(&line, idx + 1)?;
            aggregator.ingest(pairs);

            let sentences = aggregator.sentences();
            if sentences % self.interval == 0 {
                debug!(sentences, tokens = aggregator.tokens(), "reading");
                self.progress.tick(sentences)?;
            }
        }
        self.progress.finished(aggregator.sentences())?;
        Ok(())
    }

    pub fn into_progress(self) -> P {
        self.progress
    }
}
