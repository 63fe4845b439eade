//! Command-line front end for [`taglex`]: cooked sentences on stdin, the
//! lexicon on stdout, progress and corpus statistics on stderr.

pub mod config;
pub mod progress;

use std::io::{self, BufRead, Write};

use taglex::{Aggregator, CorpusStats, LexiconError, SentenceReader, rank};

pub use config::{Config, PROGRESS_ENV, UsageError, program_name, usage};
pub use progress::DiagnosticProgress;

/// Read every sentence, then write the lexicon to `output` and the report to
/// `diagnostics`. Nothing reaches `output` unless the whole lexicon verifies.
pub fn run<R, W, E>(
    config: &Config,
    input: R,
    mut output: W,
    mut diagnostics: E,
) -> taglex::Result<CorpusStats>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut aggregator = Aggregator::new();
    SentenceReader::new(DiagnosticProgress::new(&mut diagnostics))
        .with_interval(config.progress_every)
        .read_into(input, &mut aggregator)?;
    let corpus = aggregator.finish();

    let lexicon = rank(&corpus, config.with_counts)?;
    lexicon.write_to(&mut output)?;
    output.flush()?;

    let stats = CorpusStats::compute(&corpus, &lexicon);
    stats.write_report(&mut diagnostics)?;
    diagnostics.flush()?;
    Ok(stats)
}

/// Write the fatal-error line for a failed run. An inconsistent word is
/// written with its original bytes.
pub fn report_failure<W: Write>(mut out: W, err: &anyhow::Error) -> io::Result<()> {
    match err.downcast_ref::<LexiconError>() {
        Some(LexiconError::Inconsistency { word, .. }) => {
            out.write_all(b"ERROR: inconsistency for ")?;
            out.write_all(word)?;
            out.write_all(b"\n")?;
        }
        _ => writeln!(out, "ERROR: {err:#}")?,
    }
    out.flush()
}
