use std::io::{self, Write};

use taglex::Progress;

/// Writes `<n> sentences` progress lines to a diagnostics stream.
///
/// Intermediate counts end in a carriage return so a terminal overwrites
/// them in place; the final count ends the line.
#[derive(Debug)]
pub struct DiagnosticProgress<W> {
    out: W,
}

impl<W: Write> DiagnosticProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Progress for DiagnosticProgress<W> {
    fn tick(&mut self, sentences: u64) -> io::Result<()> {
        write!(self.out, "{sentences} sentences\r")?;
        self.out.flush()
    }

    fn finished(&mut self, sentences: u64) -> io::Result<()> {
        writeln!(self.out, "{sentences} sentences")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_ticks_and_ends_line() {
        let mut buf = Vec::new();
        let mut progress = DiagnosticProgress::new(&mut buf);
        progress.tick(100).unwrap();
        progress.tick(200).unwrap();
        progress.finished(250).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "100 sentences\r200 sentences\r250 sentences\n"
        );
    }
}
