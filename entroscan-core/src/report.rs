//! Reporting: rendering the final verdict registry for a consumer.

use std::io::Write;

use crate::coordinator::ScanOutcome;

/// Renders a completed scan for a human or downstream consumer. The core
/// mandates no particular format; the CLI supplies table and JSON sinks.
pub trait ReportSink {
    fn report(&mut self, outcome: &ScanOutcome) -> anyhow::Result<()>;
}

/// Minimal line-per-file renderer onto any writer, usable without the CLI.
pub struct PlainTextReport<W: Write> {
    writer: W,
}

impl<W: Write> PlainTextReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportSink for PlainTextReport<W> {
    fn report(&mut self, outcome: &ScanOutcome) -> anyhow::Result<()> {
        writeln!(self.writer, "--- Summary of File Entropy Statuses ---")?;
        for (file, verdict) in &outcome.registry {
            writeln!(self.writer, "File: {} | Status: {verdict}", file.display())?;
        }
        for note in &outcome.quarantine_notes {
            match &note.result {
                Ok(dest) => writeln!(
                    self.writer,
                    "Quarantined: {} -> {}",
                    note.file.display(),
                    dest.display()
                )?,
                Err(e) => writeln!(
                    self.writer,
                    "Quarantine failed: {}: {e}",
                    note.file.display()
                )?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entroscan_entropy::logic::FourValued;
    use std::path::PathBuf;

    #[test]
    fn test_plain_text_report_lists_every_entry() {
        let mut outcome = ScanOutcome::default();
        outcome
            .registry
            .insert(PathBuf::from("a.bin"), FourValued::False);
        outcome
            .registry
            .insert(PathBuf::from("b.bin"), FourValued::Neither);

        let mut buf = Vec::new();
        PlainTextReport::new(&mut buf).report(&outcome).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("File: a.bin | Status: False"));
        assert!(text.contains("File: b.bin | Status: Neither (No Info)"));
    }
}
