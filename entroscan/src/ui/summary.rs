// entroscan/src/ui/summary.rs
//! Rendering of per-block lines, per-file summaries, and the final
//! verdict registry (table and JSON).

use std::io::{self, Write};
use std::path::Path;

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;
use serde_json::json;

use entroscan_core::{
    BlockObservation, EntropyBand, FileSummary, FourValued, ReportSink, ScanOutcome,
};

/// Tag rendered next to each block, from the display bands. These bands
/// annotate output only; the verdict uses its own thresholds.
pub fn band_tag(band: EntropyBand) -> &'static str {
    match band {
        EntropyBand::Normal => "[NORMAL]    ",
        EntropyBand::Suspicious => "[SUSPICIOUS]",
        EntropyBand::Critical => "[CRITICAL!] ",
    }
}

fn colored_band_tag(band: EntropyBand) -> String {
    let tag = band_tag(band);
    match band {
        EntropyBand::Normal => tag.green().to_string(),
        EntropyBand::Suspicious => tag.yellow().to_string(),
        EntropyBand::Critical => tag.red().to_string(),
    }
}

/// Verdict text, colored when the target stream supports it.
pub fn verdict_label(verdict: FourValued, colored: bool) -> String {
    if !colored {
        return verdict.to_string();
    }
    match verdict {
        FourValued::False => verdict.to_string().green().to_string(),
        FourValued::True => verdict.to_string().red().to_string(),
        FourValued::Neither => verdict.to_string().yellow().to_string(),
        FourValued::Both => verdict.to_string().magenta().to_string(),
    }
}

/// One line per block: index, entropy to four decimals, band tag and a
/// bar proportional to the entropy.
pub fn write_block_line(
    out: &mut impl Write,
    observation: &BlockObservation,
    colored: bool,
) -> io::Result<()> {
    let tag = if colored {
        colored_band_tag(observation.band)
    } else {
        band_tag(observation.band).to_string()
    };
    let bar = "|".repeat((observation.entropy * 2.0) as usize);
    writeln!(
        out,
        "Block {:4} | Entropy: {:.4} | {} {}",
        observation.index, observation.entropy, tag, bar
    )
}

/// Per-file summary in the style of the per-block output: aggregate
/// statistics followed by the verdict.
pub fn write_file_summary(
    out: &mut impl Write,
    file: &Path,
    verdict: FourValued,
    summary: Option<&FileSummary>,
    colored: bool,
) -> io::Result<()> {
    writeln!(out, "\n[Summary] {}", file.display())?;
    match summary {
        Some(s) => {
            writeln!(out, "  Total Blocks:    {}", s.blocks)?;
            writeln!(out, "  Average Entropy: {:.4}", s.mean)?;
            writeln!(out, "  Min Entropy:     {:.4}", s.min)?;
            writeln!(out, "  Max Entropy:     {:.4}", s.max)?;
        }
        None => {
            writeln!(out, "  No data read from file.")?;
        }
    }
    writeln!(out, "  Verdict:         {}", verdict_label(verdict, colored))
}

/// Builds the final registry table, sorted by path for stable output.
/// The registry itself is unordered.
pub fn registry_table(outcome: &ScanOutcome, colored: bool) -> Table {
    let mut rows: Vec<_> = outcome.registry.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["File", "Verdict"]);

    for (file, verdict) in rows {
        let verdict_cell = if colored {
            Cell::new(verdict.to_string()).fg(match verdict {
                FourValued::False => Color::Green,
                FourValued::True => Color::Red,
                FourValued::Neither => Color::Yellow,
                FourValued::Both => Color::Magenta,
            })
        } else {
            Cell::new(verdict.to_string())
        };
        table.add_row(vec![Cell::new(file.display().to_string()), verdict_cell]);
    }

    table
}

/// Machine-readable rendering of a completed scan.
pub fn registry_json(outcome: &ScanOutcome) -> serde_json::Value {
    let mut rows: Vec<_> = outcome.registry.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let files: Vec<_> = rows
        .into_iter()
        .map(|(file, verdict)| {
            json!({
                "path": file.display().to_string(),
                "verdict": verdict.as_str(),
            })
        })
        .collect();

    let quarantine: Vec<_> = outcome
        .quarantine_notes
        .iter()
        .map(|note| match &note.result {
            Ok(dest) => json!({
                "file": note.file.display().to_string(),
                "status": "copied",
                "destination": dest.display().to_string(),
            }),
            Err(e) => json!({
                "file": note.file.display().to_string(),
                "status": "failed",
                "reason": e.to_string(),
            }),
        })
        .collect();

    json!({
        "files": files,
        "quarantine": quarantine,
    })
}

/// `ReportSink` that renders the registry as a table, with a quarantine
/// tally when any attempt was made.
pub struct TableReport<W: Write> {
    writer: W,
    colored: bool,
}

impl<W: Write> TableReport<W> {
    pub fn new(writer: W, colored: bool) -> Self {
        Self { writer, colored }
    }
}

impl<W: Write> ReportSink for TableReport<W> {
    fn report(&mut self, outcome: &ScanOutcome) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", registry_table(outcome, self.colored))?;
        if outcome.quarantine_attempts() > 0 {
            writeln!(
                self.writer,
                "Quarantine: {} attempted, {} failed",
                outcome.quarantine_attempts(),
                outcome.quarantine_failures()
            )?;
        }
        Ok(())
    }
}

/// `ReportSink` that renders the registry as pretty-printed JSON.
pub struct JsonReport<W: Write> {
    writer: W,
}

impl<W: Write> JsonReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    fn report(&mut self, outcome: &ScanOutcome) -> anyhow::Result<()> {
        let value = registry_json(outcome);
        writeln!(self.writer, "{}", serde_json::to_string_pretty(&value)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_band_tags() {
        assert!(band_tag(EntropyBand::Normal).contains("NORMAL"));
        assert!(band_tag(EntropyBand::Suspicious).contains("SUSPICIOUS"));
        assert!(band_tag(EntropyBand::Critical).contains("CRITICAL"));
    }

    #[test]
    fn test_block_line_bar_is_proportional() {
        let obs = BlockObservation {
            index: 3,
            len: 4096,
            entropy: 4.0,
            band: EntropyBand::Normal,
        };
        let mut buf = Vec::new();
        write_block_line(&mut buf, &obs, false).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.contains("Block    3"));
        assert!(line.contains("Entropy: 4.0000"));
        // entropy * 2 bar characters
        assert!(line.trim_end().ends_with(&"|".repeat(8)));
    }

    #[test]
    fn test_registry_json_shape() {
        let mut outcome = ScanOutcome::default();
        outcome
            .registry
            .insert(PathBuf::from("b.bin"), FourValued::True);
        outcome
            .registry
            .insert(PathBuf::from("a.bin"), FourValued::False);

        let value = registry_json(&outcome);
        let files = value["files"].as_array().unwrap();
        assert_eq!(files.len(), 2);
        // Sorted by path for stable output.
        assert_eq!(files[0]["path"], "a.bin");
        assert_eq!(files[0]["verdict"], "False");
        assert_eq!(files[1]["verdict"], "True");
        assert!(value["quarantine"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_table_report_renders_through_the_sink() {
        let mut outcome = ScanOutcome::default();
        outcome
            .registry
            .insert(PathBuf::from("a.bin"), FourValued::False);
        outcome
            .registry
            .insert(PathBuf::from("b.bin"), FourValued::True);

        let mut buf = Vec::new();
        TableReport::new(&mut buf, false).report(&outcome).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("a.bin"));
        assert!(text.contains("b.bin"));
        assert!(text.contains("False"));
        assert!(text.contains("True"));
        // No attempts were made, so no tally line is printed.
        assert!(!text.contains("Quarantine:"));
    }

    #[test]
    fn test_json_report_renders_through_the_sink() {
        let mut outcome = ScanOutcome::default();
        outcome
            .registry
            .insert(PathBuf::from("a.bin"), FourValued::Neither);

        let mut buf = Vec::new();
        JsonReport::new(&mut buf).report(&outcome).unwrap();
        let value: serde_json::Value =
            serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["files"][0]["path"], "a.bin");
        assert_eq!(value["files"][0]["verdict"], "Neither");
    }

    #[test]
    fn test_file_summary_without_data() {
        let mut buf = Vec::new();
        write_file_summary(
            &mut buf,
            Path::new("ghost.bin"),
            FourValued::Neither,
            None,
            false,
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("No data read from file."));
        assert!(text.contains("Neither (No Info)"));
    }
}
