//! Streaming report output.
//!
//! Each report line is written and flushed as soon as its probe finishes, so
//! completed lines survive a later crash or hang.

use std::io::{self, Write};

use crate::models::{Locale, ProbeReport};

/// Receives each probe report as soon as it exists.
pub trait ResultSink {
    fn emit(&mut self, report: &ProbeReport) -> io::Result<()>;
}

/// Collects reports in memory.
impl ResultSink for Vec<ProbeReport> {
    fn emit(&mut self, report: &ProbeReport) -> io::Result<()> {
        self.push(report.clone());
        Ok(())
    }
}

/// Render one human-readable report line (no trailing newline).
///
/// Elapsed seconds use 4 decimals, scores 2.
pub fn format_report_line(report: &ProbeReport, locale: Locale) -> String {
    match (report, locale) {
        (ProbeReport::Completed(result), Locale::English) => format!(
            "{}: {:.4} {}, score: {:.2}",
            result.name,
            result.elapsed_seconds,
            locale.seconds_unit(),
            result.score
        ),
        (ProbeReport::Completed(result), Locale::Chinese) => format!(
            "{}: {:.4} {}，得分: {:.2}",
            result.name,
            result.elapsed_seconds,
            locale.seconds_unit(),
            result.score
        ),
        (ProbeReport::Failed { name, error, .. }, Locale::English) => {
            format!("{}: failed ({}), score: N/A", name, error)
        }
        (ProbeReport::Failed { name, error, .. }, Locale::Chinese) => {
            format!("{}: 失败 ({})，得分: N/A", name, error)
        }
    }
}

/// Writes one line per report to `writer`, flushing after each.
pub struct LineReporter<W: Write> {
    writer: W,
    locale: Locale,
}

impl<W: Write> LineReporter<W> {
    pub fn new(writer: W, locale: Locale) -> Self {
        LineReporter { writer, locale }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for LineReporter<W> {
    fn emit(&mut self, report: &ProbeReport) -> io::Result<()> {
        writeln!(self.writer, "{}", format_report_line(report, self.locale))?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProbeId, ProbeResult};

    fn completed(elapsed: f64, score: f64) -> ProbeReport {
        ProbeReport::Completed(ProbeResult::new(
            ProbeId::SingleCore,
            ProbeId::SingleCore.display_name(Locale::English),
            elapsed,
            score,
        ))
    }

    #[test]
    fn test_english_line() {
        assert_eq!(
            format_report_line(&completed(5.0, 100.0), Locale::English),
            "Single-core performance: 5.0000 s, score: 100.00"
        );
    }

    #[test]
    fn test_rounding() {
        assert_eq!(
            format_report_line(&completed(1.234567, 405.0123), Locale::English),
            "Single-core performance: 1.2346 s, score: 405.01"
        );
    }

    #[test]
    fn test_chinese_line() {
        let report = ProbeReport::Completed(ProbeResult::new(
            ProbeId::SingleCore,
            ProbeId::SingleCore.display_name(Locale::Chinese),
            2.5,
            200.0,
        ));
        assert_eq!(
            format_report_line(&report, Locale::Chinese),
            "单核性能: 2.5000 秒，得分: 200.00"
        );
    }

    #[test]
    fn test_failed_line() {
        let report = ProbeReport::Failed {
            probe: ProbeId::FileIo,
            name: "File I/O performance".to_string(),
            error: "disk full".to_string(),
        };
        assert_eq!(
            format_report_line(&report, Locale::English),
            "File I/O performance: failed (disk full), score: N/A"
        );
    }

    #[test]
    fn test_line_reporter_writes_one_line_per_report() {
        let mut reporter = LineReporter::new(Vec::new(), Locale::English);
        reporter.emit(&completed(5.0, 100.0)).unwrap();
        reporter.emit(&completed(10.0, 50.0)).unwrap();
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("score: 50.00"));
    }
}
