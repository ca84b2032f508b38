//! Handles all user-facing output for completed runs.
//!
//! The harness itself never prints; it hands a [`TestRun`] to a [`Reporter`].
//! Centralizing rendering here keeps the run loop pure and gives every
//! command the same look. Reporters are plain values scoped to a single run;
//! there is no shared console object.

use std::io::{self, Write};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::harness::TestRun;
use crate::suite::SuiteInfo;

const RULE_WIDTH: usize = 62;

/// Renders one completed run.
pub trait Reporter {
    fn report(&mut self, run: &TestRun) -> io::Result<()>;
}

// ============================================================================
// CONSOLE REPORTER
// ============================================================================

/// Colored console reporter: title header, one row per case, summary block,
/// and an environment panel with the suite metadata.
pub struct ConsoleReporter {
    info: SuiteInfo,
    color: ColorChoice,
}

impl ConsoleReporter {
    /// Creates a reporter that colors output only when stdout is a terminal.
    pub fn new(info: SuiteInfo) -> Self {
        let color = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self { info, color }
    }

    /// Disables colored output unconditionally.
    pub fn no_color(mut self) -> Self {
        self.color = ColorChoice::Never;
        self
    }

    /// Renders the report into any color-capable writer.
    pub fn render<W: WriteColor>(&self, out: &mut W, run: &TestRun) -> io::Result<()> {
        self.render_header(out, run)?;
        self.render_rows(out, run)?;
        self.render_summary(out, run)?;
        self.render_environment(out)
    }

    /// Renders with colors stripped into a plain byte buffer.
    pub fn render_plain(&self, run: &TestRun) -> io::Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.render(&mut out, run)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }

    fn render_header<W: WriteColor>(&self, out: &mut W, run: &TestRun) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        writeln!(out, "{} test suite", self.info.product)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        writeln!(
            out,
            "team: {} | version: {}",
            self.info.team, self.info.version
        )?;
        out.reset()?;
        rule(
            out,
            &format!("run started {}", format_timestamp(run.summary.started_at)),
        )
    }

    fn render_rows<W: WriteColor>(&self, out: &mut W, run: &TestRun) -> io::Result<()> {
        for result in &run.results {
            if result.passed {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
                write!(out, "PASS")?;
            } else {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
                write!(out, "FAIL")?;
            }
            out.reset()?;
            writeln!(out, ": {}", result.name)?;
            if let Some(error) = &result.error {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                writeln!(out, "      error: {error}")?;
                out.reset()?;
            }
        }
        Ok(())
    }

    fn render_summary<W: WriteColor>(&self, out: &mut W, run: &TestRun) -> io::Result<()> {
        let summary = &run.summary;
        rule(out, "summary")?;
        let all_passed = summary.failed == 0;
        let border = if all_passed { Color::Green } else { Color::Red };
        out.set_color(ColorSpec::new().set_fg(Some(border)).set_bold(true))?;
        writeln!(
            out,
            "total {} | passed {} | failed {}",
            summary.total, summary.passed, summary.failed
        )?;
        out.reset()?;
        writeln!(out, "pass rate: {:.1}%", summary.pass_rate() * 100.0)?;
        writeln!(out, "duration:  {:.3} s", summary.duration.as_secs_f64())?;
        writeln!(out, "started:   {}", format_timestamp(summary.started_at))?;
        writeln!(out, "finished:  {}", format_timestamp(summary.ended_at))
    }

    fn render_environment<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        rule(out, "environment")?;
        writeln!(out, "product:     {}", self.info.product)?;
        writeln!(out, "team:        {}", self.info.team)?;
        writeln!(out, "environment: {}", self.info.environment)?;
        writeln!(out, "version:     {}", self.info.version)
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, run: &TestRun) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color);
        self.render(&mut stdout, run)
    }
}

// ============================================================================
// JSON REPORTER
// ============================================================================

/// Machine-readable reporter: one pretty-printed JSON document per run.
pub struct JsonReporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, run: &TestRun) -> io::Result<()> {
        let summary = &run.summary;
        let doc = serde_json::json!({
            "results": run.results,
            "summary": {
                "total": summary.total,
                "passed": summary.passed,
                "failed": summary.failed,
                "pass_rate": summary.pass_rate(),
                "started_at": format_timestamp(summary.started_at),
                "ended_at": format_timestamp(summary.ended_at),
                "duration_seconds": summary.duration.as_secs_f64(),
            },
        });
        let text = serde_json::to_string_pretty(&doc)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(self.writer, "{text}")
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

/// Writes a horizontal rule with an embedded label.
fn rule<W: WriteColor>(out: &mut W, label: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    let pad = RULE_WIDTH.saturating_sub(label.len() + 6);
    writeln!(out, "--- {label} {}", "-".repeat(pad.max(3)))?;
    out.reset()
}

/// Millisecond-precision local timestamp.
fn format_timestamp(at: SystemTime) -> String {
    DateTime::<Local>::from(at)
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string()
}
