use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::analyzer::Verdict;
use crate::models::{ProbeResult, ScanSummary};

/// Receives every classified probe and the advisory queue size.
pub trait ReportSink: Send + Sync {
    fn remaining(&self, left: usize);
    fn record(&self, result: &ProbeResult, verdict: Verdict);
}

/// Renders the result line for a probe, or `None` when it stays silent.
pub fn format_line(result: &ProbeResult, verdict: Verdict) -> Option<String> {
    match verdict {
        Verdict::Found if result.redirected => Some(format!(
            "  {} [{}]: {} -> {}",
            "[*]".green().bold(),
            result.status,
            result.url,
            result.final_url
        )),
        Verdict::Found => Some(format!(
            "  {} [{}]: {}",
            "[*]".green().bold(),
            result.status,
            result.url
        )),
        Verdict::Restricted => Some(format!(
            "  {} [{}]: {}",
            "[!]".yellow().bold(),
            result.status,
            result.url
        )),
        Verdict::Unexpected => Some(format!(
            "  {} [{}]: {}",
            "[?]".cyan(),
            result.status,
            result.url
        )),
        Verdict::NotFound | Verdict::Unreachable => None,
    }
}

pub struct ConsoleReporter {
    pb: ProgressBar,
}

impl ConsoleReporter {
    /// With `verbose` the bar is hidden: debug records share stderr with it
    /// and would tear the progress line.
    pub fn new(total: usize, verbose: bool) -> Self {
        let pb = if verbose {
            ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::hidden())
        } else {
            ProgressBar::new(total as u64)
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );

        Self { pb }
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    pub fn print_summary(&self, summary: &ScanSummary) {
        println!("\n{}", "Summary".bold().underline());
        println!(
            "{} paths probed in {:.2}s",
            summary.probed,
            summary.duration_ms as f64 / 1000.0
        );
        println!("  {}: {}", "FOUND".green().bold(), summary.found);
        println!("  {}: {}", "RESTRICTED".yellow(), summary.restricted);
        if summary.unexpected > 0 {
            println!("  {}: {}", "UNEXPECTED".cyan(), summary.unexpected);
        }
        if summary.failed > 0 {
            println!("  {}: {}", "FAILED".red(), summary.failed);
        }
        println!("  {}: {}", "NOT FOUND".dimmed(), summary.not_found());
        println!();
    }
}

impl ReportSink for ConsoleReporter {
    fn remaining(&self, left: usize) {
        self.pb.set_message(format!("{} dirs left", left));
    }

    fn record(&self, result: &ProbeResult, verdict: Verdict) {
        self.pb.inc(1);
        if let Some(line) = format_line(result, verdict) {
            // println on the bar is a no-op when stderr is not a terminal.
            self.pb.suspend(|| println!("{}", line));
        }
    }
}
