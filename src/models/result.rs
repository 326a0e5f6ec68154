use std::sync::atomic::{AtomicUsize, Ordering};

use crate::analyzer::Verdict;
use crate::error::ProbeError;

/// Outcome of one GET against a candidate URL.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub url: String,
    pub status: u16,
    pub final_url: String,
    pub redirected: bool,
    pub error: Option<ProbeError>,
}

impl ProbeResult {
    pub fn new(url: String, status: u16, final_url: String, redirected: bool) -> Self {
        Self {
            url,
            status,
            final_url,
            redirected,
            error: None,
        }
    }

    pub fn error(url: String, err: ProbeError) -> Self {
        Self {
            final_url: url.clone(),
            url,
            status: 0,
            redirected: false,
            error: Some(err),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Counters updated by every worker of a run.
#[derive(Debug, Default)]
pub struct ScanStats {
    probed: AtomicUsize,
    found: AtomicUsize,
    restricted: AtomicUsize,
    unexpected: AtomicUsize,
    failed: AtomicUsize,
}

impl ScanStats {
    pub fn record(&self, verdict: Verdict) {
        self.probed.fetch_add(1, Ordering::Relaxed);
        let counter = match verdict {
            Verdict::Found => &self.found,
            Verdict::Restricted => &self.restricted,
            Verdict::Unexpected => &self.unexpected,
            Verdict::Unreachable => &self.failed,
            Verdict::NotFound => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn summary(&self, duration_ms: u64) -> ScanSummary {
        ScanSummary {
            probed: self.probed.load(Ordering::Relaxed),
            found: self.found.load(Ordering::Relaxed),
            restricted: self.restricted.load(Ordering::Relaxed),
            unexpected: self.unexpected.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            duration_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub probed: usize,
    pub found: usize,
    pub restricted: usize,
    pub unexpected: usize,
    pub failed: usize,
    pub duration_ms: u64,
}

impl ScanSummary {
    pub fn not_found(&self) -> usize {
        self.probed - self.found - self.restricted - self.unexpected - self.failed
    }
}
