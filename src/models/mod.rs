mod result;

pub use result::{ProbeResult, ScanStats, ScanSummary};
