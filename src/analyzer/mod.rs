mod status;

pub use status::{StatusAnalyzer, Verdict};
