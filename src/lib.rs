pub mod analyzer;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod http;
pub mod logging;
pub mod models;
pub mod reporter;
pub mod scanner;

pub use analyzer::{StatusAnalyzer, Verdict};
pub use config::ScanConfig;
pub use dictionary::{DictionaryBuilder, fetch_dictionary};
pub use error::{ConfigError, DictionaryError, ProbeError};
pub use http::HttpClient;
pub use models::{ProbeResult, ScanSummary};
pub use reporter::{ConsoleReporter, ReportSink};
pub use scanner::{ProbeEngine, WorkQueue};
