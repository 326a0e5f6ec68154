mod console;

pub use console::{ConsoleReporter, ReportSink, format_line};
