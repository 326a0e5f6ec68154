use clap::Parser;

use crate::config::{DEFAULT_THREADS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

#[derive(Parser)]
#[command(name = "dirlister")]
#[command(
    version,
    about = "HTTP directory lister that retrieves its wordlist over HTTP",
    after_help = "Examples:\n  dirlister -u http://10.0.0.103 -d https://host/directory-list-2.3-medium.txt -e html,txt -t 20\n  dirlister -u http://10.0.0.103 -d https://host/directory-list-2.3-medium.txt"
)]
pub struct Cli {
    /// Target URL, e.g. http://10.0.0.103
    #[arg(short, long)]
    pub url: String,

    /// Wordlist URL
    #[arg(short, long)]
    pub dict: String,

    /// Number of concurrent workers
    #[arg(short, long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// File extensions to test, separated by "," (e.g. html,txt)
    #[arg(short, long, default_value = "")]
    pub ext: String,

    /// Per-request timeout in seconds, 0 to wait forever
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Start probing without waiting for Enter
    #[arg(short, long)]
    pub yes: bool,

    #[arg(short, long)]
    pub verbose: bool,
}
