use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use tokio::signal;

use dirlister::cli::Cli;
use dirlister::{
    ConsoleReporter, DictionaryBuilder, HttpClient, ProbeEngine, ScanConfig, WorkQueue,
    fetch_dictionary, logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    tokio::select! {
        result = run(cli) => result,
        _ = signal::ctrl_c() => {
            println!("\n{} Exiting...", "[!]".yellow().bold());
            // A pending stdin read would otherwise hold the runtime open.
            std::process::exit(0);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Arc::new(ScanConfig::from_cli(&cli).context("Invalid arguments")?);
    let client = Arc::new(
        HttpClient::new(&config.user_agent, config.timeout)
            .context("Failed to create HTTP client")?,
    );

    let plus = "[+]".green();

    println!("{} Retrieving wordlist from {} ...", plus, config.dictionary_url);
    let text = fetch_dictionary(&client, &config.dictionary_url)
        .await
        .context("Cannot continue without a wordlist")?;
    println!(
        "{} Loaded {} words from {}",
        plus,
        text.lines().count(),
        config.dictionary_url
    );

    println!(
        "{} Building dictionary with extensions {:?} ...",
        plus, config.extensions
    );
    let candidates = DictionaryBuilder::build(&text, &config.extensions);
    println!("{} The final dictionary has {} words", plus, candidates.len());

    println!(
        "{} Ready to do directory discovery on {}",
        plus,
        config.target_url.bold()
    );
    if !cli.yes {
        println!("{} Press enter to continue", plus);
        wait_for_enter().await?;
    }

    println!(
        "{} Spawning {} threads at {}",
        plus,
        config.threads,
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let total = candidates.len();
    let queue: Arc<WorkQueue> = Arc::new(candidates.into_iter().collect());
    let reporter = Arc::new(ConsoleReporter::new(total, cli.verbose));
    let engine = ProbeEngine::with_client(config, client);

    let summary = engine.run(queue, reporter.clone()).await;

    reporter.finish();
    reporter.print_summary(&summary);
    Ok(())
}

async fn wait_for_enter() -> Result<()> {
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line).map(|_| ())
    })
    .await?
    .context("Failed to read from stdin")
}
