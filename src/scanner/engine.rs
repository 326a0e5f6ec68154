use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use futures::future::join_all;
use log::{debug, info, warn};

use super::WorkQueue;
use crate::analyzer::StatusAnalyzer;
use crate::config::ScanConfig;
use crate::http::HttpClient;
use crate::models::{ScanStats, ScanSummary};
use crate::reporter::ReportSink;

pub struct ProbeEngine {
    client: Arc<HttpClient>,
    config: Arc<ScanConfig>,
}

impl ProbeEngine {
    pub fn new(config: Arc<ScanConfig>) -> Result<Self> {
        let client = HttpClient::new(&config.user_agent, config.timeout)?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    pub fn with_client(config: Arc<ScanConfig>, client: Arc<HttpClient>) -> Self {
        Self { client, config }
    }

    /// Spawns `config.threads` workers and waits until every one of them has
    /// found the queue empty.
    pub async fn run(&self, queue: Arc<WorkQueue>, sink: Arc<dyn ReportSink>) -> ScanSummary {
        let start = Instant::now();
        let stats = Arc::new(ScanStats::default());

        info!(
            "probing {} with {} workers, {} candidates queued",
            self.config.target_url,
            self.config.threads,
            queue.len()
        );

        let workers: Vec<_> = (0..self.config.threads)
            .map(|id| {
                tokio::spawn(worker(
                    id,
                    self.client.clone(),
                    self.config.clone(),
                    queue.clone(),
                    sink.clone(),
                    stats.clone(),
                ))
            })
            .collect();

        for joined in join_all(workers).await {
            if let Err(e) = joined {
                warn!("worker stopped abnormally: {}", e);
            }
        }

        let summary = stats.summary(start.elapsed().as_millis() as u64);
        info!("probing finished: {} candidates in {} ms", summary.probed, summary.duration_ms);
        summary
    }
}

async fn worker(
    id: usize,
    client: Arc<HttpClient>,
    config: Arc<ScanConfig>,
    queue: Arc<WorkQueue>,
    sink: Arc<dyn ReportSink>,
    stats: Arc<ScanStats>,
) {
    debug!("worker {} started", id);

    while let Some(candidate) = queue.pop() {
        sink.remaining(queue.len());

        let result = client.probe(config.url_for(&candidate)).await;
        if let Some(err) = &result.error {
            debug!("skipping {}: {}", result.url, err);
        }

        let verdict = StatusAnalyzer::classify(&result);
        stats.record(verdict);
        sink.record(&result, verdict);
    }

    debug!("worker {} done", id);
}
