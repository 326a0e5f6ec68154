use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, Url};

use crate::error::ProbeError;
use crate::models::ProbeResult;

/// Shared client for every request of a run. Redirects are followed with
/// reqwest's default policy and the final URL is kept on the result.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    pub async fn get(&self, url: &str) -> Result<Response, ProbeError> {
        self.client.get(url).send().await.map_err(map_reqwest_error)
    }

    pub async fn probe(&self, url: String) -> ProbeResult {
        let requested = match Url::parse(&url) {
            Ok(parsed) => parsed,
            Err(e) => return ProbeResult::error(url, ProbeError::Transport(e.to_string())),
        };

        match self
            .client
            .get(requested.clone())
            .send()
            .await
            .map_err(map_reqwest_error)
        {
            Ok(response) => {
                let status = response.status().as_u16();
                // Compare parsed forms so percent-encoding alone does not
                // look like a redirect.
                let redirected = response.url() != &requested;
                let final_url = response.url().to_string();
                ProbeResult::new(url, status, final_url, redirected)
            }
            Err(e) => ProbeResult::error(url, e),
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ProbeError {
    if err.is_timeout() {
        return ProbeError::Timeout;
    }
    ProbeError::Transport(err.to_string())
}
