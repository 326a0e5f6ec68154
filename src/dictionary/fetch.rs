use log::debug;

use crate::error::DictionaryError;
use crate::http::HttpClient;

/// Downloads the wordlist and decodes it as UTF-8 text.
pub async fn fetch_dictionary(client: &HttpClient, url: &str) -> Result<String, DictionaryError> {
    let fetch_error = |reason: String| DictionaryError::Fetch {
        url: url.to_string(),
        reason,
    };

    let response = client.get(url).await.map_err(|e| fetch_error(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(fetch_error(format!("server answered {}", status)));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| fetch_error(e.to_string()))?;
    debug!("downloaded {} bytes of wordlist from {}", bytes.len(), url);

    String::from_utf8(bytes.to_vec()).map_err(|source| DictionaryError::Decode {
        url: url.to_string(),
        source,
    })
}
