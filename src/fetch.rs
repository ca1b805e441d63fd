//! URL convenience entry point.
//!
//! One HTTP GET, strict UTF-8 decoding, then the regular pipeline. This is
//! the only place the engine suspends; the extraction itself is synchronous.

use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::extract::Readability;
use crate::options::ExtractionConfig;
use crate::result::ReadabilityData;

const USER_AGENT: &str = concat!("rs-readability/", env!("CARGO_PKG_VERSION"));

impl Readability {
    /// Fetch a URL and extract its readable content.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidUrl`] when the URL does not parse or is not HTTP(S).
    /// * [`Error::DecodingFailed`] when the response body is not valid UTF-8.
    /// * [`Error::ParsingFailed`] from the extraction pipeline.
    /// * [`Error::Unknown`] for transport failures and non-success statuses.
    pub async fn from_url(url: &str, config: ExtractionConfig) -> Result<ReadabilityData> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!("{url}: unsupported scheme")));
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Unknown(format!("failed to build HTTP client: {e}")))?;

        let response = client
            .get(parsed.as_str())
            .send()
            .await
            .map_err(|e| Error::Unknown(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Unknown(format!("unexpected status {status} for {parsed}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Unknown(format!("failed to read response body: {e}")))?;

        if config.verbose_logging {
            debug!(url = %parsed, bytes = bytes.len(), "fetched document");
        }

        let html = std::str::from_utf8(&bytes)
            .map_err(|e| Error::DecodingFailed(format!("{parsed}: {e}")))?;

        Readability::new(html, config)?.extract_readability_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_unparseable_urls() {
        let result = Readability::from_url("not a url", ExtractionConfig::default()).await;
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn rejects_non_http_schemes() {
        let result =
            Readability::from_url("file:///etc/passwd", ExtractionConfig::default()).await;
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
