use crate::adapters::library_text::parse_library;
use crate::domain::model::GeneSetLibrary;
use crate::domain::ports::LibrarySource;
use crate::utils::error::{PathwayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENRICHR_URL: &str = "https://maayanlab.cloud/Enrichr";

#[derive(Debug, Deserialize)]
struct DatasetStatistics {
    statistics: Vec<LibraryStatistic>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibraryStatistic {
    library_name: String,
}

/// Downloads gene set libraries from an Enrichr server.
#[derive(Debug, Clone)]
pub struct EnrichrClient {
    client: Client,
    base_url: String,
    retry_attempts: u32,
    retry_delay: Duration,
}

impl EnrichrClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_settings(base_url, Duration::from_secs(60), 3, Duration::from_secs(2))
    }

    pub fn with_settings(
        base_url: impl Into<String>,
        timeout: Duration,
        retry_attempts: u32,
        retry_delay: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pathway-filter/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry_attempts: retry_attempts.max(1),
            retry_delay,
        })
    }

    async fn get_text(&self, library: &str, path: &str, query: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}/{}", self.base_url, path);
        let mut last_error = None;

        for attempt in 1..=self.retry_attempts {
            tracing::debug!("GET {} (attempt {}/{})", url, attempt, self.retry_attempts);

            match self.client.get(&url).query(query).send().await {
                Ok(response) if response.status().is_success() => {
                    return Ok(response.text().await?);
                }
                Ok(response) => {
                    let status = response.status();
                    tracing::warn!("Library server answered {} for {}", status, url);
                    last_error = Some(PathwayError::LibraryFetch {
                        library: library.to_string(),
                        message: format!("server returned status {}", status),
                    });
                    // 4xx will not get better on retry
                    if status.is_client_error() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Request to {} failed: {}", url, e);
                    last_error = Some(PathwayError::HttpError(e));
                }
            }

            if attempt < self.retry_attempts && !self.retry_delay.is_zero() {
                tokio::time::sleep(self.retry_delay).await;
            }
        }

        Err(last_error.unwrap_or_else(|| PathwayError::LibraryFetch {
            library: library.to_string(),
            message: "no request was attempted".to_string(),
        }))
    }
}

#[async_trait]
impl LibrarySource for EnrichrClient {
    async fn fetch_library(&self, name: &str) -> Result<GeneSetLibrary> {
        let body = self
            .get_text(
                name,
                "geneSetLibrary",
                &[("mode", "text"), ("libraryName", name)],
            )
            .await?;

        tracing::debug!("Received {} bytes for library {}", body.len(), name);

        let library = parse_library(name, &body);
        if library.is_empty() {
            // Enrichr answers unknown library names with an empty body
            return Err(PathwayError::LibraryFetch {
                library: name.to_string(),
                message: "library is empty or does not exist".to_string(),
            });
        }
        Ok(library)
    }

    async fn list_libraries(&self) -> Result<Vec<String>> {
        let body = self.get_text("datasetStatistics", "datasetStatistics", &[]).await?;
        let stats: DatasetStatistics = serde_json::from_str(&body)?;

        let mut names: Vec<String> = stats
            .statistics
            .into_iter()
            .map(|s| s.library_name)
            .collect();
        names.sort();
        Ok(names)
    }
}
