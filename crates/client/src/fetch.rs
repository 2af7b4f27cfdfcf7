use reqwest::header;

use crate::assemble::assemble;
use crate::config::RegistryConfig;
use crate::error::{ClientError, Result};
use crate::payload::CompanyHistory;
use crate::types::HistoricEmissionsScopes;

/// Request header carrying the registry access key.
const ACCESS_KEY_HEADER: &str = "access_key";

/// Issues authenticated history lookups against one registry.
///
/// Holds nothing beyond the connection pool and the registry settings;
/// every lookup is an independent request/response pair, so one fetcher
/// can serve any number of identifiers, concurrently if the caller wants.
pub struct HistoryFetcher {
    http: reqwest::Client,
    config: RegistryConfig,
}

impl HistoryFetcher {
    /// Build a fetcher with a default HTTP client.
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ClientError::Setup)?;
        Ok(Self::with_client(http, config))
    }

    /// Build a fetcher around a caller-configured client. Timeouts,
    /// proxies, and connection limits stay the caller's choice.
    pub fn with_client(http: reqwest::Client, config: RegistryConfig) -> Self {
        Self { http, config }
    }

    fn history_url(&self, lei: &str) -> String {
        format!(
            "{}/wis/coverage/companies/{lei}/history",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// One lookup against the per-company history endpoint.
    ///
    /// The identifier is sent verbatim, with no local format validation;
    /// the registry is the authority on which identifiers exist. Any
    /// non-success status fails the lookup without retrying.
    pub async fn fetch_history(&self, lei: &str) -> Result<CompanyHistory> {
        let url = self.history_url(lei);
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .header(ACCESS_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                lei: lei.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Fetch {
                lei: lei.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ClientError::Transport {
                lei: lei.to_string(),
                source,
            })?;
        serde_json::from_str(&body)
            .map_err(|err| ClientError::DataShape(format!("history response for {lei}: {err}")))
    }

    /// Fetch one company's history and normalize it into per-scope lists.
    pub async fn historic_scopes(&self, lei: &str) -> Result<HistoricEmissionsScopes> {
        let history = self.fetch_history(lei).await?;
        let scopes = assemble(&history)?;
        log::info!(
            "{lei}: {} realizations across {} reporting years",
            scopes.len(),
            history.history.len()
        );
        Ok(scopes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_url_joins_without_doubling_slashes() {
        let fetcher = HistoryFetcher::with_client(
            reqwest::Client::new(),
            RegistryConfig::new("https://nzdpu.com/", "key"),
        );
        assert_eq!(
            fetcher.history_url("529900GB7KCA94ACC940"),
            "https://nzdpu.com/wis/coverage/companies/529900GB7KCA94ACC940/history"
        );
    }

    #[test]
    fn history_url_keeps_explicit_ports() {
        let fetcher = HistoryFetcher::with_client(
            reqwest::Client::new(),
            RegistryConfig::new("http://127.0.0.1:8080", "key"),
        );
        assert_eq!(
            fetcher.history_url("X"),
            "http://127.0.0.1:8080/wis/coverage/companies/X/history"
        );
    }
}
