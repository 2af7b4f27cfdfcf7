//! # NZDPU Client
//!
//! Client for the NZDPU (Net-Zero Data Public Utility) disclosure
//! registry: fetch one company's reported greenhouse-gas history and
//! normalize it into scope-classified (year, quantity) series.
//!
//! ## Pipeline
//!
//! ```text
//! Legal Entity Identifier
//!     |
//!     v
//! HistoryFetcher::fetch_history     GET /wis/coverage/companies/{lei}/history
//!     |
//!     v
//! CompanyHistory                    raw per-year submissions
//!     |
//!     v
//! classify_year (per year)          unit, "_ghg" suffix, positivity,
//!     |                             scope-digit filters
//!     v
//! assemble                          merge years in payload order
//!     |
//!     v
//! HistoricEmissionsScopes           { S1, S2, S3 }
//! ```
//!
//! Field-level oddities (missing units, non-positive figures, keys without
//! a scope digit) are filtered silently; a malformed payload or a corrupt
//! field fails the whole lookup with [`ClientError`].
//!
//! ## Example
//!
//! ```no_run
//! use nzdpu_client::{HistoryFetcher, RegistryConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = HistoryFetcher::new(RegistryConfig::from_env()?)?;
//!     let scopes = fetcher.historic_scopes("529900GB7KCA94ACC940").await?;
//!
//!     println!("scope 1 disclosures: {}", scopes.s1.len());
//!     Ok(())
//! }
//! ```

mod assemble;
mod classify;
mod config;
mod error;
mod fetch;
mod payload;
mod types;

pub use assemble::assemble;
pub use classify::{classify_year, scope_of_key};
pub use config::{RegistryConfig, API_KEY_VAR, BASE_URL_VAR, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
pub use fetch::HistoryFetcher;
pub use payload::{CompanyHistory, Submission, YearRecord};
pub use types::{EmissionsRealization, GhgScope, HistoricEmissionsScopes, Quantity};
