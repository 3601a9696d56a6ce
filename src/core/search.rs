//! Search flow over a [`FundProvider`]

use super::fund::{FundProvider, FundSummary};
use tracing::{debug, warn};

pub const MAX_RESULTS: usize = 20;
pub const NO_MATCHES_MESSAGE: &str = "No mutual funds found for your search query.";
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search mutual funds. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// Blank query; nothing was requested.
    Skipped,
    Found,
    NoMatches,
    /// The request failed and `funds` holds the demonstration list.
    Degraded { reason: String },
}

#[derive(Debug, Clone)]
pub struct SearchResults {
    pub query: String,
    pub funds: Vec<FundSummary>,
    pub status: SearchStatus,
}

impl SearchResults {
    /// Message to show next to the results, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        match self.status {
            SearchStatus::NoMatches => Some(NO_MATCHES_MESSAGE),
            SearchStatus::Degraded { .. } => Some(SEARCH_FAILED_MESSAGE),
            SearchStatus::Skipped | SearchStatus::Found => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.status, SearchStatus::Degraded { .. })
    }
}

/// Runs one search. Failures never propagate: they yield the fallback list.
pub async fn search_funds(provider: &dyn FundProvider, query: &str) -> SearchResults {
    let query = query.trim().to_string();
    if query.is_empty() {
        debug!("Ignoring blank search query");
        return SearchResults {
            query,
            funds: Vec::new(),
            status: SearchStatus::Skipped,
        };
    }

    match provider.search(&query).await {
        Ok(mut funds) => {
            funds.truncate(MAX_RESULTS);
            let status = if funds.is_empty() {
                SearchStatus::NoMatches
            } else {
                SearchStatus::Found
            };
            debug!("Search for '{}' returned {} funds", query, funds.len());
            SearchResults {
                query,
                funds,
                status,
            }
        }
        Err(e) => {
            warn!("Search for '{}' failed: {:#}", query, e);
            SearchResults {
                query,
                funds: fallback_funds(),
                status: SearchStatus::Degraded {
                    reason: format!("{e:#}"),
                },
            }
        }
    }
}

/// Demonstration list shown when the search endpoint is unreachable.
pub fn fallback_funds() -> Vec<FundSummary> {
    [
        (118551, "Aditya Birla Sun Life Tax Relief 96 - Growth", "85.67"),
        (120503, "HDFC Equity Fund - Growth", "892.456"),
        (119226, "ICICI Prudential Value Discovery Fund - Growth", "234.123"),
    ]
    .into_iter()
    .map(|(code, name, nav)| FundSummary {
        scheme_code: code,
        scheme_name: name.to_string(),
        nav: nav.to_string(),
        date: "2024-06-21".to_string(),
    })
    .collect()
}
