//! Fund records and the provider abstraction

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The minimal record describing one mutual fund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundSummary {
    pub scheme_code: u64,
    pub scheme_name: String,
    #[serde(default)]
    pub nav: String,
    #[serde(default)]
    pub date: String,
}

/// One point of a fund's NAV history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavPoint {
    pub date: String,
    pub nav: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeMeta {
    pub fund_house: Option<String>,
    pub scheme_type: Option<String>,
    pub scheme_category: Option<String>,
}

/// Extended data for a single fund as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundDetails {
    pub summary: FundSummary,
    pub meta: SchemeMeta,
    /// Most recent entries first, as returned by the endpoint.
    pub history: Vec<NavPoint>,
}

#[async_trait]
pub trait FundProvider: Send + Sync {
    /// Searches funds by free text. Results keep the endpoint's ordering.
    async fn search(&self, query: &str) -> Result<Vec<FundSummary>>;

    /// Fetches one fund by scheme code. `Ok(None)` when the endpoint knows no
    /// such scheme.
    async fn fetch_details(&self, scheme_code: u64) -> Result<Option<FundDetails>>;
}
