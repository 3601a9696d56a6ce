//! Detail flow: loading one fund and toggling its bookmark

use super::fund::{FundProvider, FundSummary, NavPoint, SchemeMeta};
use super::notice::Notice;
use super::route::Route;
use super::saved::SavedFunds;
use super::session::SessionStore;
use anyhow::{Result, anyhow};
use tracing::{debug, error};

pub const HISTORY_LIMIT: usize = 30;

/// State of the detail view for one scheme code.
#[derive(Debug, Clone)]
pub struct FundPage {
    pub scheme_code: u64,
    /// `None` when the fund could not be loaded.
    pub fund: Option<FundSummary>,
    pub meta: Option<SchemeMeta>,
    pub history: Vec<NavPoint>,
    pub is_saved: bool,
    pub notice: Option<Notice>,
}

impl FundPage {
    /// Enters the detail view. A prefetched summary is used as is; otherwise
    /// the fund is fetched once from the provider.
    pub async fn load(
        provider: &dyn FundProvider,
        saved: &SavedFunds,
        scheme_code: u64,
        prefetched: Option<FundSummary>,
    ) -> Self {
        let mut page = FundPage {
            scheme_code,
            fund: None,
            meta: None,
            history: Vec::new(),
            is_saved: false,
            notice: None,
        };

        match prefetched {
            Some(fund) => {
                debug!("Using prefetched summary for {}", scheme_code);
                page.fund = Some(fund);
            }
            None => match provider.fetch_details(scheme_code).await {
                Ok(Some(mut details)) => {
                    details.history.truncate(HISTORY_LIMIT);
                    page.fund = Some(details.summary);
                    page.meta = Some(details.meta);
                    page.history = details.history;
                }
                Ok(None) => debug!("No scheme found for {}", scheme_code),
                Err(e) => {
                    error!("Error fetching fund data for {}: {:#}", scheme_code, e);
                    page.notice = Some(Notice::destructive("Error", "Failed to load fund details"));
                }
            },
        }

        page.is_saved = saved.contains(scheme_code).await;
        page
    }

    /// Flips the bookmark for the loaded fund. Returns a redirect when the
    /// user has to log in first.
    pub async fn toggle_saved(
        &mut self,
        session: &SessionStore,
        saved: &SavedFunds,
    ) -> Result<Option<Route>> {
        if !session.is_logged_in().await {
            self.notice = Some(Notice::login_required());
            return Ok(Some(Route::Login));
        }

        if self.is_saved {
            saved.remove(self.scheme_code).await?;
            self.is_saved = false;
            self.notice = Some(Notice::fund_removed());
        } else {
            let fund = self
                .fund
                .as_ref()
                .ok_or_else(|| anyhow!("Fund {} is not loaded", self.scheme_code))?;
            saved.save(fund).await?;
            self.is_saved = true;
            self.notice = Some(Notice::fund_saved());
        }
        Ok(None)
    }
}
