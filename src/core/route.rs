use super::fund::FundSummary;
use std::fmt::Display;

/// Navigable destinations between views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    Dashboard,
    Search {
        query: Option<String>,
    },
    FundDetail {
        scheme_code: u64,
        /// Summary handed over by the previous view, if any.
        prefetched: Option<FundSummary>,
    },
    Saved,
}

impl Route {
    /// Detail route carrying the summary the caller already has.
    pub fn fund(fund: &FundSummary) -> Self {
        Route::FundDetail {
            scheme_code: fund.scheme_code,
            prefetched: Some(fund.clone()),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Landing => write!(f, "/"),
            Route::Login => write!(f, "/login"),
            Route::Register => write!(f, "/register"),
            Route::Dashboard => write!(f, "/dashboard"),
            Route::Search { query: None } => write!(f, "/search"),
            Route::Search { query: Some(q) } => write!(f, "/search?query={q}"),
            Route::FundDetail { scheme_code, .. } => write!(f, "/fund/{scheme_code}"),
            Route::Saved => write!(f, "/saved"),
        }
    }
}
