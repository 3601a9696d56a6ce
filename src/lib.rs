pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::saved::SavedFunds;
use crate::core::session::SessionStore;
use crate::core::{FundProvider, KeyValueStorage, Route};
use anyhow::{Result, bail};
use std::sync::Arc;
use tracing::{debug, info};

// Redirect chains are short (e.g. saved -> login); anything longer is a loop.
const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone)]
pub enum AppCommand {
    Home {
        query: Option<String>,
    },
    Dashboard,
    Search {
        query: String,
        open: Option<usize>,
    },
    Fund {
        scheme_code: u64,
        toggle_save: bool,
    },
    Saved {
        remove: Option<u64>,
        open: Option<u64>,
    },
    Login {
        name: String,
        email: Option<String>,
        token: Option<String>,
    },
    Logout,
}

/// Collaborators shared by every view.
pub struct App {
    provider: Arc<dyn FundProvider>,
    session: SessionStore,
    saved: SavedFunds,
}

impl App {
    pub fn new(provider: Arc<dyn FundProvider>, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            provider,
            session: SessionStore::new(Arc::clone(&storage)),
            saved: SavedFunds::new(storage),
        }
    }

    pub fn provider(&self) -> &dyn FundProvider {
        self.provider.as_ref()
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn saved(&self) -> &SavedFunds {
        &self.saved
    }

    /// Runs a command, then follows the navigation it produces.
    pub async fn run(&self, command: AppCommand) -> Result<()> {
        let mut next = match command {
            AppCommand::Home { query } => cli::landing::run(query.as_deref()),
            AppCommand::Dashboard => cli::dashboard::run(self).await,
            AppCommand::Search { query, open } => cli::search::run(self, &query, open).await?,
            AppCommand::Fund {
                scheme_code,
                toggle_save,
            } => cli::detail::run(self, scheme_code, None, toggle_save).await?,
            AppCommand::Saved { remove, open } => cli::saved::run(self, remove, open).await?,
            AppCommand::Login { name, email, token } => {
                cli::session::login(self, &name, email.as_deref(), token.as_deref()).await?
            }
            AppCommand::Logout => cli::session::logout(self).await?,
        };

        let mut hops = 0;
        while let Some(route) = next {
            hops += 1;
            if hops > MAX_REDIRECTS {
                bail!("Too many redirects, last route: {route}");
            }
            next = self.visit(route).await?;
        }
        Ok(())
    }

    /// Enters the view for a route. Returns where that view navigates next.
    pub async fn visit(&self, route: Route) -> Result<Option<Route>> {
        debug!("Navigating to {}", route);
        match route {
            Route::Landing => Ok(cli::landing::run(None)),
            Route::Login | Route::Register => {
                cli::session::print_login_required(&route);
                Ok(None)
            }
            Route::Dashboard => Ok(cli::dashboard::run(self).await),
            Route::Search { query } => {
                cli::search::run(self, query.as_deref().unwrap_or_default(), None).await
            }
            Route::FundDetail {
                scheme_code,
                prefetched,
            } => cli::detail::run(self, scheme_code, prefetched, false).await,
            Route::Saved => cli::saved::run(self, None, None).await,
        }
    }
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("FundTracker starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let storage = store::open_storage(&config);
    let provider = providers::mfapi_provider::MfApiProvider::new(config.mfapi_base_url())?;
    let app = App::new(Arc::new(provider), storage);

    app.run(command).await
}
