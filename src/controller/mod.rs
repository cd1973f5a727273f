//! Shared application state: the portfolio behind a lock, plus write-through
//! persistence of every mutation.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{CountryCode, UnknownCountry};
use crate::portfolio::Portfolio;
use crate::store::FileStore;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub portfolio: Arc<RwLock<Portfolio>>,
    store: Arc<FileStore>,
}

impl AppState {
    pub async fn new(cfg: Config) -> Result<Self> {
        let country: CountryCode = cfg
            .state
            .default_country
            .parse()
            .map_err(|_| UnknownCountry(cfg.state.default_country.clone()))
            .context("state.default_country")?;

        let store = FileStore::new(&cfg.state.file);
        let portfolio = match store.load().await? {
            Some(json) => {
                let mut restored = Portfolio::new(country);
                match restored.import_json(&json) {
                    Ok(report) => {
                        info!(
                            path = %store.path().display(),
                            applied = ?report.applied,
                            skipped = ?report.skipped,
                            "restored portfolio state"
                        );
                        restored
                    }
                    Err(err) => {
                        warn!(%err, "stored state unreadable; starting fresh");
                        Self::fresh(&cfg, country)
                    }
                }
            }
            None => Self::fresh(&cfg, country),
        };

        Ok(Self {
            cfg,
            portfolio: Arc::new(RwLock::new(portfolio)),
            store: Arc::new(store),
        })
    }

    fn fresh(cfg: &Config, country: CountryCode) -> Portfolio {
        if cfg.state.seed_demo {
            info!(%country, "seeding demo portfolio");
            Portfolio::demo(country, chrono::Utc::now().date_naive())
        } else {
            Portfolio::new(country)
        }
    }

    /// Persist the current state. Disk trouble is logged, never surfaced to
    /// the request that triggered the save.
    pub async fn persist(&self) {
        let exported = self.portfolio.read().await.export_json();
        match exported {
            Ok(json) => {
                if let Err(err) = self.store.save(&json).await {
                    warn!(%err, "failed to persist portfolio state");
                }
            }
            Err(err) => warn!(%err, "failed to serialize portfolio state"),
        }
    }
}
