use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use crate::api::{ApiClient, ApiConfig, CredentialStore};

use super::{options::AppOptions, runtime::App};

/// Public entry point: configure the console, then `run` it.
///
/// Owns the tokio runtime for the lifetime of the UI; network calls are
/// spawned onto it and report back over a channel into the synchronous
/// event loop.
#[derive(Debug)]
pub struct Console {
    config: ApiConfig,
    options: AppOptions,
    credentials_path: Option<PathBuf>,
}

impl Console {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            options: AppOptions::default(),
            credentials_path: None,
        }
    }

    pub fn with_options(mut self, options: AppOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = Some(path.into());
        self
    }

    pub fn run(self) -> Result<()> {
        let Console {
            config,
            options,
            credentials_path,
        } = self;

        let credentials_path = match credentials_path {
            Some(path) => path,
            None => CredentialStore::default_path()
                .context("could not determine a credentials location; pass one explicitly")?,
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("failed to start the async runtime")?;

        let client = ApiClient::new(config);
        let (net_tx, net_rx) = mpsc::unbounded_channel();
        let mut app = App::new(
            client,
            CredentialStore::new(credentials_path),
            options,
            runtime.handle().clone(),
            net_tx,
            net_rx,
        );
        app.bootstrap();
        app.run()
    }
}
