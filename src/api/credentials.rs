use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The bearer credential returned by sign-in, with its expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub token: String,
    pub expired: DateTime<Utc>,
}

impl Credentials {
    /// Builds credentials from the wire shape, where `expired` is epoch
    /// milliseconds. An unrepresentable timestamp collapses to the epoch,
    /// which reads as already expired.
    pub fn from_millis(token: impl Into<String>, expired_millis: i64) -> Self {
        Self {
            token: token.into(),
            expired: DateTime::from_timestamp_millis(expired_millis).unwrap_or_default(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expired <= Utc::now()
    }
}

/// Persists the credential between runs as one small JSON file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The platform config-dir location used when the CLI does not override
    /// the path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shopkeeper").join("credentials.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored credential. Absent and expired both come back as
    /// `None`; an expired token would only bounce off the session check.
    pub fn load(&self) -> Result<Option<Credentials>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let credentials: Credentials = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        if credentials.is_expired() {
            debug!(path = %self.path.display(), "stored credential expired");
            return Ok(None);
        }
        Ok(Some(credentials))
    }

    pub fn save(&self, credentials: &Credentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(credentials).context("failed to encode credentials")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        debug!(path = %self.path.display(), "credentials saved");
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}
