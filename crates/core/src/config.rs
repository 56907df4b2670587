use crate::error::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::{Path, PathBuf};
use url::Url;

/// Default bootstrap file holding the backend base URL, relative to the
/// working directory. The backend host writes this file out of band.
pub const DEFAULT_URL_FILE: &str = "backend_url.txt";

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: Url,
}

impl Config {
    /// Resolves the backend address at startup.
    ///
    /// `WELL_BACKEND_URL` (environment or `.env`) wins when set; otherwise
    /// the bootstrap file is read, its path taken from
    /// `WELL_BACKEND_URL_FILE` or defaulting to [`DEFAULT_URL_FILE`].
    /// An absent bootstrap file is a fatal startup condition
    /// ([`AppError::ConfigMissing`]), distinct from per-request failures.
    pub fn load() -> Result<Self> {
        // Load .env file if it exists, ignore if it doesn't
        let _ = dotenv();

        if let Ok(raw) = env::var("WELL_BACKEND_URL") {
            return Self::from_url_str(&raw);
        }

        let path = env::var("WELL_BACKEND_URL_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_URL_FILE));
        Self::from_file(&path)
    }

    /// Reads the backend address from a bootstrap file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AppError::ConfigMissing(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_url_str(&raw)
    }

    /// Builds a config from a raw URL string, validating well-formedness.
    ///
    /// The original tool only checked that the bootstrap file existed;
    /// here malformed content is rejected up front instead of surfacing
    /// later as an opaque request error.
    pub fn from_url_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::config("backend URL is empty"));
        }
        let base_url = Url::parse(trimmed)
            .map_err(|e| AppError::config(format!("invalid backend URL {trimmed:?}: {e}")))?;
        Ok(Self { base_url })
    }

    /// The `/generate` endpoint, tolerant of a trailing slash in the file.
    pub fn generate_endpoint(&self) -> String {
        format!("{}/generate", self.base_url.as_str().trim_end_matches('/'))
    }
}
