//! Router assembly for the local dev server.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio is a static page plus a `wasm-bindgen` bundle. This server
//! exists so the page can be opened over HTTP during development: the site
//! directory is served at `/`, the compiled bundle under `/pkg`, and
//! `/healthz` answers liveness probes.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::env::VarError;
use std::num::ParseIntError;
use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SITE_DIR: &str = "website";
const DEFAULT_PKG_DIR: &str = "pkg";

/// Errors that stop the dev server from starting.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },

    /// The site directory does not exist.
    #[error("site directory not found: {}", path.display())]
    MissingSiteDir { path: PathBuf },

    #[error("failed to bind listener: {0}")]
    Bind(std::io::Error),

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

/// Dev server settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub port: u16,
    pub site_dir: PathBuf,
    pub pkg_dir: PathBuf,
}

impl ServeConfig {
    /// Build from environment variables.
    ///
    /// - `PORT`: listen port (default 8080)
    /// - `FOLIO_SITE_DIR`: static site root (default `website`)
    /// - `FOLIO_PKG_DIR`: `wasm-bindgen` output directory (default `pkg`)
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` does not parse or the site directory is missing.
    pub fn from_env() -> Result<Self, ServeError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Result<String, VarError>) -> Result<Self, ServeError> {
        let port = match lookup("PORT") {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|source| ServeError::InvalidPort { value, source })?,
            Err(_) => DEFAULT_PORT,
        };
        let site_dir = PathBuf::from(lookup("FOLIO_SITE_DIR").unwrap_or_else(|_| DEFAULT_SITE_DIR.into()));
        let pkg_dir = PathBuf::from(lookup("FOLIO_PKG_DIR").unwrap_or_else(|_| DEFAULT_PKG_DIR.into()));

        if !site_dir.is_dir() {
            return Err(ServeError::MissingSiteDir { path: site_dir });
        }
        if !pkg_dir.is_dir() {
            tracing::warn!(pkg = %pkg_dir.display(), "pkg directory missing; build the wasm bundle to enable interactivity");
        }
        Ok(Self { port, site_dir, pkg_dir })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Static site at `/`, bundle at `/pkg`, health at `/healthz`.
#[must_use]
pub fn app(config: &ServeConfig) -> Router {
    let site = ServeDir::new(&config.site_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
