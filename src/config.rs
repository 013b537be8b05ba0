//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory
//! (or the file named by `PORTFOLIO_CONFIG`), then applies the
//! `PORTFOLIO_BIND`, `PORTFOLIO_LOG_LEVEL`, `PORTFOLIO_SITE_URL` and
//! `PORTFOLIO_STATIC_DIR` env overrides.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::AppError;
use crate::logger;

/// HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the listener to.
    pub bind: String,
    pub log_level: String,
}

/// What the page says about itself: name, public URL, asset location.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Site owner's name, used in the document title and metadata.
    pub name: String,
    /// Public origin used to build canonical / OpenGraph URLs. No trailing `/`.
    pub base_url: String,
    /// Directory holding `images/`, `icons/` and `favicon.ico`
    /// (already expanded, no `~`). `None` disables static serving.
    pub static_dir: Option<PathBuf>,
}

/// Fully-resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

/// Env-var overrides, collected up front so tests can pass them explicitly.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub bind: Option<String>,
    pub log_level: Option<String>,
    pub site_url: Option<String>,
    pub static_dir: Option<String>,
}

impl Overrides {
    pub fn from_env() -> Self {
        Self {
            bind: env::var("PORTFOLIO_BIND").ok(),
            log_level: env::var("PORTFOLIO_LOG_LEVEL").ok(),
            site_url: env::var("PORTFOLIO_SITE_URL").ok(),
            static_dir: env::var("PORTFOLIO_STATIC_DIR").ok(),
        }
    }
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    server: RawServer,
    #[serde(default)]
    site: RawSite,
}

#[derive(Deserialize)]
struct RawServer {
    #[serde(default = "default_bind")]
    bind: String,
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for RawServer {
    fn default() -> Self {
        Self { bind: default_bind(), log_level: default_log_level() }
    }
}

#[derive(Deserialize)]
struct RawSite {
    #[serde(default = "default_site_name")]
    name: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Relative paths resolve against the working directory.
    #[serde(default)]
    static_dir: Option<String>,
}

impl Default for RawSite {
    fn default() -> Self {
        Self { name: default_site_name(), base_url: default_base_url(), static_dir: None }
    }
}

fn default_bind() -> String { "127.0.0.1:3000".to_string() }
fn default_log_level() -> String { "info".to_string() }
fn default_site_name() -> String { "Irene Álvarez Lorenzo".to_string() }
fn default_base_url() -> String { "http://localhost:3000".to_string() }

/// Load config, then apply env-var overrides.
///
/// The file is `path` if given (`-f/--config`), else `PORTFOLIO_CONFIG`,
/// else `config/default.toml`.
pub fn load(path: Option<&str>) -> Result<Config, AppError> {
    let path = path
        .map(str::to_string)
        .or_else(|| env::var("PORTFOLIO_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());
    load_from(Path::new(&path), &Overrides::from_env())
}

/// Internal loader — accepts an explicit path and overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(path: &Path, overrides: &Overrides) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    parse(&raw, overrides)
        .map_err(|e| match e {
            AppError::Config(msg) => AppError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
}

/// Resolve a TOML document into a [`Config`].
pub fn parse(raw: &str, overrides: &Overrides) -> Result<Config, AppError> {
    let parsed: RawConfig =
        toml::from_str(raw).map_err(|e| AppError::Config(format!("parse error: {e}")))?;

    let log_level = overrides.log_level.clone().unwrap_or(parsed.server.log_level);
    logger::parse_level(&log_level)
        .map_err(|e| AppError::Config(format!("server.log_level: {e}")))?;

    let base_url = overrides.site_url.clone().unwrap_or(parsed.site.base_url);
    let base_url = normalize_base_url(&base_url)?;

    let static_dir = overrides
        .static_dir
        .clone()
        .or(parsed.site.static_dir)
        .filter(|s| !s.trim().is_empty())
        .map(|s| expand_home(&s));

    Ok(Config {
        server: ServerConfig {
            bind: overrides.bind.clone().unwrap_or(parsed.server.bind),
            log_level,
        },
        site: SiteConfig { name: parsed.site.name, base_url, static_dir },
    })
}

/// Require an absolute http(s) origin and strip trailing slashes.
fn normalize_base_url(url: &str) -> Result<String, AppError> {
    let trimmed = url.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| AppError::Config(format!("site.base_url must be http(s): '{url}'")))?;
    if host.is_empty() {
        return Err(AppError::Config(format!("site.base_url has no host: '{url}'")));
    }
    Ok(trimmed.to_string())
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

impl SiteConfig {
    /// Site config with defaults and no static directory. Handy for
    /// rendering the page outside the server (tests, previews).
    pub fn local() -> Self {
        Self { name: default_site_name(), base_url: default_base_url(), static_dir: None }
    }
}
