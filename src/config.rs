//! Configuration constants and settings resolution for postboard
//!
//! Each setting comes from the command line first, then the environment,
//! then the default below.

use crate::cmd_args::CommandLineArgs;
use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Default posts API
pub const DEFAULT_BASE_URL: &str = "http://jsonplaceholder.typicode.com";

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable name for overriding the base URL
pub const BASE_URL_ENV_VAR: &str = "POSTBOARD_BASE_URL";

/// Environment variable name for overriding the page size
pub const ITEMS_PER_PAGE_ENV_VAR: &str = "POSTBOARD_ITEMS_PER_PAGE";

/// Environment variable name for overriding the request timeout (seconds)
pub const TIMEOUT_ENV_VAR: &str = "POSTBOARD_TIMEOUT_SECS";

/// Environment variable holding the `tracing` filter directives
pub const LOG_LEVEL_ENV_VAR: &str = "POSTBOARD_LOG_LEVEL";

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: Url,
    pub items_per_page: NonZeroUsize,
    pub request_timeout: Duration,
}

impl Settings {
    /// Resolve settings from the command line and the process environment
    pub fn resolve(args: &CommandLineArgs) -> Result<Self> {
        Self::resolve_with(args, get_env_value)
    }

    /// Resolve settings using `lookup` for environment values
    pub fn resolve_with<F>(args: &CommandLineArgs, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = args
            .base_url()
            .map(str::to_string)
            .or_else(|| lookup(BASE_URL_ENV_VAR))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url =
            Url::parse(&base_url).with_context(|| format!("Invalid base URL '{base_url}'"))?;

        let items_per_page = match args
            .items_per_page()
            .map(str::to_string)
            .or_else(|| lookup(ITEMS_PER_PAGE_ENV_VAR))
        {
            Some(raw) => parse_items_per_page(&raw)?,
            None => NonZeroUsize::new(DEFAULT_ITEMS_PER_PAGE)
                .context("Default page size must not be zero")?,
        };

        let timeout_secs = match args.timeout() {
            Some(secs) => secs,
            None => match lookup(TIMEOUT_ENV_VAR) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid request timeout '{raw}'"))?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };
        if timeout_secs == 0 {
            bail!("Request timeout must be at least 1 second");
        }

        Ok(Self {
            base_url,
            items_per_page,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Parse a page size, rejecting zero and non-numbers
pub fn parse_items_per_page(raw: &str) -> Result<NonZeroUsize> {
    let value: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid page size '{raw}'"))?;
    match NonZeroUsize::new(value) {
        Some(size) => Ok(size),
        None => bail!("Page size must be at least 1"),
    }
}

/// Read an environment variable, ignoring values that are not UTF-8
pub fn get_env_value(name: &str) -> Option<String> {
    std::env::var_os(name).and_then(|val| val.into_string().ok())
}
