//! Front-end settings read from `NEXUS_*` environment variables.
//!
//! Every variable is optional; unset ones fall back to the defaults of
//! [`AppConfig::default`].

use chrono::Duration;
use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::grid::{Breakpoints, GridOptions};
use crate::toast::DEFAULT_TOAST_DURATION;

const PREFIX: &str = "NEXUS_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read NEXUS_* variables: {0}")]
    Env(#[from] serde_env::Error),
    #[error("NEXUS_PAGE_SIZE_OPTIONS entry {0:?} is not a positive integer")]
    InvalidPageSize(String),
    #[error("NEXUS_PAGE_SIZE_OPTIONS must list at least one page size")]
    NoPageSizes,
    #[error("NEXUS_DEFAULT_PAGE_SIZE {default} is not one of the page size options {options:?}")]
    DefaultPageSizeNotOffered { default: usize, options: Vec<usize> },
    #[error("breakpoints must satisfy 0 < mobile ({mobile}) <= tablet ({tablet})")]
    InvalidBreakpoints { mobile: f32, tablet: f32 },
    #[error("NEXUS_TOAST_DURATION_MS {0} is too large")]
    ToastDurationTooLong(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub grid: GridOptions,
    pub breakpoints: Breakpoints,
    pub toast_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid: GridOptions::default(),
            breakpoints: Breakpoints::default(),
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

// Variables as they appear in the environment, prefix stripped.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    page_size_options: Option<String>,
    default_page_size: Option<usize>,
    mobile_breakpoint: Option<f32>,
    tablet_breakpoint: Option<f32>,
    toast_duration_ms: Option<u64>,
}

impl AppConfig {
    /// Reads the process environment.
    pub fn init() -> Result<Self, ConfigError> {
        info!("Loading configuration from environment variables");
        Self::from_vars(std::env::vars())
    }

    /// Builds the configuration from `(name, value)` pairs; names without the
    /// `NEXUS_` prefix are ignored.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Result<Self, ConfigError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let vars: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(PREFIX)
                    .map(|name| (name.to_owned(), value.as_ref().to_owned()))
            })
            .collect();
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            page_size_options,
            default_page_size,
            mobile_breakpoint,
            tablet_breakpoint,
            toast_duration_ms,
        } = raw;
        let defaults = Self::default();

        let page_size_options = match page_size_options {
            Some(list) => parse_page_sizes(&list)?,
            None => defaults.grid.page_size_options,
        };
        let default_page_size = match default_page_size {
            Some(size) => size,
            None if page_size_options.contains(&defaults.grid.default_page_size) => {
                defaults.grid.default_page_size
            }
            // Custom options without the stock default: start on the first one.
            None => page_size_options[0],
        };
        if !page_size_options.contains(&default_page_size) {
            return Err(ConfigError::DefaultPageSizeNotOffered {
                default: default_page_size,
                options: page_size_options,
            });
        }

        let breakpoints = Breakpoints {
            mobile_max: mobile_breakpoint.unwrap_or(defaults.breakpoints.mobile_max),
            tablet_max: tablet_breakpoint.unwrap_or(defaults.breakpoints.tablet_max),
        };
        let ordered =
            breakpoints.mobile_max > 0.0 && breakpoints.mobile_max <= breakpoints.tablet_max;
        if !ordered || !breakpoints.tablet_max.is_finite() {
            return Err(ConfigError::InvalidBreakpoints {
                mobile: breakpoints.mobile_max,
                tablet: breakpoints.tablet_max,
            });
        }

        let toast_duration = match toast_duration_ms {
            Some(ms) => i64::try_from(ms)
                .ok()
                .and_then(Duration::try_milliseconds)
                .ok_or(ConfigError::ToastDurationTooLong(ms))?,
            None => defaults.toast_duration,
        };

        info!(
            "Page sizes {page_size_options:?} (default {default_page_size}), breakpoints {}/{}, toasts {}ms",
            breakpoints.mobile_max,
            breakpoints.tablet_max,
            toast_duration.num_milliseconds()
        );

        Ok(Self {
            grid: GridOptions {
                page_size_options,
                default_page_size,
            },
            breakpoints,
            toast_duration,
        })
    }
}

fn parse_page_sizes(list: &str) -> Result<Vec<usize>, ConfigError> {
    let sizes = list
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.parse::<usize>() {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(ConfigError::InvalidPageSize(entry.to_owned())),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if sizes.is_empty() {
        return Err(ConfigError::NoPageSizes);
    }
    Ok(sizes)
}
