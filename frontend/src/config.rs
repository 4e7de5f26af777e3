use std::str::FromStr;

use anyhow::Context;
use serde::Deserialize;

/// Embedded demo setup
const DEMO_CONFIG: &str = include_str!("../demo.toml");

/// Demo page config
#[derive(Deserialize, PartialEq, Debug)]
#[serde(default)]
pub struct DemoConfig {
    /// Max level of log records
    pub log_level: String,
    /// Ticker period in milliseconds
    pub tick_ms: u32,
    /// Paginators shown on the page
    #[serde(rename = "instance")]
    pub instances: Vec<Instance>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            tick_ms: 1000,
            instances: vec![],
        }
    }
}

/// Single paginator on the demo page, with its initial attributes
#[derive(Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Instance {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub total: Option<String>,
    pub page_size: Option<String>,
    pub current: Option<String>,
    /// Host side page driver
    pub ticker: Option<Ticker>,
}

/// Periodic host write of `current`
#[derive(Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum Ticker {
    /// Next page every tick, wraps from 99 to 1
    Increment,
    /// Alternate between page 1 and 100
    FirstToLast,
}

impl Ticker {
    /// Page written on the next tick
    pub fn next(self, page: u32) -> u32 {
        match self {
            Self::Increment => match page + 1 {
                100 => 1,
                next => next,
            },
            Self::FirstToLast => match page {
                1 => 100,
                _ => 1,
            },
        }
    }
}

impl DemoConfig {
    /// Load embedded config
    pub fn load() -> anyhow::Result<Self> {
        Self::parse(DEMO_CONFIG)
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("failed to parse demo config")
    }

    pub fn log_level(&self) -> anyhow::Result<tracing::Level> {
        tracing::Level::from_str(&self.log_level)
            .with_context(|| format!("invalid log level `{}`", self.log_level))
    }
}
