use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use labread_catalog::Catalog;
use labread_interpret::InterpretOptions;

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024;
const DEFAULT_NARRATIVE_TIMEOUT_SECS: u64 = 20;

/// Service settings, read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub region: String,
    pub options: InterpretOptions,
    pub max_input_bytes: usize,
    /// Bedrock model for narratives; `None` disables them.
    pub narrative_model: Option<String>,
    pub narrative_timeout: Duration,
    /// `(terms.json, ranges.json)` replacing the built-in catalog.
    pub catalog_tables: Option<(PathBuf, PathBuf)>,
    /// Serve over plain HTTP on this address instead of Lambda.
    pub local_addr: Option<SocketAddr>,
}

impl ServiceConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut options = InterpretOptions::default();
        if let Some(policy) = get("LABREAD_ON_UNMATCHED") {
            options.on_unmatched = policy.trim().parse()?;
        }
        if let Some(max) = get("LABREAD_MAX_QUESTIONS") {
            options.max_questions = parse_number("LABREAD_MAX_QUESTIONS", &max)?;
        }

        let max_input_bytes = match get("LABREAD_MAX_INPUT_BYTES") {
            Some(v) => parse_number("LABREAD_MAX_INPUT_BYTES", &v)?,
            None => DEFAULT_MAX_INPUT_BYTES,
        };

        let narrative_timeout = match get("LABREAD_NARRATIVE_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse_number("LABREAD_NARRATIVE_TIMEOUT_SECS", &v)?),
            None => Duration::from_secs(DEFAULT_NARRATIVE_TIMEOUT_SECS),
        };

        let catalog_tables = match (get("LABREAD_TERMS_PATH"), get("LABREAD_RANGES_PATH")) {
            (Some(terms), Some(ranges)) => Some((PathBuf::from(terms), PathBuf::from(ranges))),
            (None, None) => None,
            _ => {
                return Err(eyre::eyre!(
                    "LABREAD_TERMS_PATH and LABREAD_RANGES_PATH must be set together"
                ));
            }
        };

        let local_addr = get("LABREAD_LOCAL_ADDR")
            .map(|v| {
                v.trim()
                    .parse::<SocketAddr>()
                    .map_err(|e| eyre::eyre!("invalid LABREAD_LOCAL_ADDR '{v}': {e}"))
            })
            .transpose()?;

        Ok(Self {
            region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            options,
            max_input_bytes,
            narrative_model: get("LABREAD_NARRATIVE_MODEL").map(|m| m.trim().to_string()),
            narrative_timeout,
            catalog_tables,
            local_addr,
        })
    }

    /// Load the configured JSON tables, or the built-in catalog.
    pub fn load_catalog(&self) -> eyre::Result<Catalog> {
        let catalog = match &self.catalog_tables {
            Some((terms, ranges)) => Catalog::load(terms, ranges)?,
            None => Catalog::builtin()?,
        };
        tracing::info!(terms = catalog.len(), "catalog ready");
        Ok(catalog)
    }
}

fn parse_number<T>(key: &str, value: &str) -> eyre::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| eyre::eyre!("invalid {key} '{value}': {e}"))
}
