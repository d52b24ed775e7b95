//! Service configuration resolved from environment variables
//!
//! - `CATALOG_DATASET_PATH`: CSV dataset (default `./Dataset/netflix_titles.csv`)
//! - `CATALOG_LEXICON_PATH`: optional JSON thesaurus; built-in thesaurus when unset
//! - `CATALOG_LEXICON_CACHE`: cache lexicon lookups (default `true`)
//! - `CATALOG_BIND_ADDR`: HTTP listen address (default `127.0.0.1:8000`)

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{CatalogError, Result};
use crate::search::{CachedLexicon, LexicalDatabase, ThesaurusLexicon};

pub const DEFAULT_DATASET_PATH: &str = "./Dataset/netflix_titles.csv";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub dataset_path: PathBuf,
    pub lexicon_path: Option<PathBuf>,
    pub cache_lexicon: bool,
    pub bind_addr: SocketAddr,
}

impl ServiceConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let dataset_path = lookup("CATALOG_DATASET_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATASET_PATH.to_string());
        let dataset_path = resolve_path(&current_dir, &dataset_path);

        let lexicon_path = lookup("CATALOG_LEXICON_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(|p| resolve_path(&current_dir, &p));

        let cache_lexicon = match lookup("CATALOG_LEXICON_CACHE") {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                CatalogError::config(format!(
                    "CATALOG_LEXICON_CACHE: expected true/false, got '{}'",
                    value
                ))
            })?,
            None => true,
        };

        let bind_addr =
            lookup("CATALOG_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|e| {
            CatalogError::config(format!(
                "CATALOG_BIND_ADDR: invalid address '{}': {}",
                bind_addr, e
            ))
        })?;

        Ok(Self {
            dataset_path,
            lexicon_path,
            cache_lexicon,
            bind_addr,
        })
    }

    /// Build the lexical database this configuration describes
    pub fn build_lexicon(&self) -> Result<Arc<dyn LexicalDatabase>> {
        let thesaurus = match &self.lexicon_path {
            Some(path) => {
                let lexicon = ThesaurusLexicon::from_json_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    senses = lexicon.sense_count(),
                    "Loaded thesaurus"
                );
                lexicon
            }
            None => ThesaurusLexicon::builtin(),
        };

        if self.cache_lexicon {
            Ok(Arc::new(CachedLexicon::new(thesaurus)))
        } else {
            Ok(Arc::new(thesaurus))
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
