//! Server Configuration
//!
//! Read from the environment:
//! - `HOST` (default `127.0.0.1`)
//! - `PORT` (default `9000`)
//! - `EXPERIENCE_SEED_FILE`: JSON array of records to start with; the
//!   built-in seed is used when unset

use crate::error::ServerError;
use experience_core::{default_seed, parse_seed, ExperienceRecord, ExperienceStore};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_file: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT").filter(|p| !p.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ServerError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let seed_file = lookup("EXPERIENCE_SEED_FILE")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            seed_file,
        })
    }

    /// Records the store starts with
    pub fn load_seed(&self) -> Result<Vec<ExperienceRecord>, ServerError> {
        let Some(path) = &self.seed_file else {
            return Ok(default_seed());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ServerError::SeedRead {
            path: path.clone(),
            source,
        })?;
        let records = parse_seed(&contents).map_err(|source| ServerError::SeedParse {
            path: path.clone(),
            source,
        })?;

        log::info!("Loaded {} seed records from {}", records.len(), path.display());
        Ok(records)
    }

    /// Create the process-wide store from the configured seed
    pub fn build_store(&self) -> Result<ExperienceStore, ServerError> {
        Ok(ExperienceStore::with_seed(self.load_seed()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("EXPERIENCE_SEED_FILE", "/tmp/seed.json"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.seed_file, Some(PathBuf::from("/tmp/seed.json")));
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", ""),
            ("PORT", " "),
            ("EXPERIENCE_SEED_FILE", ""),
        ]))
        .unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "ninety")])).unwrap_err();
        assert!(matches!(err, ServerError::InvalidPort(p) if p == "ninety"));
    }

    #[test]
    fn test_builtin_seed_without_file() {
        let store = ServerConfig::default().build_store().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("1").unwrap().company_name, "IBM");
    }

    #[test]
    fn test_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "a", "companyName": "Igadi", "type": "IGADI"}},
               {{"id": "b", "companyName": "Smartech", "type": "SMARTECH"}}]"#
        )
        .unwrap();

        let config = ServerConfig {
            seed_file: Some(file.path().to_path_buf()),
            ..ServerConfig::default()
        };
        let store = config.build_store().unwrap();
        let ids: Vec<String> = store.list().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_seed_file_errors() {
        let missing = ServerConfig {
            seed_file: Some(PathBuf::from("/nonexistent/seed.json")),
            ..ServerConfig::default()
        };
        assert!(matches!(missing.load_seed(), Err(ServerError::SeedRead { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let malformed = ServerConfig {
            seed_file: Some(file.path().to_path_buf()),
            ..ServerConfig::default()
        };
        assert!(matches!(malformed.load_seed(), Err(ServerError::SeedParse { .. })));

        let mut dup = tempfile::NamedTempFile::new().unwrap();
        write!(dup, r#"[{{"id": "a"}}, {{"id": "a"}}]"#).unwrap();
        let duplicated = ServerConfig {
            seed_file: Some(dup.path().to_path_buf()),
            ..ServerConfig::default()
        };
        assert!(matches!(duplicated.build_store(), Err(ServerError::Store(_))));
    }
}
