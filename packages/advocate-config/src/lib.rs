mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Postgres, Query, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse(&raw).map_err(|err| match err {
		Error::ParseConfig { source, .. } =>
			Error::ParseConfig { path: path.to_path_buf(), source },
		other => other,
	})
}

/// Parses, normalizes and validates an in-memory TOML document.
pub fn parse(raw: &str) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: Default::default(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if !matches!(cfg.storage.source.as_str(), "static" | "postgres") {
		return Err(Error::Validation {
			message: "storage.source must be one of static or postgres.".to_string(),
		});
	}
	if cfg.storage.source == "postgres" && cfg.storage.postgres.is_none() {
		return Err(Error::Validation {
			message: "storage.postgres is required when storage.source is postgres.".to_string(),
		});
	}

	if let Some(postgres) = cfg.storage.postgres.as_ref() {
		if postgres.dsn.trim().is_empty() {
			return Err(Error::Validation {
				message: "storage.postgres.dsn must be non-empty.".to_string(),
			});
		}
		if postgres.pool_max_conns == 0 {
			return Err(Error::Validation {
				message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
			});
		}
		if postgres.acquire_timeout_ms == 0 {
			return Err(Error::Validation {
				message: "storage.postgres.acquire_timeout_ms must be greater than zero."
					.to_string(),
			});
		}
	}

	if cfg.query.default_page_size == 0 {
		return Err(Error::Validation {
			message: "query.default_page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.query.max_page_size == 0 {
		return Err(Error::Validation {
			message: "query.max_page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.query.default_page_size > cfg.query.max_page_size {
		return Err(Error::Validation {
			message: "query.default_page_size must not exceed query.max_page_size.".to_string(),
		});
	}
	if !matches!(cfg.query.search_mode.as_str(), "compatible" | "unified") {
		return Err(Error::Validation {
			message: "query.search_mode must be one of compatible or unified.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.storage.source = cfg.storage.source.trim().to_ascii_lowercase();
	cfg.query.search_mode = cfg.query.search_mode.trim().to_ascii_lowercase();

	if cfg
		.storage
		.records_path
		.as_deref()
		.map(|path| path.as_os_str().is_empty())
		.unwrap_or(false)
	{
		cfg.storage.records_path = None;
	}
}
