use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub storage: Storage,
	#[serde(default)]
	pub query: Query,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
	/// Where advocate records are read from: "static" or "postgres".
	#[serde(default = "default_source")]
	pub source: String,
	/// Optional JSON array that replaces the embedded dataset.
	pub records_path: Option<PathBuf>,
	pub postgres: Option<Postgres>,
}
impl Default for Storage {
	fn default() -> Self {
		Self { source: default_source(), records_path: None, postgres: None }
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
	/// How long a query waits for a pooled connection before failing.
	#[serde(default = "default_acquire_timeout_ms")]
	pub acquire_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Query {
	#[serde(default = "default_page_size")]
	pub default_page_size: usize,
	#[serde(default = "max_page_size")]
	pub max_page_size: usize,
	/// "compatible" or "unified".
	#[serde(default = "default_search_mode")]
	pub search_mode: String,
}
impl Default for Query {
	fn default() -> Self {
		Self {
			default_page_size: default_page_size(),
			max_page_size: max_page_size(),
			search_mode: default_search_mode(),
		}
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_source() -> String {
	"static".to_string()
}

fn default_acquire_timeout_ms() -> u64 {
	5_000
}

fn default_page_size() -> usize {
	20
}

fn max_page_size() -> usize {
	100
}

fn default_search_mode() -> String {
	"compatible".to_string()
}
