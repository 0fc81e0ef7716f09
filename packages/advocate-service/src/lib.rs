//! Binds a record store to the query pipeline.
//!
//! [`AdvocateService`] is delivery-agnostic: the HTTP server and the command-line tool both call
//! it the same way.

pub mod advocates;
pub mod error;
pub mod filters;
pub mod seed;

use std::sync::Arc;

use advocate_config::Config;
use advocate_domain::{AdvocateRecord, PageLimits, SearchMode};
use advocate_storage::{
	db::Db,
	source::{PostgresRecords, RecordSource, StaticRecords},
};

pub use error::{ServiceError, ServiceResult};
pub use seed::SeedResponse;

pub struct AdvocateService {
	pub limits: PageLimits,
	pub search_mode: SearchMode,
	pub source: Arc<dyn RecordSource>,
	/// The dataset written by [`AdvocateService::seed`].
	pub seed_records: Arc<[AdvocateRecord]>,
	pub db: Option<Db>,
}
impl AdvocateService {
	pub fn new(
		cfg: &Config,
		source: Arc<dyn RecordSource>,
		seed_records: Vec<AdvocateRecord>,
		db: Option<Db>,
	) -> Self {
		Self {
			limits: PageLimits {
				default_page_size: cfg.query.default_page_size,
				max_page_size: cfg.query.max_page_size,
			},
			search_mode: SearchMode::parse(&cfg.query.search_mode).unwrap_or_default(),
			source,
			seed_records: seed_records.into(),
			db,
		}
	}

	/// Builds the service described by `cfg`: loads the seed dataset, connects to Postgres when
	/// configured and picks the record source.
	pub async fn from_config(cfg: &Config) -> ServiceResult<Self> {
		let seed_records = advocate_storage::seed::load(cfg.storage.records_path.as_deref())?;
		// A Postgres record source must be reachable at startup. Otherwise Postgres only backs
		// seeding, which connects on first use and falls back to the seed dataset.
		let db = match (cfg.storage.source.as_str(), cfg.storage.postgres.as_ref()) {
			("postgres", Some(postgres)) => {
				let db = Db::connect(postgres).await?;

				db.ensure_schema().await?;

				Some(db)
			},
			(_, Some(postgres)) => Some(Db::connect_lazy(postgres)?),
			(_, None) => None,
		};
		let source: Arc<dyn RecordSource> = match (cfg.storage.source.as_str(), db.as_ref()) {
			("postgres", Some(db)) => Arc::new(PostgresRecords::new(db.clone())),
			_ => Arc::new(StaticRecords::new(seed_records.clone())),
		};

		tracing::info!(
			source = %cfg.storage.source,
			seed_records = seed_records.len(),
			postgres = db.is_some(),
			"Record store ready."
		);

		Ok(Self::new(cfg, source, seed_records, db))
	}

	/// A service over a fixed in-memory dataset, with default limits and no Postgres.
	pub fn in_memory(records: Vec<AdvocateRecord>) -> Self {
		let source = Arc::new(StaticRecords::new(records.clone()));

		Self {
			limits: PageLimits::default(),
			search_mode: SearchMode::default(),
			source,
			seed_records: records.into(),
			db: None,
		}
	}
}
