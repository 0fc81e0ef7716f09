use std::{future::Future, pin::Pin, sync::Arc};

use advocate_domain::AdvocateRecord;

use crate::{Result, db::Db};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read-only access to the record store. Every call returns a complete, ordered snapshot.
pub trait RecordSource
where
	Self: Send + Sync,
{
	fn snapshot(&self) -> BoxFuture<'_, Result<Arc<[AdvocateRecord]>>>;
}

/// A fixed in-memory dataset, shared by reference across requests.
#[derive(Debug, Clone)]
pub struct StaticRecords {
	records: Arc<[AdvocateRecord]>,
}
impl StaticRecords {
	pub fn new(records: Vec<AdvocateRecord>) -> Self {
		Self { records: records.into() }
	}

	pub fn records(&self) -> &[AdvocateRecord] {
		&self.records
	}
}
impl RecordSource for StaticRecords {
	fn snapshot(&self) -> BoxFuture<'_, Result<Arc<[AdvocateRecord]>>> {
		let records = Arc::clone(&self.records);

		Box::pin(async move { Ok(records) })
	}
}

/// Reads the `advocates` table on every snapshot.
#[derive(Debug, Clone)]
pub struct PostgresRecords {
	db: Db,
}
impl PostgresRecords {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}
impl RecordSource for PostgresRecords {
	fn snapshot(&self) -> BoxFuture<'_, Result<Arc<[AdvocateRecord]>>> {
		Box::pin(async move {
			let records = self.db.fetch_advocates().await?;

			tracing::debug!(count = records.len(), "Loaded advocates from Postgres.");

			Ok(records.into())
		})
	}
}
