use serde::Serialize;

use advocate_domain::AdvocateRecord;
use advocate_storage::db::Db;

use crate::AdvocateService;

#[derive(Debug, Clone, Serialize)]
pub struct SeedResponse {
	pub advocates: Vec<AdvocateRecord>,
}

impl AdvocateService {
	/// Writes the seed dataset to Postgres when one is configured and returns the stored rows.
	/// Without Postgres, or if the insert fails, the seed dataset itself is returned.
	pub async fn seed(&self) -> SeedResponse {
		let Some(db) = self.db.as_ref() else {
			return SeedResponse { advocates: self.seed_records.to_vec() };
		};

		match insert_seed(db, &self.seed_records).await {
			Ok(advocates) => {
				tracing::info!(count = advocates.len(), "Seeded advocates into Postgres.");

				SeedResponse { advocates }
			},
			Err(err) => {
				tracing::warn!(error = %err, "Seeding failed; returning the static dataset.");

				SeedResponse { advocates: self.seed_records.to_vec() }
			},
		}
	}
}

async fn insert_seed(
	db: &Db,
	records: &[AdvocateRecord],
) -> advocate_storage::Result<Vec<AdvocateRecord>> {
	db.ensure_schema().await?;

	db.insert_advocates(records).await
}
