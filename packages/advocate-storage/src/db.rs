use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions, types::Json};

use advocate_domain::AdvocateRecord;

use crate::{Error, Result, models::AdvocateRow, schema};

const SELECT_COLUMNS: &str = "id, first_name, last_name, city, degree, specialties, \
	years_of_experience, phone_number, created_at";

#[derive(Clone, Debug)]
pub struct Db {
	pub pool: PgPool,
}
impl Db {
	pub async fn connect(cfg: &advocate_config::Postgres) -> Result<Self> {
		let pool = pool_options(cfg).connect(&cfg.dsn).await?;

		Ok(Self { pool })
	}

	/// Builds the pool without opening a connection; the first query connects.
	pub fn connect_lazy(cfg: &advocate_config::Postgres) -> Result<Self> {
		let pool = pool_options(cfg).connect_lazy(&cfg.dsn)?;

		Ok(Self { pool })
	}

	pub async fn ensure_schema(&self) -> Result<()> {
		let lock_id: i64 = 4_120_517;
		// Advisory locks are held per connection. Use a single transaction so the lock is scoped to
		// one connection and automatically released when the transaction ends.
		let mut tx = self.pool.begin().await?;

		sqlx::query("SELECT pg_advisory_xact_lock($1)").bind(lock_id).execute(&mut *tx).await?;

		for statement in schema::render_schema().split(';') {
			let trimmed = statement.trim();

			if trimmed.is_empty() {
				continue;
			}

			sqlx::query(trimmed).execute(&mut *tx).await?;
		}

		tx.commit().await?;

		Ok(())
	}

	/// Inserts every record in one transaction and returns the stored rows with their ids.
	pub async fn insert_advocates(&self, records: &[AdvocateRecord]) -> Result<Vec<AdvocateRecord>> {
		let sql = format!(
			"\
INSERT INTO advocates (first_name, last_name, city, degree, specialties, years_of_experience, phone_number)
VALUES ($1, $2, $3, $4, $5, $6, $7)
RETURNING {SELECT_COLUMNS}"
		);
		let mut tx = self.pool.begin().await?;
		let mut inserted = Vec::with_capacity(records.len());

		for record in records {
			let years = i32::try_from(record.years_of_experience).map_err(|_| {
				Error::InvalidRecord(format!(
					"years_of_experience for {} is out of range.",
					record.full_name()
				))
			})?;
			let phone = i64::try_from(record.phone_number).map_err(|_| {
				Error::InvalidRecord(format!(
					"phone_number for {} is out of range.",
					record.full_name()
				))
			})?;
			let row: AdvocateRow = sqlx::query_as(&sql)
				.bind(record.first_name.as_str())
				.bind(record.last_name.as_str())
				.bind(record.city.as_str())
				.bind(record.degree.as_str())
				.bind(Json(&record.specialties))
				.bind(years)
				.bind(phone)
				.fetch_one(&mut *tx)
				.await?;

			inserted.push(AdvocateRecord::try_from(row)?);
		}

		tx.commit().await?;

		Ok(inserted)
	}

	pub async fn fetch_advocates(&self) -> Result<Vec<AdvocateRecord>> {
		let sql = format!("SELECT {SELECT_COLUMNS} FROM advocates ORDER BY id");
		let rows: Vec<AdvocateRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

		rows.into_iter().map(AdvocateRecord::try_from).collect()
	}
}

fn pool_options(cfg: &advocate_config::Postgres) -> PgPoolOptions {
	PgPoolOptions::new()
		.max_connections(cfg.pool_max_conns)
		.acquire_timeout(Duration::from_millis(cfg.acquire_timeout_ms))
}
