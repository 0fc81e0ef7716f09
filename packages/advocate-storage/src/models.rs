use sqlx::types::Json;
use time::OffsetDateTime;

use advocate_domain::AdvocateRecord;

use crate::{Error, Result};

#[derive(Debug, sqlx::FromRow)]
pub struct AdvocateRow {
	pub id: i64,
	pub first_name: String,
	pub last_name: String,
	pub city: String,
	pub degree: String,
	pub specialties: Json<Vec<String>>,
	pub years_of_experience: i32,
	pub phone_number: i64,
	pub created_at: OffsetDateTime,
}
impl TryFrom<AdvocateRow> for AdvocateRecord {
	type Error = Error;

	fn try_from(row: AdvocateRow) -> Result<Self> {
		let years_of_experience = u32::try_from(row.years_of_experience).map_err(|_| {
			Error::InvalidRecord(format!("advocate {} has negative years_of_experience.", row.id))
		})?;
		let phone_number = u64::try_from(row.phone_number).map_err(|_| {
			Error::InvalidRecord(format!("advocate {} has a negative phone_number.", row.id))
		})?;

		Ok(Self {
			id: Some(row.id),
			first_name: row.first_name,
			last_name: row.last_name,
			city: row.city,
			degree: row.degree,
			specialties: row.specialties.0,
			years_of_experience,
			phone_number,
			created_at: Some(row.created_at),
		})
	}
}
