use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One directory entry. Records are built once when the store loads and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocateRecord {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	pub first_name: String,
	pub last_name: String,
	pub city: String,
	pub degree: String,
	#[serde(default)]
	pub specialties: Vec<String>,
	pub years_of_experience: u32,
	/// Ten digits, stored unformatted.
	pub phone_number: u64,
	#[serde(
		default,
		with = "crate::time_serde",
		skip_serializing_if = "Option::is_none"
	)]
	pub created_at: Option<OffsetDateTime>,
}
impl AdvocateRecord {
	pub fn full_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}

	/// Every searchable field joined by single spaces and lower-cased.
	pub(crate) fn searchable_text(&self) -> String {
		format!(
			"{} {} {} {} {} {}",
			self.first_name,
			self.last_name,
			self.city,
			self.degree,
			self.years_of_experience,
			self.specialties.join(" ")
		)
		.to_lowercase()
	}
}
