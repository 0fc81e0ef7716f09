use std::collections::BTreeSet;

use serde::Serialize;

use crate::AdvocateRecord;

/// Fixed experience bands offered to the UI, independent of the data.
pub const EXPERIENCE_RANGES: [ExperienceRange; 4] = [
	ExperienceRange { label: "0-5 years", min: 0, max: 5 },
	ExperienceRange { label: "6-10 years", min: 6, max: 10 },
	ExperienceRange { label: "11-15 years", min: 11, max: 15 },
	ExperienceRange { label: "16+ years", min: 16, max: 999 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceRange {
	pub label: &'static str,
	pub min: u32,
	pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
	pub cities: Vec<String>,
	pub degrees: Vec<String>,
	pub experience_ranges: Vec<ExperienceRange>,
	pub specialties: Vec<String>,
}

/// Distinct cities, degrees and specialties in ascending lexicographic order.
pub fn list_filter_options(records: &[AdvocateRecord]) -> FilterOptions {
	let cities: BTreeSet<&str> = records.iter().map(|record| record.city.as_str()).collect();
	let degrees: BTreeSet<&str> = records.iter().map(|record| record.degree.as_str()).collect();
	let specialties: BTreeSet<&str> = records
		.iter()
		.flat_map(|record| record.specialties.iter().map(String::as_str))
		.collect();

	FilterOptions {
		cities: cities.into_iter().map(str::to_string).collect(),
		degrees: degrees.into_iter().map(str::to_string).collect(),
		experience_ranges: EXPERIENCE_RANGES.to_vec(),
		specialties: specialties.into_iter().map(str::to_string).collect(),
	}
}
