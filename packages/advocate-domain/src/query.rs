//! Filter and paginate a record snapshot.
//!
//! Each filter stage only removes records, so survivors keep their store order and identical
//! inputs always produce identical pages.

use serde::{Deserialize, Serialize};

use crate::{AdvocateRecord, QueryParameters, SearchMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
	pub page: usize,
	pub page_size: usize,
	pub total_count: usize,
	pub total_pages: usize,
	pub has_next_page: bool,
	pub has_prev_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
	pub data: Vec<AdvocateRecord>,
	pub pagination: PaginationInfo,
}

pub fn query(records: &[AdvocateRecord], params: &QueryParameters) -> PageResult {
	let search = SearchTerm::new(&params.search, params.search_mode);
	let matching: Vec<&AdvocateRecord> = records
		.iter()
		.filter(|record| search.as_ref().is_none_or(|term| term.matches(record)))
		.filter(|record| params.city.is_empty() || params.city.contains(&record.city))
		.filter(|record| params.degree.is_empty() || params.degree.contains(&record.degree))
		.filter(|record| {
			if !params.has_experience_bound() {
				return true;
			}

			let years = i64::from(record.years_of_experience);

			params.experience_min <= years && years <= params.experience_max
		})
		.filter(|record| {
			params.specialties.is_empty()
				|| record.specialties.iter().any(|specialty| params.specialties.contains(specialty))
		})
		.collect();

	paginate(&matching, params.page, params.page_size)
}

fn paginate(matching: &[&AdvocateRecord], page: usize, page_size: usize) -> PageResult {
	let total_count = matching.len();
	let total_pages = if page_size == 0 { 0 } else { total_count.div_ceil(page_size) };
	let offset = page.saturating_sub(1).saturating_mul(page_size);
	let data = matching
		.iter()
		.skip(offset)
		.take(page_size)
		.map(|record| (*record).clone())
		.collect();

	PageResult {
		data,
		pagination: PaginationInfo {
			page,
			page_size,
			total_count,
			total_pages,
			has_next_page: page < total_pages,
			has_prev_page: page > 1,
		},
	}
}

struct SearchTerm<'a> {
	raw: &'a str,
	lowered: String,
	keywords: Vec<String>,
	mode: SearchMode,
}
impl<'a> SearchTerm<'a> {
	/// Returns `None` when no text filter applies: an empty search, or a whitespace-only search
	/// in unified mode. A whitespace-only search in compatible mode is matched as-is.
	fn new(raw: &'a str, mode: SearchMode) -> Option<Self> {
		if raw.is_empty() {
			return None;
		}

		let lowered = raw.to_lowercase();
		let keywords: Vec<String> = lowered.split_whitespace().map(str::to_string).collect();

		if keywords.is_empty() && mode == SearchMode::Unified {
			return None;
		}

		Some(Self { raw, lowered, keywords, mode })
	}

	fn matches(&self, record: &AdvocateRecord) -> bool {
		if self.mode == SearchMode::Unified || self.keywords.len() > 1 {
			let text = record.searchable_text();

			return self.keywords.iter().all(|keyword| text.contains(keyword.as_str()));
		}

		let term = self.lowered.as_str();

		record.first_name.to_lowercase().contains(term)
			|| record.last_name.to_lowercase().contains(term)
			|| record.city.to_lowercase().contains(term)
			|| record.degree.to_lowercase().contains(term)
			|| record.specialties.iter().any(|specialty| specialty.to_lowercase().contains(term))
			|| record.years_of_experience.to_string().contains(self.raw)
	}
}
