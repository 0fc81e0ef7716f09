//! Request parameters and their lenient parsing.
//!
//! Numeric inputs never fail: anything unparseable falls back to the documented default.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;
pub const MIN_EXPERIENCE: i64 = 0;
pub const MAX_EXPERIENCE: i64 = 999;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
	/// Single-keyword searches match individual fields, and the raw term is also tested against
	/// the years of experience. Multi-keyword searches require every keyword in the combined text.
	#[default]
	Compatible,
	/// Every search requires every keyword in the combined text.
	Unified,
}
impl SearchMode {
	pub fn parse(raw: &str) -> Option<Self> {
		match raw.trim() {
			"compatible" => Some(Self::Compatible),
			"unified" => Some(Self::Unified),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Compatible => "compatible",
			Self::Unified => "unified",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
	pub default_page_size: usize,
	pub max_page_size: usize,
}
impl Default for PageLimits {
	fn default() -> Self {
		Self { default_page_size: DEFAULT_PAGE_SIZE, max_page_size: MAX_PAGE_SIZE }
	}
}

/// Query-string values exactly as received, before any defaulting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuery {
	pub search: Option<String>,
	pub city: Option<String>,
	pub degree: Option<String>,
	pub specialties: Option<String>,
	pub experience_min: Option<String>,
	pub experience_max: Option<String>,
	pub page: Option<String>,
	pub page_size: Option<String>,
}
impl RawQuery {
	/// Builds a raw query from decoded key/value pairs. Unknown keys are ignored and a repeated
	/// key keeps its last value.
	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let mut raw = Self::default();

		for (key, value) in pairs {
			let slot = match key.as_ref() {
				"search" => &mut raw.search,
				"city" => &mut raw.city,
				"degree" => &mut raw.degree,
				"specialties" => &mut raw.specialties,
				"experienceMin" => &mut raw.experience_min,
				"experienceMax" => &mut raw.experience_max,
				"page" => &mut raw.page,
				"pageSize" => &mut raw.page_size,
				_ => continue,
			};

			*slot = Some(value.into());
		}

		raw
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameters {
	pub search: String,
	pub city: BTreeSet<String>,
	pub degree: BTreeSet<String>,
	pub specialties: BTreeSet<String>,
	/// Inclusive lower bound on years of experience.
	pub experience_min: i64,
	/// Inclusive upper bound on years of experience.
	pub experience_max: i64,
	/// 1-based.
	pub page: usize,
	pub page_size: usize,
	pub search_mode: SearchMode,
}
impl Default for QueryParameters {
	fn default() -> Self {
		Self {
			search: String::new(),
			city: BTreeSet::new(),
			degree: BTreeSet::new(),
			specialties: BTreeSet::new(),
			experience_min: MIN_EXPERIENCE,
			experience_max: MAX_EXPERIENCE,
			page: DEFAULT_PAGE,
			page_size: DEFAULT_PAGE_SIZE,
			search_mode: SearchMode::default(),
		}
	}
}
impl QueryParameters {
	pub fn from_raw(raw: &RawQuery, limits: PageLimits, search_mode: SearchMode) -> Self {
		let page = raw
			.page
			.as_deref()
			.and_then(parse_leading_int)
			.map(|page| clamp_to_usize(page.max(1)))
			.unwrap_or(DEFAULT_PAGE);
		let page_size = raw
			.page_size
			.as_deref()
			.and_then(parse_leading_int)
			.filter(|size| *size > 0)
			.map(clamp_to_usize)
			.unwrap_or(limits.default_page_size)
			.min(limits.max_page_size);

		Self {
			search: raw.search.clone().unwrap_or_default(),
			city: split_list(raw.city.as_deref()),
			degree: split_list(raw.degree.as_deref()),
			specialties: split_list(raw.specialties.as_deref()),
			experience_min: raw
				.experience_min
				.as_deref()
				.and_then(parse_leading_int)
				.unwrap_or(MIN_EXPERIENCE),
			experience_max: raw
				.experience_max
				.as_deref()
				.and_then(parse_leading_int)
				.unwrap_or(MAX_EXPERIENCE),
			page,
			page_size,
			search_mode,
		}
	}

	/// Whether either experience bound narrows the default 0..=999 window.
	pub fn has_experience_bound(&self) -> bool {
		self.experience_min > MIN_EXPERIENCE || self.experience_max < MAX_EXPERIENCE
	}
}

/// Splits a comma-separated list, dropping empty segments. Values are kept verbatim.
fn split_list(raw: Option<&str>) -> BTreeSet<String> {
	raw.map(|raw| {
		raw.split(',').filter(|segment| !segment.is_empty()).map(str::to_string).collect()
	})
	.unwrap_or_default()
}

/// Reads an optionally signed run of leading digits, ignoring anything after it. Values outside
/// the `i64` range saturate.
fn parse_leading_int(raw: &str) -> Option<i64> {
	let trimmed = raw.trim_start();
	let (negative, rest) = match trimmed.as_bytes().first() {
		Some(b'-') => (true, &trimmed[1..]),
		Some(b'+') => (false, &trimmed[1..]),
		_ => (false, trimmed),
	};
	let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();

	if digits_len == 0 {
		return None;
	}

	let digits = &rest[..digits_len];
	let parsed = digits.parse::<i64>().unwrap_or(i64::MAX);

	Some(if negative { -parsed } else { parsed })
}

fn clamp_to_usize(value: i64) -> usize {
	usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_leading_integers() {
		assert_eq!(parse_leading_int("42"), Some(42));
		assert_eq!(parse_leading_int("  7abc"), Some(7));
		assert_eq!(parse_leading_int("-3"), Some(-3));
		assert_eq!(parse_leading_int("+12"), Some(12));
		assert_eq!(parse_leading_int("abc"), None);
		assert_eq!(parse_leading_int(""), None);
		assert_eq!(parse_leading_int("-"), None);
		assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
	}

	#[test]
	fn list_drops_empty_segments() {
		let list = split_list(Some("Austin,,Denver,"));

		assert_eq!(list.len(), 2);
		assert!(list.contains("Austin"));
		assert!(list.contains("Denver"));
		assert!(split_list(Some(",")).is_empty());
		assert!(split_list(None).is_empty());
	}

	#[test]
	fn search_mode_round_trips_names() {
		for mode in [SearchMode::Compatible, SearchMode::Unified] {
			assert_eq!(SearchMode::parse(mode.as_str()), Some(mode));
		}

		assert_eq!(SearchMode::parse("fuzzy"), None);
	}
}
