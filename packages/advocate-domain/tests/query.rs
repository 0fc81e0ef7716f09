use advocate_domain::{
	AdvocateRecord, PageLimits, PageResult, QueryParameters, RawQuery, SearchMode, query,
};

fn advocate(
	first_name: &str,
	last_name: &str,
	city: &str,
	degree: &str,
	specialties: &[&str],
	years_of_experience: u32,
) -> AdvocateRecord {
	AdvocateRecord {
		id: None,
		first_name: first_name.to_string(),
		last_name: last_name.to_string(),
		city: city.to_string(),
		degree: degree.to_string(),
		specialties: specialties.iter().map(|value| value.to_string()).collect(),
		years_of_experience,
		phone_number: 5_555_550_100,
		created_at: None,
	}
}

fn anne() -> AdvocateRecord {
	advocate("Anne", "Smith", "Austin", "MD", &["trauma"], 5)
}

fn directory() -> Vec<AdvocateRecord> {
	vec![
		anne(),
		advocate("Ben", "Nguyen", "Denver", "PhD", &["Sleep issues", "trauma"], 8),
		advocate("Carla", "Mendez", "Austin", "MSW", &["Eating disorders"], 12),
		advocate("David", "Okafor", "Boston", "MD", &["Sleep issues"], 10),
		advocate("Erin", "Anders", "Denver", "MSW", &[], 6),
		advocate("Frank", "Ho", "Austin", "PhD", &["LGBTQ", "trauma"], 21),
	]
}

fn numbered(count: usize) -> Vec<AdvocateRecord> {
	(0..count)
		.map(|index| {
			let mut record = advocate("Person", "Numbered", "Austin", "MD", &[], 3);

			record.id = Some(index as i64 + 1);

			record
		})
		.collect()
}

fn params(pairs: &[(&str, &str)]) -> QueryParameters {
	let raw = RawQuery::from_pairs(pairs.iter().map(|(key, value)| (*key, *value)));

	QueryParameters::from_raw(&raw, PageLimits::default(), SearchMode::Compatible)
}

fn first_names(result: &PageResult) -> Vec<&str> {
	result.data.iter().map(|record| record.first_name.as_str()).collect()
}

#[test]
fn search_by_first_name() {
	let store = vec![anne()];
	let result = query(&store, &params(&[("search", "anne")]));

	assert_eq!(result.data, store);
	assert_eq!(result.pagination.total_count, 1);
}

#[test]
fn city_and_degree_are_conjunctive() {
	let store = vec![anne()];
	let result = query(&store, &params(&[("city", "Austin"), ("degree", "PhD")]));

	assert!(result.data.is_empty());
	assert_eq!(result.pagination.total_count, 0);
	assert_eq!(result.pagination.total_pages, 0);
	assert!(!result.pagination.has_next_page);
}

#[test]
fn second_page_holds_remainder() {
	let store = numbered(25);
	let first = query(&store, &params(&[("pageSize", "20"), ("page", "1")]));
	let second = query(&store, &params(&[("pageSize", "20"), ("page", "2")]));

	assert_eq!(first.data.len(), 20);
	assert!(first.pagination.has_next_page);
	assert!(!first.pagination.has_prev_page);
	assert_eq!(second.data.len(), 5);
	assert_eq!(second.data[0].id, Some(21));
	assert_eq!(second.pagination.total_pages, 2);
	assert!(!second.pagination.has_next_page);
	assert!(second.pagination.has_prev_page);
}

#[test]
fn experience_range_is_inclusive() {
	let result = query(&directory(), &params(&[("experienceMin", "6"), ("experienceMax", "10")]));

	assert_eq!(first_names(&result), ["Ben", "David", "Erin"]);
	assert!(
		result
			.data
			.iter()
			.all(|record| (6..=10).contains(&record.years_of_experience))
	);
}

#[test]
fn multi_keyword_search_requires_every_keyword() {
	let result = query(&directory(), &params(&[("search", "anne md")]));

	assert_eq!(first_names(&result), ["Anne"]);

	// "anders" contains "and", "msw" matches Erin's degree.
	let result = query(&directory(), &params(&[("search", "AND msw")]));

	assert_eq!(first_names(&result), ["Erin"]);
}

#[test]
fn single_keyword_matches_specialties_case_insensitively() {
	let result = query(&directory(), &params(&[("search", "SLEEP")]));

	assert_eq!(first_names(&result), ["Ben", "David"]);
}

#[test]
fn single_keyword_matches_experience_digits() {
	let result = query(&directory(), &params(&[("search", "1")]));

	// 12, 10 and 21 contain "1"; nobody's name, city or degree does.
	assert_eq!(first_names(&result), ["Carla", "David", "Frank"]);
}

#[test]
fn specialties_filter_is_any_of() {
	let result = query(&directory(), &params(&[("specialties", "LGBTQ,Eating disorders")]));

	assert_eq!(first_names(&result), ["Carla", "Frank"]);

	let result = query(&directory(), &params(&[("specialties", "lgbtq")]));

	assert!(result.data.is_empty());
}

#[test]
fn city_filter_is_case_sensitive() {
	assert!(query(&directory(), &params(&[("city", "austin")])).data.is_empty());
	assert_eq!(
		first_names(&query(&directory(), &params(&[("city", "Austin,Boston")]))),
		["Anne", "Carla", "David", "Frank"]
	);
}

#[test]
fn out_of_range_page_is_empty() {
	let result = query(&directory(), &params(&[("page", "9"), ("pageSize", "2")]));

	assert!(result.data.is_empty());
	assert_eq!(result.pagination.page, 9);
	assert_eq!(result.pagination.total_pages, 3);
	assert!(!result.pagination.has_next_page);
	assert!(result.pagination.has_prev_page);
}

#[test]
fn malformed_numbers_fall_back_to_defaults() {
	let parsed = params(&[
		("page", "abc"),
		("pageSize", "lots"),
		("experienceMin", ""),
		("experienceMax", "x"),
	]);

	assert_eq!(parsed, QueryParameters::default());

	let parsed = params(&[("page", "-4"), ("pageSize", "500")]);

	assert_eq!(parsed.page, 1);
	assert_eq!(parsed.page_size, 100);

	let parsed = params(&[("pageSize", "0")]);

	assert_eq!(parsed.page_size, 20);
}

#[test]
fn pages_partition_the_filtered_set() {
	let store = numbered(47);

	for page_size in [1_usize, 3, 7, 20, 47, 100] {
		let size = page_size.to_string();
		let first = query(&store, &params(&[("pageSize", size.as_str())]));
		let total_pages = first.pagination.total_pages;
		let mut seen = Vec::new();

		assert_eq!(total_pages, first.pagination.total_count.div_ceil(page_size));

		for page in 1..=total_pages + 1 {
			let page_value = page.to_string();
			let result =
				query(&store, &params(&[("pageSize", size.as_str()), ("page", page_value.as_str())]));

			assert!(result.data.len() <= page_size);

			seen.extend(result.data.into_iter().map(|record| record.id));
		}

		let expected: Vec<Option<i64>> = store.iter().map(|record| record.id).collect();

		assert_eq!(seen, expected, "page_size={page_size}");
	}
}

#[test]
fn repeated_queries_are_identical() {
	let store = directory();
	let parameters = params(&[("search", "a"), ("city", "Austin,Denver"), ("pageSize", "2")]);

	assert_eq!(query(&store, &parameters), query(&store, &parameters));
}

#[test]
fn extra_constraints_never_grow_the_result() {
	let store = directory();
	let base = [("search", "e")];
	let baseline = query(&store, &params(&base)).pagination.total_count;

	for extra in [
		("city", "Denver"),
		("degree", "MSW"),
		("specialties", "trauma"),
		("experienceMin", "7"),
		("experienceMax", "9"),
	] {
		let narrowed = query(&store, &params(&[base[0], extra])).pagination.total_count;

		assert!(narrowed <= baseline, "{extra:?} widened the result");
	}
}

#[test]
fn survivors_keep_store_order() {
	let store = directory();
	let result = query(&store, &params(&[("degree", "MD,PhD,MSW"), ("pageSize", "100")]));
	let positions: Vec<usize> = result
		.data
		.iter()
		.map(|record| {
			store.iter().position(|candidate| candidate == record).expect("record from store")
		})
		.collect();

	assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn whitespace_only_search_depends_on_mode() {
	let store = vec![advocate("Anne", "Lee", "Austin", "MD", &[], 5)];
	let raw = RawQuery::from_pairs([("search", "   ")]);
	let compatible = QueryParameters::from_raw(&raw, PageLimits::default(), SearchMode::Compatible);
	let unified = QueryParameters::from_raw(&raw, PageLimits::default(), SearchMode::Unified);

	assert_eq!(query(&store, &compatible).pagination.total_count, 0);
	assert_eq!(query(&store, &unified).pagination.total_count, 1);
}
