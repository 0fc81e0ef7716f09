//! Advocate directory records and the pure query pipeline over them.
//!
//! Nothing in this crate performs I/O. Callers hand in a snapshot of the record store and
//! receive a page of results or the derived filter options.

pub mod filter_options;
pub mod params;
pub mod query;
pub mod record;
pub mod time_serde;

pub use filter_options::{EXPERIENCE_RANGES, ExperienceRange, FilterOptions, list_filter_options};
pub use params::{
	DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_EXPERIENCE, MAX_PAGE_SIZE, MIN_EXPERIENCE, PageLimits,
	QueryParameters, RawQuery, SearchMode,
};
pub use query::{PageResult, PaginationInfo, query};
pub use record::AdvocateRecord;
