//! Seed datasets.
//!
//! The embedded dataset ships with the binary. An operator may point `storage.records_path` at a
//! JSON array of the same shape to replace it.

use std::{fs, path::Path};

use advocate_domain::AdvocateRecord;

use crate::{Error, Result};

const EMBEDDED_ADVOCATES_JSON: &str = include_str!("../../../data/advocates.json");

pub fn embedded() -> Result<Vec<AdvocateRecord>> {
	parse(EMBEDDED_ADVOCATES_JSON)
}

pub fn from_path(path: &Path) -> Result<Vec<AdvocateRecord>> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadRecords { path: path.to_path_buf(), source: err })?;

	parse(&raw)
}

/// Loads the dataset at `records_path`, or the embedded one when no path is configured.
pub fn load(records_path: Option<&Path>) -> Result<Vec<AdvocateRecord>> {
	match records_path {
		Some(path) => from_path(path),
		None => embedded(),
	}
}

pub fn parse(raw: &str) -> Result<Vec<AdvocateRecord>> {
	let records: Vec<AdvocateRecord> = serde_json::from_str(raw)?;

	for (index, record) in records.iter().enumerate() {
		validate(index, record)?;
	}

	Ok(records)
}

fn validate(index: usize, record: &AdvocateRecord) -> Result<()> {
	for (label, value) in [
		("firstName", &record.first_name),
		("lastName", &record.last_name),
		("city", &record.city),
		("degree", &record.degree),
	] {
		if value.trim().is_empty() {
			return Err(Error::InvalidRecord(format!("[{index}].{label} must be non-empty.")));
		}
	}

	Ok(())
}
