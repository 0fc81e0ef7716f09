#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Sqlx(#[from] sqlx::Error),
	#[error("Failed to read records at {path:?}.")]
	ReadRecords { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse records: {0}")]
	ParseRecords(#[from] serde_json::Error),
	#[error("Invalid record: {0}")]
	InvalidRecord(String),
}
