pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	#[error("Storage error: {message}")]
	Storage { message: String },
	#[error("Invalid record: {message}")]
	InvalidRecord { message: String },
}
impl From<advocate_storage::Error> for ServiceError {
	fn from(err: advocate_storage::Error) -> Self {
		match err {
			advocate_storage::Error::InvalidRecord(message) => Self::InvalidRecord { message },
			advocate_storage::Error::ParseRecords(inner) =>
				Self::InvalidRecord { message: inner.to_string() },
			other => Self::Storage { message: other.to_string() },
		}
	}
}
