//! The record store: the embedded seed dataset, operator-supplied JSON datasets and the optional
//! Postgres table, all exposed through [`source::RecordSource`].

pub mod db;
pub mod models;
pub mod schema;
pub mod seed;
pub mod source;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
