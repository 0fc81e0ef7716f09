//! Pieces shared by the `advocate-api` and `advocate-query` binaries.

use std::io;

use clap::builder::{
	Styles,
	styling::{AnsiColor, Effects},
};
use tracing_subscriber::EnvFilter;

/// Version string shared by every binary: crate version, git sha and target triple.
pub const VERSION: &str = concat!(
	env!("CARGO_PKG_VERSION"),
	"-",
	env!("VERGEN_GIT_SHA"),
	"-",
	env!("VERGEN_CARGO_TARGET_TRIPLE"),
);

/// Where log lines go. Commands that print results on stdout log to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
	Stdout,
	Stderr,
}

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.literal(AnsiColor::Green.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parses a `service.log_level` directive, falling back to `info` when it is not a valid filter.
pub fn log_filter(level: &str) -> EnvFilter {
	EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global fmt subscriber. A second call keeps the first subscriber.
pub fn init_tracing(level: &str, target: LogTarget) {
	let builder = tracing_subscriber::fmt().with_env_filter(log_filter(level));
	let _ = match target {
		LogTarget::Stdout => builder.try_init(),
		LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_level_falls_back_to_info() {
		assert_eq!(log_filter("advocate=loud").to_string(), "info");
		assert_eq!(log_filter("debug").to_string(), "debug");
	}

	#[test]
	fn version_starts_with_crate_version() {
		assert!(VERSION.starts_with(env!("CARGO_PKG_VERSION")));
	}
}
