//! Runs directory queries from the command line and prints the JSON the HTTP API would return.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use advocate_cli::LogTarget;
use advocate_domain::RawQuery;
use advocate_service::AdvocateService;

#[derive(Debug, Parser)]
#[command(
	version = advocate_cli::VERSION,
	rename_all = "kebab",
	styles = advocate_cli::styles(),
)]
pub struct Args {
	/// Service config. Without it the embedded dataset and default limits are used.
	#[arg(long, short = 'c', value_name = "FILE", global = true)]
	pub config: Option<PathBuf>,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Filter and paginate advocates.
	Advocates(AdvocateArgs),
	/// List the selectable filter values.
	Filters,
}

#[derive(Debug, Default, ClapArgs)]
#[command(rename_all = "kebab")]
pub struct AdvocateArgs {
	#[arg(long)]
	pub search: Option<String>,
	/// Comma-separated cities.
	#[arg(long)]
	pub city: Option<String>,
	/// Comma-separated degrees.
	#[arg(long)]
	pub degree: Option<String>,
	/// Comma-separated specialties.
	#[arg(long)]
	pub specialties: Option<String>,
	#[arg(long, allow_hyphen_values = true)]
	pub experience_min: Option<String>,
	#[arg(long, allow_hyphen_values = true)]
	pub experience_max: Option<String>,
	#[arg(long, allow_hyphen_values = true)]
	pub page: Option<String>,
	#[arg(long, allow_hyphen_values = true)]
	pub page_size: Option<String>,
}
impl From<AdvocateArgs> for RawQuery {
	fn from(args: AdvocateArgs) -> Self {
		Self {
			search: args.search,
			city: args.city,
			degree: args.degree,
			specialties: args.specialties,
			experience_min: args.experience_min,
			experience_max: args.experience_max,
			page: args.page,
			page_size: args.page_size,
		}
	}
}

/// Executes the command and returns the pretty-printed JSON result.
pub async fn run(args: Args) -> color_eyre::Result<String> {
	let service = match args.config.as_deref() {
		Some(path) => {
			let config = advocate_config::load(path)?;

			advocate_cli::init_tracing(&config.service.log_level, LogTarget::Stderr);

			AdvocateService::from_config(&config).await?
		},
		None => {
			advocate_cli::init_tracing("warn", LogTarget::Stderr);

			AdvocateService::in_memory(advocate_storage::seed::embedded()?)
		},
	};

	execute(&service, args.command).await
}

pub async fn execute(service: &AdvocateService, command: Command) -> color_eyre::Result<String> {
	let output = match command {
		Command::Advocates(query) => {
			let result = service.advocates(&RawQuery::from(query)).await?;

			serde_json::to_string_pretty(&result)?
		},
		Command::Filters => serde_json::to_string_pretty(&service.filters().await?)?,
	};

	Ok(output)
}
