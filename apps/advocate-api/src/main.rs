use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = advocate_api::Args::parse();

	advocate_api::run(args).await
}
